//! Wire types shared between the catalog backend and the admin frontend.

pub mod domain;
