pub mod api_utils;
pub mod components;
pub mod dialogs;
pub mod icons;
pub mod pagination;
pub mod request_sequence;
