pub mod a001_product;
pub mod a002_related_item;
pub mod common;
