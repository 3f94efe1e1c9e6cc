pub mod form_panel;
pub mod image_fallback;
pub mod page_header;
pub mod pagination_controls;
pub mod status_badge;
