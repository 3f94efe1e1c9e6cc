pub mod aggregate;
pub mod request;

pub use aggregate::{RelatedItem, RelatedItemId};
pub use request::{SelectionEntry, UpdateSelectedRequest};
