mod error;
mod requests;
mod types;
mod update;

pub use error::ItemError;
pub use requests::{attributes_from_body, item_from_body, parse_item_id};
pub use types::{AttrValue, Attributes, Item, ItemKey, ID_ATTRIBUTE, NAME_ATTRIBUTE};
pub use update::UpdateExpression;
