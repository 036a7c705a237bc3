mod error;
mod holder;

pub use error::{Error, Result};
pub use holder::{parse_entry, KeyValueHolder};
