mod catalog_service;
mod errors;
mod search;

pub use catalog_service::{Catalog, MemberHistory};
pub use errors::{CatalogError, ErrorKind, Result};
pub use search::matches;
