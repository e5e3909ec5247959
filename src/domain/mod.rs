pub mod commands;
pub mod errors;
pub mod item;
pub mod member;
pub mod transaction;
pub mod value_objects;

pub use errors::*;
pub use item::*;
pub use member::*;
pub use transaction::*;
pub use value_objects::*;
