pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::{Menu, MenuChoice};
pub use prompt::Prompt;
pub use session::{Flow, Session};
