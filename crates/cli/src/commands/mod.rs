pub mod catalog;
pub mod editor;
pub mod prompt;
pub mod util;

pub use catalog::*;
pub use editor::*;
pub use prompt::*;
pub use util::*;
