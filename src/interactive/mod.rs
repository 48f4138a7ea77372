//! Interactive collaborators: the fuzzy chooser and the text editor

pub mod chooser;
pub mod editor;

pub use chooser::{Chooser, Fzf};
pub use editor::{Editor, ExternalEditor};
