pub mod format;
pub mod widgets;
