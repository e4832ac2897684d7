//! wd-tui: Console front-end for Walk Your Dog
//!
//! Renders the walk as colored text and reads answers line by line.

pub mod console;
pub mod theme;

pub use console::ConsoleDisplay;
pub use theme::Theme;
