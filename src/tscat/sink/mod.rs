//! Destinations for composed text. No catalog logic lives here.

pub mod clipboard;
pub mod file;

pub use clipboard::copy_to_clipboard;
pub use file::download_to_file;
