//! Save file store and player configuration for "Of Witches and Mazes".
//!
//! [`SaveStore`] manages one `.rawdata` file per character under an
//! injected root directory; [`Configuration`] is the JSON settings file.
//! Both are plain values with synchronous `Result` I/O. Nothing here is a
//! singleton: construct once at startup and pass by reference.

pub mod config;
pub mod error;
pub mod store;

pub use config::{Configuration, WindowMode};
pub use error::{Result, StoreError};
pub use store::{SAVE_EXTENSION, SaveStore, SaveSummary, file_name_for};
