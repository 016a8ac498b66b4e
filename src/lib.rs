pub mod clipboard;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod summarizer;
pub mod ui;
