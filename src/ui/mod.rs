pub mod app;
pub mod controls;
pub mod copy;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod request;
pub mod result_panel;
pub mod runtime;
pub mod terminal_guard;
pub mod text_buffer;
pub mod theme;

pub use runtime::run;
