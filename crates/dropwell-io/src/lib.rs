//! dropwell-io: Browser event adapters and Dioxus component library.
//!
//! Wires DOM drag, drop, change, scroll, focus, and blur events to the
//! state machines in `dropwell-core`, reads uploaded files, and provides
//! reusable UI components for Dioxus web applications.
//!
//! The components style themselves with `dropwell-*` classes defined in
//! [`STYLESHEET`]; mount it once per page, e.g.
//! `style { dangerous_inner_html: dropwell_io::STYLESHEET }`.

pub mod components;
pub mod dom;
pub mod file;

pub use components::{
    BlurInput, CustomPopover, FocusOn, ImageUploader, ItemListEditor, NameInput, ScrollToBottom,
    SelectOnClick, provide_focus_bus, use_focus_bus,
};
pub use file::{PickedFile, ReadError, UploadedFile};

/// Structural CSS for every component in this crate.
pub const STYLESHEET: &str = include_str!("../assets/dropwell.css");
