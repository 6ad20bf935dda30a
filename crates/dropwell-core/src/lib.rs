//! dropwell-core: Pure state machines for upload and input widgets (sans-IO).
//!
//! The centerpiece is [`Uploader`], a drag-and-drop file target that
//! tracks drag-over state and hands the first arriving file to a
//! caller-supplied callback. The remaining modules model the small
//! single-purpose widgets that usually sit next to it: scroll-to-bottom
//! detection, popovers, focus broadcast, commit-on-blur inputs,
//! validated name inputs, and an editable item list.
//!
//! This crate has **no browser dependencies** -- it is driven by plain
//! method calls and returns structured data. All DOM wiring lives in
//! `dropwell-io`.

pub mod blur;
pub mod config;
pub mod filename;
pub mod focus;
pub mod instance;
pub mod list;
pub mod popover;
pub mod scroll;
pub mod types;
pub mod uploader;
pub mod validation;

pub use config::{EmptyDropPolicy, UploaderConfig};
pub use filename::filename_from_path;
pub use instance::InstanceId;
pub use types::{DragState, SelectedFile, UploadError};
pub use uploader::{NamedFile, SubscriptionId, Uploader};
