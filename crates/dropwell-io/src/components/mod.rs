//! Dioxus UI components for dropwell.
//!
//! Provides the drag-and-drop image uploader along with small input
//! widgets: scroll-to-bottom container, popover, focus broadcast target,
//! select-on-click field, commit-on-blur field, validated name field, and
//! editable item list.

mod blur_input;
mod focus;
mod item_list;
mod name_input;
mod popover;
mod scroll;
mod select_on_click;
mod uploader;

pub use blur_input::BlurInput;
pub use focus::{FocusOn, provide_focus_bus, use_focus_bus};
pub use item_list::ItemListEditor;
pub use name_input::NameInput;
pub use popover::CustomPopover;
pub use scroll::ScrollToBottom;
pub use select_on_click::SelectOnClick;
pub use uploader::ImageUploader;
