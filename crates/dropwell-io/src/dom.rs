//! Direct DOM access for the few things Dioxus does not expose.
//!
//! Selecting an input's text and forcing its value back after a rejected
//! edit both need the underlying `HtmlInputElement`. All functions in
//! this module require a browser environment (`wasm32-unknown-unknown`
//! target) and an element captured from an `onmounted` event.

use dioxus::prelude::MountedData;
use wasm_bindgen::JsCast;

/// Errors that can occur when reaching into the DOM.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// The mounted node is not backed by a web element (non-web renderer).
    #[error("mounted node is not a web element")]
    NotWebElement,

    /// The element exists but is not an `<input>`.
    #[error("element is not an <input>")]
    NotInput,
}

/// Borrow the `HtmlInputElement` behind a mounted node.
fn as_input(mounted: &MountedData) -> Result<&web_sys::HtmlInputElement, DomError> {
    let element = mounted
        .downcast::<web_sys::Element>()
        .ok_or(DomError::NotWebElement)?;
    element
        .dyn_ref::<web_sys::HtmlInputElement>()
        .ok_or(DomError::NotInput)
}

/// Select the full text of a mounted `<input>`.
///
/// # Errors
///
/// Returns [`DomError`] if the node is not a web `<input>` element.
pub fn select_all(mounted: &MountedData) -> Result<(), DomError> {
    as_input(mounted)?.select();
    Ok(())
}

/// Overwrite the live value of a mounted `<input>`.
///
/// Needed when the rendered `value` attribute did not change but the
/// user's typing did, so a re-render alone would leave the typed text.
///
/// # Errors
///
/// Returns [`DomError`] if the node is not a web `<input>` element.
pub fn set_input_value(mounted: &MountedData, value: &str) -> Result<(), DomError> {
    as_input(mounted)?.set_value(value);
    Ok(())
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
