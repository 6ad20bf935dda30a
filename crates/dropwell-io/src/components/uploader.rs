//! Drag-and-drop image uploader with a fallback file picker.

use std::fmt::Write;

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use dropwell_core::{DragState, SelectedFile, UploadError, Uploader, UploaderConfig};

use crate::dom;
use crate::file::{PickedFile, UploadedFile, read_selected};

/// Class the zone always carries while a drag is over it, alongside the
/// configured active class. The shipped stylesheet keys on it.
const ACTIVE_MODIFIER: &str = "dropwell-uploader--active";

/// Props for the [`ImageUploader`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImageUploaderProps {
    /// Called with the file contents and display name once a file has
    /// been accepted and read.
    on_file_changed: EventHandler<UploadedFile>,
    /// Sizing hints, accept list, empty-drop policy, and active class.
    /// Read once when the component mounts; later changes are ignored.
    #[props(default)]
    config: UploaderConfig,
    /// Called on every drag state transition.
    on_state_change: Option<EventHandler<DragState>>,
}

/// A drop zone that also offers a file picker.
///
/// While a drag is over the zone it carries the configured active class
/// and [`ACTIVE_MODIFIER`].
/// The first dropped or picked file is checked against the accept list,
/// read, and passed to `on_file_changed`. Each instance owns its input
/// element and handlers, so several uploaders can share a page.
#[component]
pub fn ImageUploader(props: ImageUploaderProps) -> Element {
    let mut active = use_signal(|| false);
    let mut filename = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let on_file_changed = props.on_file_changed;
    let on_state_change = props.on_state_change;
    let config = props.config.clone();

    let mut uploader = use_signal(move || {
        let mut uploader = Uploader::new(config, move |selected: SelectedFile<PickedFile>| {
            spawn(async move {
                match read_selected(selected).await {
                    Ok(file) => {
                        filename.set(Some(file.name.clone()));
                        error.set(None);
                        on_file_changed.call(file);
                    }
                    Err(e) => {
                        dom::warn(&format!("image uploader: {e}"));
                        error.set(Some(e.to_string()));
                    }
                }
            });
        });
        uploader.subscribe(move |state| {
            active.set(state.is_active());
            if let Some(handler) = on_state_change {
                handler.call(state);
            }
        });
        uploader
    });

    let handle_files = move |evt: FormEvent| {
        let files = evt.files().into_iter().map(PickedFile);
        let outcome = uploader.write().manual_select(files, &evt.value());
        report(error, outcome);
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        let files = evt.files().into_iter().map(PickedFile);
        let outcome = uploader.write().drop_files(files);
        report(error, outcome);
    };

    let (input_id, accept, active_class, sizing) = {
        let uploader = uploader.peek();
        let config = uploader.config();
        (
            uploader.id().input_id(),
            config.accept_attribute(),
            config.active_class.clone(),
            size_style(config),
        )
    };
    let state_class = zone_class(&active_class, active());

    rsx! {
        div {
            class: "{state_class}",
            style: "{sizing}",
            "data-instance": "{input_id}",
            ondragenter: move |evt| {
                evt.prevent_default();
                uploader.write().drag_enter();
            },
            ondragover: move |evt| {
                evt.prevent_default();
                uploader.write().drag_over();
            },
            ondragleave: move |_| {
                uploader.write().drag_leave();
            },
            ondragend: move |_| {
                uploader.write().drag_end();
            },
            ondrop: handle_drop,

            Icon { icon: LdUpload, width: 32, height: 32, class: "dropwell-uploader-icon" }

            if let Some(ref name) = filename() {
                p { class: "dropwell-uploader-loaded", "Loaded: {name}" }
            }

            if let Some(ref err) = error() {
                p { class: "dropwell-error-text", "{err}" }
            }

            p { class: "dropwell-uploader-hint", "Drop a file here or " }

            label {
                r#for: "{input_id}",
                class: "dropwell-button dropwell-button--primary",
                "Choose File"
            }
            input {
                id: "{input_id}",
                r#type: "file",
                accept: "{accept}",
                hidden: true,
                onchange: handle_files,
            }
        }
    }
}

/// Show or clear the inline error for a delivery attempt.
fn report(mut error: Signal<Option<String>>, outcome: Result<bool, UploadError>) {
    match outcome {
        Ok(true) => error.set(None),
        Ok(false) => {}
        Err(e) => {
            dom::warn(&format!("image uploader: {e}"));
            error.set(Some(e.to_string()));
        }
    }
}

/// Classes for the drop zone in the given drag state.
fn zone_class(active_class: &str, active: bool) -> String {
    if active {
        format!("dropwell-uploader {ACTIVE_MODIFIER} {active_class}")
    } else {
        "dropwell-uploader".to_owned()
    }
}

/// Inline `style` for the configured sizing hints.
fn size_style(config: &UploaderConfig) -> String {
    let mut style = String::new();
    if let Some(height) = &config.height {
        let _ = write!(style, "height: {height};");
    }
    if let Some(width) = &config.width {
        let _ = write!(style, "width: {width};");
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_style_is_empty_without_hints() {
        assert_eq!(size_style(&UploaderConfig::default()), "");
    }

    #[test]
    fn size_style_renders_both_hints() {
        let config = UploaderConfig {
            height: Some("200px".into()),
            width: Some("50%".into()),
            ..UploaderConfig::default()
        };
        assert_eq!(size_style(&config), "height: 200px;width: 50%;");
    }

    #[test]
    fn idle_zone_has_only_the_base_class() {
        assert_eq!(zone_class("is-active", false), "dropwell-uploader");
    }

    #[test]
    fn active_zone_keeps_the_fixed_modifier_with_a_custom_class() {
        let class = zone_class("drop-here", true);
        assert!(class.split(' ').any(|c| c == ACTIVE_MODIFIER));
        assert!(class.split(' ').any(|c| c == "drop-here"));
    }
}
