use dioxus::prelude::*;
use dropwell_core::popover::Placement;
use dropwell_core::{DragState, UploaderConfig};
use dropwell_io::{
    BlurInput, CustomPopover, FocusOn, ImageUploader, ItemListEditor, NameInput, ScrollToBottom,
    STYLESHEET, SelectOnClick, UploadedFile, provide_focus_bus,
};

/// Rows appended each time the log reaches its end.
const PAGE_SIZE: usize = 20;

/// Stop loading once the log holds this many rows.
const MAX_ROWS: usize = 200;

fn main() {
    dioxus::launch(app);
}

/// Load the attachment uploader's config from the bundled JSON.
///
/// Falls back to accepting everything if the file does not parse.
fn attachments_config() -> UploaderConfig {
    serde_json::from_str(include_str!("../assets/attachments.json")).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("attachments.json: {e}").into());
        UploaderConfig::default()
    })
}

/// One-line description of a received file.
fn describe(file: &UploadedFile) -> String {
    format!("{} ({} bytes)", file.name, file.bytes.len())
}

/// Root application component.
///
/// Mounts two independent uploaders side by side, then the smaller
/// widgets below them, all sharing one focus bus.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    let mut focus_bus = provide_focus_bus();

    // --- Upload state ---
    let mut image = use_signal(|| Option::<String>::None);
    let mut attachment = use_signal(|| Option::<String>::None);
    let mut image_drag = use_signal(DragState::default);

    // --- Form state ---
    let mut title = use_signal(|| String::from("Untitled exploration"));
    let mut summary = use_signal(String::new);
    let mut tags = use_signal(|| vec![String::from("draft")]);
    let mut rows = use_signal(|| PAGE_SIZE);

    let image_config = UploaderConfig {
        height: Some("180px".into()),
        ..UploaderConfig::images()
    };

    let on_image = move |file: UploadedFile| image.set(Some(describe(&file)));
    let on_attachment = move |file: UploadedFile| attachment.set(Some(describe(&file)));

    let on_bottom = move |()| {
        let current = rows();
        if current < MAX_ROWS {
            rows.set((current + PAGE_SIZE).min(MAX_ROWS));
        }
    };

    let tags_json = serde_json::to_string(&tags()).unwrap_or_default();

    rsx! {
        style { dangerous_inner_html: STYLESHEET }
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "demo-page",
            header {
                h1 { "dropwell" }
                p { class: "demo-muted",
                    "Drag files onto either zone, or use its picker. Each zone only hears its own input."
                }
            }

            // Uploaders
            div { class: "demo-grid",
                div {
                    h2 { "Image" }
                    ImageUploader {
                        config: image_config,
                        on_file_changed: on_image,
                        on_state_change: move |state| image_drag.set(state),
                    }
                    p { class: "demo-muted", "Drag state: {image_drag()}" }
                    if let Some(ref desc) = image() {
                        p { "Received {desc}" }
                    }
                }
                div {
                    h2 { "Attachment" }
                    ImageUploader {
                        config: attachments_config(),
                        on_file_changed: on_attachment,
                    }
                    if let Some(ref desc) = attachment() {
                        p { "Received {desc}" }
                    }
                }
            }

            // Naming
            section { class: "demo-section",
                h2 { "Details" }
                label { "Title" }
                NameInput {
                    value: title(),
                    on_change: move |name| title.set(name),
                }
                label { "Summary (saved when you leave the field)" }
                BlurInput {
                    value: summary(),
                    on_commit: move |value| summary.set(value),
                    placeholder: "One line summary",
                }
                p { class: "demo-muted", "Saved summary: {summary()}" }
                div { class: "demo-row",
                    label { "Search" }
                    FocusOn { name: "search", placeholder: "Find a tag" }
                    button {
                        class: "dropwell-button",
                        onclick: move |_| {
                            focus_bus.write().broadcast("search");
                        },
                        "Focus search"
                    }
                    CustomPopover {
                        label: "?",
                        text: "Tags help learners find this exploration.\nKeep them short.",
                        placement: "bottom".parse::<Placement>().unwrap_or_default(),
                    }
                }
            }

            // Tags
            section { class: "demo-section",
                h2 { "Tags" }
                ItemListEditor {
                    items: tags(),
                    on_change: move |items| tags.set(items),
                }
                label { "Copy as JSON" }
                SelectOnClick { value: tags_json, class: "demo-mono" }
            }

            // Activity log
            section { class: "demo-section",
                h2 { "Activity" }
                ScrollToBottom {
                    height: "12rem",
                    class: "demo-log",
                    on_bottom: on_bottom,
                    ul {
                        for i in 0..rows() {
                            li { key: "{i}", "Event #{i}" }
                        }
                    }
                }
                p { class: "demo-muted", "Showing {rows()} of {MAX_ROWS}" }
            }
        }
    }
}
