//! Input that reports its value on blur rather than on every keystroke.

use dioxus::prelude::*;
use dropwell_core::blur::{CommitOnBlur, commits_on_blur, toggle_value};

/// Props for the [`BlurInput`] component.
#[derive(Props, Clone, PartialEq)]
pub struct BlurInputProps {
    /// Current model value.
    value: String,
    /// Called with the new value when focus leaves a changed input.
    on_commit: EventHandler<String>,
    /// HTML input type. Radio buttons and checkboxes commit on change: a
    /// checkbox reports `"true"`/`"false"` and is checked while `value` is
    /// `"true"`; a radio button reports its `value` when selected. Toggles
    /// skip the text-field styling.
    #[props(default = "text".to_owned())]
    input_type: String,
    #[props(default)]
    placeholder: String,
}

/// An input whose edits stay local until it loses focus.
///
/// While focused it shows the local draft; otherwise it shows `value`,
/// so outside changes to the model are picked up between edits.
#[component]
pub fn BlurInput(props: BlurInputProps) -> Element {
    let mut editing = use_signal(|| Option::<CommitOnBlur>::None);
    let on_commit = props.on_commit;

    if !commits_on_blur(&props.input_type) {
        let input_type = props.input_type.clone();
        let checked = input_type
            .eq_ignore_ascii_case("checkbox")
            .then(|| props.value == "true");
        return rsx! {
            input {
                r#type: "{props.input_type}",
                value: "{props.value}",
                checked,
                placeholder: "{props.placeholder}",
                onchange: move |evt: FormEvent| {
                    on_commit.call(toggle_value(&input_type, &evt.value(), evt.checked()));
                },
            }
        };
    }

    let shown = editing
        .read()
        .as_ref()
        .map_or_else(|| props.value.clone(), |field| field.draft().to_owned());
    let model = props.value.clone();

    rsx! {
        input {
            r#type: "{props.input_type}",
            value: "{shown}",
            placeholder: "{props.placeholder}",
            class: "dropwell-input",
            onfocus: move |_| editing.set(Some(CommitOnBlur::new(model.clone()))),
            oninput: move |evt: FormEvent| {
                if let Some(field) = editing.write().as_mut() {
                    field.edit(evt.value());
                }
            },
            onblur: move |_| {
                let Some(mut field) = editing.write().take() else {
                    return;
                };
                if let Some(value) = field.blur() {
                    on_commit.call(value.to_owned());
                }
            },
        }
    }
}
