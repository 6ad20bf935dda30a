//! Entity-name input that refuses reserved characters.

use std::rc::Rc;

use dioxus::prelude::*;
use dropwell_core::validation::{INVALID_CHAR_RESET, INVALID_NAME_CHARS, Validation, ValidatedField};
use gloo_timers::future::TimeoutFuture;

use crate::dom;

/// Props for the [`NameInput`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NameInputProps {
    /// Initial name. Read once when the component mounts.
    value: String,
    /// Called with each accepted name.
    on_change: EventHandler<String>,
    #[props(default)]
    allow_empty: bool,
}

/// A text input for names that snaps back on invalid characters.
///
/// A rejected keystroke restores the last valid name and shows a warning
/// for two seconds.
#[component]
pub fn NameInput(props: NameInputProps) -> Element {
    let initial = props.value.clone();
    let allow_empty = props.allow_empty;
    let mut field = use_signal(move || ValidatedField::new(initial, allow_empty));
    let mut mounted = use_signal(|| Option::<Rc<MountedData>>::None);
    let on_change = props.on_change;

    let invalid = field.read().is_invalid();
    let model = field.read().model().to_owned();
    let reserved: String = INVALID_NAME_CHARS
        .iter()
        .filter(|c| !c.is_control() && **c != '\u{fffd}')
        .collect();
    let class = if invalid {
        "dropwell-input dropwell-input--invalid"
    } else {
        "dropwell-input"
    };

    rsx! {
        div { class: "dropwell-field",
            input {
                r#type: "text",
                value: "{model}",
                class: "{class}",
                "aria-invalid": "{invalid}",
                onmounted: move |evt: MountedEvent| mounted.set(Some(evt.data())),
                oninput: move |evt: FormEvent| {
                    let outcome = field.write().propose(&evt.value());
                    match outcome {
                        Validation::Accepted(name) => on_change.call(name),
                        Validation::Reverted { model, generation } => {
                            if let Some(element) = mounted.peek().as_ref()
                                && let Err(e) = dom::set_input_value(element, &model)
                            {
                                dom::warn(&format!("name input: {e}"));
                            }
                            spawn(async move {
                                TimeoutFuture::new(reset_delay_ms()).await;
                                field.write().reset(generation);
                            });
                        }
                    }
                },
            }
            if invalid {
                p { class: "dropwell-error-text",
                    "Names cannot be empty or contain any of: {reserved}"
                }
            }
        }
    }
}

/// [`INVALID_CHAR_RESET`] in whole milliseconds, as the timer expects.
fn reset_delay_ms() -> u32 {
    u32::try_from(INVALID_CHAR_RESET.as_millis()).unwrap_or(u32::MAX)
}
