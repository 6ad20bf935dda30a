//! Read-only field whose text is selected on click, for copy-paste.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom;

/// Props for the [`SelectOnClick`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SelectOnClickProps {
    /// Text shown in the field.
    value: String,
    #[props(default)]
    class: String,
}

/// A read-only input that highlights its whole value when clicked.
#[component]
pub fn SelectOnClick(props: SelectOnClickProps) -> Element {
    let mut mounted = use_signal(|| Option::<Rc<MountedData>>::None);

    rsx! {
        input {
            r#type: "text",
            readonly: true,
            value: "{props.value}",
            class: "dropwell-input {props.class}",
            onmounted: move |evt: MountedEvent| mounted.set(Some(evt.data())),
            onclick: move |_| {
                if let Some(element) = mounted.peek().as_ref()
                    && let Err(e) = dom::select_all(element)
                {
                    dom::warn(&format!("select-on-click: {e}"));
                }
            },
        }
    }
}
