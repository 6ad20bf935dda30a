//! Inputs that take focus when their name is broadcast.
//!
//! An ancestor calls [`provide_focus_bus`] once; any descendant can then
//! grab the bus with [`use_focus_bus`] and `broadcast` a name. Every
//! [`FocusOn`] registered under that name focuses itself.

use std::rc::Rc;

use dioxus::prelude::*;
use dropwell_core::focus::FocusBus;

use crate::dom;

/// Install a fresh [`FocusBus`] in context for the current subtree.
pub fn provide_focus_bus() -> Signal<FocusBus> {
    use_context_provider(|| Signal::new(FocusBus::default()))
}

/// The nearest [`FocusBus`] installed by [`provide_focus_bus`].
///
/// Panics (inside Dioxus) if no ancestor provided one.
#[must_use]
pub fn use_focus_bus() -> Signal<FocusBus> {
    use_context()
}

/// Props for the [`FocusOn`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FocusOnProps {
    /// Name this input answers to on the focus bus.
    name: String,
    #[props(default)]
    value: String,
    #[props(default)]
    placeholder: String,
    oninput: Option<EventHandler<String>>,
}

/// A text input that focuses itself when its name is broadcast.
#[component]
pub fn FocusOn(props: FocusOnProps) -> Element {
    let bus = use_focus_bus();
    let mut mounted = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut handled = use_signal(|| Option::<u64>::None);

    let name = props.name.clone();
    use_effect(move || {
        let Some(seq) = bus
            .read()
            .pending_for(&name, *handled.peek())
            .map(|req| req.seq)
        else {
            return;
        };
        handled.set(Some(seq));

        let Some(element) = mounted.peek().clone() else {
            return;
        };
        spawn(async move {
            if let Err(e) = element.set_focus(true).await {
                dom::warn(&format!("focus-on: could not focus: {e:?}"));
            }
        });
    });

    let oninput = props.oninput;

    rsx! {
        input {
            r#type: "text",
            name: "{props.name}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            class: "dropwell-input",
            onmounted: move |evt: MountedEvent| mounted.set(Some(evt.data())),
            oninput: move |evt: FormEvent| {
                if let Some(handler) = oninput {
                    handler.call(evt.value());
                }
            },
        }
    }
}
