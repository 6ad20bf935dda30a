//! Label with a popover that opens on hover or click.

use dioxus::prelude::*;
use dropwell_core::popover::{Placement, Popover};

/// Props for the [`CustomPopover`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CustomPopoverProps {
    /// Clickable label text.
    label: String,
    /// Body text, shown pre-wrapped.
    text: String,
    #[props(default)]
    placement: Placement,
}

/// A label that reveals `text` while hovered, or after a click until
/// focus leaves it.
#[component]
pub fn CustomPopover(props: CustomPopoverProps) -> Element {
    let mut popover = use_signal(Popover::default);
    let shown = popover.read().is_shown();
    let placement = props.placement;

    rsx! {
        div {
            class: "dropwell-popover",
            onmouseenter: move |_| popover.write().hover_start(),
            onmouseleave: move |_| popover.write().hover_end(),
            onfocusout: move |_| popover.write().dismiss(),

            div {
                class: "dropwell-popover-label",
                tabindex: "0",
                "aria-expanded": "{shown}",
                onclick: move |_| {
                    popover.write().click();
                },
                "{props.label}"
            }

            if shown {
                div {
                    class: "dropwell-popover-body dropwell-popover-{placement}",
                    role: "tooltip",
                    pre { class: "dropwell-pre-wrapped-text",
                        "{props.text}"
                    }
                }
            }
        }
    }
}
