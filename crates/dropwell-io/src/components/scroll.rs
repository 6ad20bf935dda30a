//! Scrollable container that reports reaching its end.

use dioxus::prelude::*;
use dropwell_core::scroll::ScrollMetrics;

/// Props for the [`ScrollToBottom`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ScrollToBottomProps {
    /// Fired on every scroll event that leaves the viewport at the end of
    /// the content.
    on_bottom: EventHandler<()>,
    /// Fixed height of the container; content beyond it scrolls.
    #[props(default = "12rem".to_owned())]
    height: String,
    /// Extra classes for the container.
    #[props(default)]
    class: String,
    children: Element,
}

/// A vertically scrolling container for incrementally loaded lists.
///
/// The container fixes its own height and overflow inline, so it scrolls
/// whether or not the stylesheet is mounted.
#[component]
pub fn ScrollToBottom(props: ScrollToBottomProps) -> Element {
    let on_bottom = props.on_bottom;
    let style = scroll_style(&props.height);

    rsx! {
        div {
            class: "dropwell-scroll {props.class}",
            style: "{style}",
            onscroll: move |evt: ScrollEvent| {
                let metrics = ScrollMetrics {
                    scroll_top: f64::from(evt.scroll_top()),
                    offset_height: f64::from(evt.client_height()),
                    scroll_height: f64::from(evt.scroll_height()),
                };
                if metrics.is_at_bottom() {
                    on_bottom.call(());
                }
            },
            {props.children}
        }
    }
}

/// Inline `style` that makes the container scroll at `height`.
fn scroll_style(height: &str) -> String {
    format!("overflow-y: auto; height: {height};")
}
