//! Editable list of short text items.

use dioxus::prelude::*;
use dropwell_core::list::ItemList;

/// Props for the [`ItemListEditor`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ItemListEditorProps {
    /// Initial items. Read once when the component mounts.
    items: Vec<String>,
    /// Called with the full list after every successful edit.
    on_change: EventHandler<Vec<String>>,
}

/// A list whose items can be added, edited in place, and deleted.
///
/// Empty submissions are refused with an inline warning.
#[component]
pub fn ItemListEditor(props: ItemListEditorProps) -> Element {
    let initial = props.items.clone();
    let mut list = use_signal(move || ItemList::new(initial));
    let mut new_item = use_signal(String::new);
    let mut replacement = use_signal(String::new);
    let mut warning = use_signal(|| Option::<String>::None);
    let on_change = props.on_change;

    let items = list.read().items().to_vec();
    let active = list.read().active();

    let add = move |_: MouseEvent| {
        let item = new_item();
        let added = list.write().add(item);
        match added {
            Ok(()) => {
                new_item.set(String::new());
                warning.set(None);
                on_change.call(list.peek().items().to_vec());
            }
            Err(e) => warning.set(Some(e.to_string())),
        }
    };

    rsx! {
        div { class: "dropwell-list",
            ul { class: "dropwell-list-items",
                for (index, item) in items.into_iter().enumerate() {
                    li { key: "{index}", class: "dropwell-list-row",
                        if active == Some(index) {
                            input {
                                r#type: "text",
                                value: "{replacement()}",
                                class: "dropwell-input",
                                oninput: move |evt: FormEvent| replacement.set(evt.value()),
                            }
                            button {
                                class: "dropwell-button dropwell-button--primary",
                                onclick: move |_| {
                                    let item = replacement();
                                    let replaced = list.write().replace(index, item);
                                    match replaced {
                                        Ok(()) => {
                                            warning.set(None);
                                            on_change.call(list.peek().items().to_vec());
                                        }
                                        Err(e) => warning.set(Some(e.to_string())),
                                    }
                                },
                                "Save"
                            }
                            button {
                                class: "dropwell-button",
                                onclick: move |_| list.write().close_editor(),
                                "Cancel"
                            }
                        } else {
                            span {
                                class: "dropwell-list-text",
                                onclick: move |_| {
                                    let current = list.peek().items().get(index).cloned();
                                    replacement.set(current.unwrap_or_default());
                                    list.write().open_editor(index);
                                },
                                "{item}"
                            }
                            button {
                                class: "dropwell-button",
                                aria_label: "Delete item",
                                onclick: move |_| {
                                    let removed = list.write().delete(index);
                                    if removed.is_some() {
                                        on_change.call(list.peek().items().to_vec());
                                    }
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }

            div { class: "dropwell-list-row",
                input {
                    r#type: "text",
                    value: "{new_item()}",
                    placeholder: "New item",
                    class: "dropwell-input",
                    oninput: move |evt: FormEvent| new_item.set(evt.value()),
                }
                button {
                    class: "dropwell-button dropwell-button--primary",
                    onclick: add,
                    "Add"
                }
            }

            if let Some(ref msg) = warning() {
                p { class: "dropwell-error-text", "{msg}" }
            }
        }
    }
}
