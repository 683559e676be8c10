//! Size selector
//!
//! One toggle button per chart size. Selected sizes are highlighted;
//! clicking a button asks the page to toggle that size.

use catalog_core::Size;
use dioxus::prelude::*;

/// Properties for SizeSelector component
#[derive(Props, Clone, PartialEq)]
pub struct SizeSelectorProps {
    /// Chart sizes in display order with their selection state
    pub options: Vec<(Size, bool)>,

    #[props(default = false)]
    pub disabled: bool,

    pub on_toggle: EventHandler<Size>,
}

/// Row of size toggle buttons
#[component]
pub fn SizeSelector(props: SizeSelectorProps) -> Element {
    rsx! {
        div {
            class: "input-group",
            label { class: "block text-sm font-medium text-slate-300 mb-1.5", "Sizes" }
            div {
                class: "flex flex-wrap gap-2",
                for (size, selected) in props.options.iter().copied() {
                    button {
                        key: "{size.label()}",
                        r#type: "button",
                        class: size_button_class(selected),
                        disabled: props.disabled,
                        onclick: move |_| props.on_toggle.call(size),
                        "{size.label()}"
                    }
                }
            }
        }
    }
}

/// Class for a size button
fn size_button_class(selected: bool) -> &'static str {
    if selected {
        "w-12 py-1.5 rounded-lg text-sm font-medium bg-indigo-600 text-white border border-indigo-500"
    } else {
        "w-12 py-1.5 rounded-lg text-sm font-medium bg-slate-800 text-slate-300 border border-slate-700 hover:bg-slate-700"
    }
}
