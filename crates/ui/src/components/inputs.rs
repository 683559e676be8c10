//! # Input Components
//!
//! Form inputs for the product editor:
//! - **TextInput**: single-line text
//! - **TextArea**: multi-line text
//! - **NumberInput**: numeric text, coerced by the form on write
//! - **Select**: dropdown with an optional empty entry
//!
//! Every input reports the raw string the operator typed. Parsing and
//! coercion belong to the form state, so inputs never reject a value.

use dioxus::prelude::*;

// ============================================================================
// Field chrome
// ============================================================================

/// Label with an optional required marker
#[component]
fn FieldLabel(label: String, required: bool) -> Element {
    rsx! {
        label {
            class: "block text-sm font-medium text-slate-300 mb-1.5",
            "{label}"
            if required {
                span { class: "text-rose-400 ml-0.5", "*" }
            }
        }
    }
}

/// Error line, or help line when there is no error
#[component]
fn FieldHint(error: Option<String>, help_text: Option<String>) -> Element {
    rsx! {
        if let Some(error) = error {
            p { class: "mt-1 text-xs text-rose-400", "{error}" }
        } else if let Some(help) = help_text {
            p { class: "mt-1 text-xs text-slate-500", "{help}" }
        }
    }
}

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub value: String,

    pub label: String,

    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",
            FieldLabel { label: props.label.clone(), required: props.required }
            input {
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }
            FieldHint { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,

    pub label: String,

    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = format!(
        "{} resize-y",
        build_input_class(props.error.is_some(), props.disabled)
    );
    let char_count = props.value.chars().count();

    rsx! {
        div {
            class: "input-group",
            FieldLabel { label: props.label.clone(), required: props.required }
            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
            }
            div {
                class: "flex justify-between items-center",
                FieldHint { error: props.error.clone(), help_text: None }
                span { class: "mt-1 text-xs text-slate-500", "{char_count}" }
            }
        }
    }
}

// ============================================================================
// Number Input Component
// ============================================================================

/// Properties for NumberInput component
#[derive(Props, Clone, PartialEq)]
pub struct NumberInputProps {
    /// Text exactly as the operator typed it
    pub value: String,

    pub label: String,

    #[props(default)]
    pub error: Option<String>,

    /// Offer a decimal keypad instead of a digits-only one
    #[props(default = false)]
    pub decimal: bool,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// Unit prefix (e.g. "$")
    #[props(default)]
    pub unit: Option<String>,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Numeric input component
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let mut input_class = build_input_class(props.error.is_some(), props.disabled);
    if props.unit.is_some() {
        input_class.push_str(" pl-8");
    }
    let input_mode = if props.decimal { "decimal" } else { "numeric" };

    rsx! {
        div {
            class: "input-group",
            FieldLabel { label: props.label.clone(), required: props.required }
            div {
                class: "relative flex items-center",
                if let Some(unit) = &props.unit {
                    span {
                        class: "absolute left-3 text-slate-400 text-sm pointer-events-none",
                        "{unit}"
                    }
                }
                input {
                    class: "{input_class}",
                    // A number input reports partial text like "10." as empty.
                    r#type: "text",
                    inputmode: input_mode,
                    value: "{props.value}",
                    disabled: props.disabled,
                    oninput: move |e| props.on_change.call(e.value()),
                }
            }
            FieldHint { error: props.error.clone(), help_text: None }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value, empty for none
    pub value: String,

    pub options: Vec<SelectOption>,

    pub label: String,

    /// Label of the empty entry
    #[props(default = "Select".to_string())]
    pub placeholder: String,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = format!(
        "{} appearance-none cursor-pointer",
        build_input_class(props.error.is_some(), props.disabled)
    );

    rsx! {
        div {
            class: "input-group",
            FieldLabel { label: props.label.clone(), required: props.required }
            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                option {
                    value: "",
                    selected: props.value.is_empty(),
                    "[ {props.placeholder} ]"
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
            FieldHint { error: props.error.clone(), help_text: None }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec![
        "w-full",
        "px-3",
        "py-2",
        "bg-slate-800",
        "border",
        "rounded-lg",
        "text-sm",
        "text-slate-100",
        "placeholder-slate-500",
        "focus:outline-none",
        "focus:ring-2",
    ];

    if has_error {
        classes.extend(["border-rose-500", "focus:ring-rose-500/30"]);
    } else {
        classes.extend(["border-slate-700", "focus:ring-indigo-500/30"]);
    }

    if disabled {
        classes.extend(["opacity-50", "cursor-not-allowed"]);
    }

    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_states() {
        let normal = build_input_class(false, false);
        assert!(normal.contains("border-slate-700"));
        assert!(!normal.contains("opacity-50"));

        let error = build_input_class(true, false);
        assert!(error.contains("border-rose-500"));

        let disabled = build_input_class(false, true);
        assert!(disabled.contains("cursor-not-allowed"));
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("men", "Men");
        assert_eq!(opt.value, "men");
        assert_eq!(opt.label, "Men");
    }
}
