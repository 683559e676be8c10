//! Product Edit Page
//!
//! Create or update one product. The page loads its session through
//! [`load_editor`], keeps the form and submission controller in signals and
//! hands save results to the controller, which navigates or alerts through
//! the global app state.

use catalog_core::{Gender, Size};
use catalog_form::{
    EditorLoad, EditorSession, FormField, ProductForm, SubmissionController, SubmitOutcome,
    load_editor,
};
use dioxus::prelude::*;

use crate::components::{
    ImageGallery, NumberInput, Select, SelectOption, SizeSelector, TextArea, TextInput,
};
use crate::file_ops;
use crate::state::{APP_STATE, StatusLevel, use_services};

/// Message shown under an empty required field
const REQUIRED_MESSAGE: &str = "This field is required";

/// Text of the numeric inputs as typed, kept apart from the coerced values
/// so a cleared or half-typed number is not re-rendered as `0`.
#[derive(Debug, Clone, Default, PartialEq)]
struct NumericText {
    price: String,
    in_stock: String,
}

impl NumericText {
    fn from_form(form: &ProductForm) -> Self {
        Self {
            price: form.price().to_string(),
            in_stock: form.in_stock().to_string(),
        }
    }

    /// Keep the typed text and coerce it into the form
    fn update(&mut self, form: &mut ProductForm, field: FormField, raw: String) {
        match field {
            FormField::Price => self.price = raw.clone(),
            FormField::InStock => self.in_stock = raw.clone(),
            _ => return,
        }
        form.set(field, raw);
    }
}

/// Product edit page, addressed by slug (`new` to create)
#[component]
pub fn ProductEditPage(slug: String) -> Element {
    let services = use_services();
    let mut form = use_signal(ProductForm::blank);
    let mut numeric = use_signal(NumericText::default);
    let mut controller = use_signal(SubmissionController::new);
    let mut session = use_signal(|| None::<EditorSession>);
    let mut show_errors = use_signal(|| false);
    let mut initialized = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);
    let mut picking = use_signal(|| false);

    let loader = use_resource({
        let backend = services.backend.clone();
        let prefix = services.storage_prefix.clone();
        let slug = slug.clone();
        move || {
            let backend = backend.clone();
            let prefix = prefix.clone();
            let slug = slug.clone();
            let _generation = reload();
            async move { load_editor(backend.as_ref(), &slug, &prefix).await }
        }
    });

    use_effect(move || match &*loader.read() {
        Some(Ok(EditorLoad::Ready(loaded))) => {
            if !*initialized.peek() {
                form.set(loaded.form.clone());
                numeric.set(NumericText::from_form(&loaded.form));
                initialized.set(true);
            }
            session.set(Some((**loaded).clone()));
        }
        Some(Ok(EditorLoad::Redirect(route))) => {
            APP_STATE.write().replace(route.clone());
        }
        Some(Err(e)) => {
            tracing::error!("Failed to load product editor: {}", e);
            APP_STATE
                .write()
                .ui
                .set_status(format!("Failed to load product: {}", e), StatusLevel::Error);
        }
        None => {}
    });

    let Some(current) = session.read().clone() else {
        return rsx! {
            div {
                class: "p-8 text-slate-400",
                if let Some(Err(e)) = &*loader.read() {
                    p { class: "text-rose-400", "Failed to load product: {e}" }
                } else {
                    p { "Loading..." }
                }
            }
        };
    };

    let state = form.read().clone();
    let is_submitting = controller.read().is_submitting();
    let can_submit = state.is_submittable() && !is_submitting;
    let missing = if show_errors() {
        state.missing_required()
    } else {
        Vec::new()
    };
    let error_for = |field: FormField| {
        missing
            .contains(&field)
            .then(|| REQUIRED_MESSAGE.to_string())
    };

    let gender_options: Vec<SelectOption> = Gender::all()
        .iter()
        .map(|g| SelectOption::new(g.as_str(), g.display_name()))
        .collect();
    let category_options: Vec<SelectOption> = current
        .categories
        .iter()
        .map(|c| SelectOption::new(c.id.to_string(), c.name.clone()))
        .collect();

    let on_submit = {
        let backend = services.backend.clone();
        move |_| {
            let payload = match controller.write().begin(&form.read()) {
                Ok(payload) => payload,
                Err(e) if e.is_validation() => {
                    show_errors.set(true);
                    return;
                }
                Err(e) => {
                    tracing::debug!("Submit not started: {}", e);
                    return;
                }
            };

            let backend = backend.clone();
            spawn(async move {
                let result = backend.save_product(payload).await;
                let outcome = controller.write().complete(result, &mut *APP_STATE.write());
                if let SubmitOutcome::Saved(product) = outcome {
                    let seeded = ProductForm::from_product(&product);
                    numeric.set(NumericText::from_form(&seeded));
                    form.set(seeded);
                    show_errors.set(false);
                    reload += 1;
                }
            });
        }
    };

    let on_attach = move |_| {
        picking.set(true);
        spawn(async move {
            match file_ops::pick_images().await {
                Ok(files) => form.write().attach_images(files),
                Err(catalog_core::CatalogError::Cancelled) => {
                    tracing::debug!("Photo selection cancelled");
                }
                Err(e) => APP_STATE
                    .write()
                    .ui
                    .set_status(format!("Failed to attach photos: {}", e), StatusLevel::Error),
            }
            picking.set(false);
        });
    };

    rsx! {
        div {
            class: "p-8 max-w-6xl",

            h1 { class: "text-2xl font-bold mb-6", "{current.title}" }

            form {
                class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                onsubmit: move |e| e.prevent_default(),

                // Text fields
                div {
                    class: "space-y-4",

                    TextInput {
                        label: FormField::Title.label().to_string(),
                        value: state.title().to_string(),
                        required: true,
                        error: error_for(FormField::Title),
                        on_change: move |v: String| form.write().set(FormField::Title, v),
                    }

                    TextInput {
                        label: FormField::Slug.label().to_string(),
                        value: state.slug().to_string(),
                        required: true,
                        error: error_for(FormField::Slug),
                        help_text: "Lowercase, spaces become dashes".to_string(),
                        on_change: move |v: String| form.write().set(FormField::Slug, v),
                    }

                    TextArea {
                        label: FormField::Description.label().to_string(),
                        value: state.description().to_string(),
                        required: true,
                        error: error_for(FormField::Description),
                        on_change: move |v: String| form.write().set(FormField::Description, v),
                    }

                    NumberInput {
                        label: FormField::Price.label().to_string(),
                        value: numeric.read().price.clone(),
                        decimal: true,
                        unit: "$".to_string(),
                        required: true,
                        error: error_for(FormField::Price),
                        on_change: move |v: String| {
                            numeric.write().update(&mut form.write(), FormField::Price, v)
                        },
                    }

                    TextInput {
                        label: FormField::Tags.label().to_string(),
                        value: state.tags().to_string(),
                        required: true,
                        placeholder: "summer, cotton".to_string(),
                        error: error_for(FormField::Tags),
                        on_change: move |v: String| form.write().set(FormField::Tags, v),
                    }

                    Select {
                        label: FormField::Gender.label().to_string(),
                        value: state.gender().map(|g| g.as_str().to_string()).unwrap_or_default(),
                        options: gender_options,
                        required: true,
                        error: error_for(FormField::Gender),
                        on_change: move |v: String| form.write().set(FormField::Gender, v),
                    }
                }

                // Stock, sizes, photos
                div {
                    class: "space-y-4",

                    NumberInput {
                        label: FormField::InStock.label().to_string(),
                        value: numeric.read().in_stock.clone(),
                        on_change: move |v: String| {
                            numeric.write().update(&mut form.write(), FormField::InStock, v)
                        },
                    }

                    SizeSelector {
                        options: state.size_options(),
                        on_toggle: move |size: Size| form.write().toggle_size(size),
                    }

                    Select {
                        label: FormField::CategoryId.label().to_string(),
                        value: state.category_id().to_string(),
                        options: category_options,
                        required: true,
                        error: error_for(FormField::CategoryId),
                        on_change: move |v: String| form.write().set(FormField::CategoryId, v),
                    }

                    div {
                        class: "input-group",
                        label { class: "block text-sm font-medium text-slate-300 mb-1.5", "{FormField::Images.label()}" }
                        div {
                            class: "flex gap-2 mb-3",
                            button {
                                class: "px-3 py-1.5 bg-slate-700 hover:bg-slate-600 rounded text-sm",
                                r#type: "button",
                                disabled: picking(),
                                onclick: on_attach,
                                if picking() { "Choosing..." } else { "Attach photos" }
                            }
                            if !state.images().is_empty() {
                                button {
                                    class: "px-3 py-1.5 bg-slate-800 hover:bg-slate-700 rounded text-sm",
                                    r#type: "button",
                                    onclick: move |_| form.write().clear_images(),
                                    "Clear"
                                }
                            }
                        }
                        ImageGallery {
                            items: current.gallery.clone(),
                            pending: state.images().to_vec(),
                            on_deleted: move |_| reload += 1,
                        }
                    }

                    button {
                        class: if can_submit {
                            "w-full px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded transition-colors"
                        } else {
                            "w-full px-4 py-2 bg-indigo-600 rounded opacity-50 cursor-not-allowed"
                        },
                        r#type: "button",
                        disabled: !can_submit,
                        onclick: on_submit,
                        if is_submitting { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_keeps_cleared_and_partial_input() {
        let mut form = ProductForm::blank();
        let mut numeric = NumericText::from_form(&form);

        numeric.update(&mut form, FormField::Price, "10.".to_string());
        assert_eq!(numeric.price, "10.");
        assert_eq!(form.price(), 10.0);

        numeric.update(&mut form, FormField::Price, String::new());
        assert_eq!(numeric.price, "");
        assert_eq!(form.price(), 0.0);

        numeric.update(&mut form, FormField::InStock, "7".to_string());
        assert_eq!(numeric.in_stock, "7");
        assert_eq!(form.in_stock(), 7);
    }

    #[test]
    fn test_numeric_text_ignores_other_fields() {
        let mut form = ProductForm::blank();
        let mut numeric = NumericText::from_form(&form);
        let before = form.clone();

        numeric.update(&mut form, FormField::Title, "Shirt".to_string());
        assert_eq!(form, before);
        assert_eq!(numeric, NumericText::from_form(&before));
    }

    #[test]
    fn test_numeric_text_from_seeded_form() {
        let mut form = ProductForm::blank();
        form.set(FormField::Price, 12.5);
        form.set(FormField::InStock, 3u32);

        let numeric = NumericText::from_form(&form);
        assert_eq!(numeric.price, "12.5");
        assert_eq!(numeric.in_stock, "3");
    }
}
