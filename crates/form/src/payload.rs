//! Projection of the form into the save payload

use crate::state::{FormField, ProductForm};
use catalog_core::Size;
use catalog_model::ProductPayload;

/// Build the multi-part payload for the save mutation
///
/// Entries are appended in a fixed order: `id` (only when editing), the
/// text fields, `price` and `inStock` as decimal strings, the selected
/// sizes joined with `,`, the raw tag string, `categoryId`, `gender`, and
/// one `images` entry per attached file.
pub fn build_payload(form: &ProductForm) -> ProductPayload {
    let mut payload = ProductPayload::new();

    if let Some(id) = form.id().filter(|id| !id.trim().is_empty()) {
        payload.append_text(FormField::Id.key(), id);
    }

    payload.append_text(FormField::Title.key(), form.title());
    payload.append_text(FormField::Slug.key(), form.slug());
    payload.append_text(FormField::Description.key(), form.description());
    payload.append_text(FormField::Price.key(), form.price().to_string());
    payload.append_text(FormField::InStock.key(), form.in_stock().to_string());
    payload.append_text(
        FormField::Sizes.key(),
        form.sizes()
            .iter()
            .map(Size::label)
            .collect::<Vec<_>>()
            .join(","),
    );
    payload.append_text(FormField::Tags.key(), form.tags());
    payload.append_text(FormField::CategoryId.key(), form.category_id());
    payload.append_text(
        FormField::Gender.key(),
        form.gender().map(|g| g.as_str()).unwrap_or_default(),
    );

    for file in form.images() {
        payload.append_file(FormField::Images.key(), file.clone());
    }

    tracing::debug!(
        "Built payload with {} entries ({} files)",
        payload.len(),
        form.images().len()
    );
    payload
}
