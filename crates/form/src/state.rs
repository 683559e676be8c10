//! Product form state
//!
//! [`ProductForm`] owns the editable copy of one product for the length of
//! an editing session. It is seeded from a loaded product (or blank when
//! creating), mutated by every input event, and read by the payload builder
//! on submit.
//!
//! Tags are held as the single comma-separated string the operator edits.
//! They are joined once here on initialization and split again by the
//! backend; nothing in between re-normalizes them.

use catalog_core::{CatalogError, CatalogResult, Gender, Size, Validatable};
use catalog_model::{AttachedFile, Product, join_tags};
use std::collections::BTreeSet;

// ============================================================================
// Fields
// ============================================================================

/// Every field tracked by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Id,
    Title,
    Slug,
    Description,
    Price,
    InStock,
    Tags,
    Gender,
    CategoryId,
    Sizes,
    Images,
}

/// Fields that must be populated before the form is submittable
pub const REQUIRED_FIELDS: &[FormField] = &[
    FormField::Title,
    FormField::Slug,
    FormField::Description,
    FormField::Price,
    FormField::Tags,
    FormField::Gender,
    FormField::CategoryId,
];

impl FormField {
    /// Payload key for this field
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Title => "title",
            FormField::Slug => "slug",
            FormField::Description => "description",
            FormField::Price => "price",
            FormField::InStock => "inStock",
            FormField::Tags => "tags",
            FormField::Gender => "gender",
            FormField::CategoryId => "categoryId",
            FormField::Sizes => "sizes",
            FormField::Images => "images",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Id => "Id",
            FormField::Title => "Title",
            FormField::Slug => "Slug",
            FormField::Description => "Description",
            FormField::Price => "Price",
            FormField::InStock => "Stock",
            FormField::Tags => "Tags",
            FormField::Gender => "Gender",
            FormField::CategoryId => "Category",
            FormField::Sizes => "Sizes",
            FormField::Images => "Photos",
        }
    }

    /// Check if the field must be populated to submit
    pub fn is_required(&self) -> bool {
        REQUIRED_FIELDS.contains(self)
    }

    /// Get all fields
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Id,
            FormField::Title,
            FormField::Slug,
            FormField::Description,
            FormField::Price,
            FormField::InStock,
            FormField::Tags,
            FormField::Gender,
            FormField::CategoryId,
            FormField::Sizes,
            FormField::Images,
        ]
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ============================================================================
// Field values
// ============================================================================

/// A value read from or written to a form field
///
/// Setting a field with a value of a different kind coerces it, so
/// writes never fail: text parses into numbers (blank or invalid text
/// becomes `0`), unknown gender text clears the selection, and unknown
/// size labels are dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Count(u32),
    Gender(Option<Gender>),
    Sizes(BTreeSet<Size>),
    Files(Vec<AttachedFile>),
}

impl FieldValue {
    /// Render the value as the text an input would show
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Count(n) => n.to_string(),
            FieldValue::Gender(g) => g.map(|g| g.as_str().to_string()).unwrap_or_default(),
            FieldValue::Sizes(sizes) => sizes
                .iter()
                .map(Size::label)
                .collect::<Vec<_>>()
                .join(","),
            FieldValue::Files(files) => files
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            other => other.to_text(),
        }
    }

    fn into_number(self) -> f64 {
        match self {
            FieldValue::Number(n) => n,
            FieldValue::Count(n) => f64::from(n),
            other => other.to_text().trim().parse().unwrap_or(0.0),
        }
    }

    fn into_count(self) -> u32 {
        match self {
            FieldValue::Count(n) => n,
            FieldValue::Number(n) if n.is_finite() && n >= 0.0 => n.trunc() as u32,
            FieldValue::Number(_) => 0,
            other => other.to_text().trim().parse().unwrap_or(0),
        }
    }

    fn into_gender(self) -> Option<Gender> {
        match self {
            FieldValue::Gender(g) => g,
            other => other.to_text().parse().ok(),
        }
    }

    fn into_sizes(self) -> BTreeSet<Size> {
        match self {
            FieldValue::Sizes(sizes) => sizes,
            other => other
                .to_text()
                .split(',')
                .filter_map(|s| s.parse().ok())
                .collect(),
        }
    }

    fn into_files(self) -> Vec<AttachedFile> {
        match self {
            FieldValue::Files(files) => files,
            _ => Vec::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Count(value)
    }
}

impl From<Gender> for FieldValue {
    fn from(value: Gender) -> Self {
        FieldValue::Gender(Some(value))
    }
}

impl From<Option<Gender>> for FieldValue {
    fn from(value: Option<Gender>) -> Self {
        FieldValue::Gender(value)
    }
}

impl From<BTreeSet<Size>> for FieldValue {
    fn from(value: BTreeSet<Size>) -> Self {
        FieldValue::Sizes(value)
    }
}

impl From<Vec<Size>> for FieldValue {
    fn from(value: Vec<Size>) -> Self {
        FieldValue::Sizes(value.into_iter().collect())
    }
}

impl From<Vec<AttachedFile>> for FieldValue {
    fn from(value: Vec<AttachedFile>) -> Self {
        FieldValue::Files(value)
    }
}

// ============================================================================
// Product Form
// ============================================================================

/// Editable state of one product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub(crate) id: Option<String>,
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) description: String,
    pub(crate) price: f64,
    pub(crate) in_stock: u32,
    pub(crate) tags: String,
    pub(crate) gender: Option<Gender>,
    pub(crate) category_id: String,
    pub(crate) sizes: BTreeSet<Size>,
    /// Files picked in this session, in selection order
    pub(crate) images: Vec<AttachedFile>,
    /// Bumped on every mutation
    revision: u64,
}

impl ProductForm {
    /// Create a blank form for a new product
    pub fn blank() -> Self {
        Self::default()
    }

    /// Create a form seeded from a stored product
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_string()),
            title: product.title.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            price: product.price,
            in_stock: product.in_stock,
            tags: join_tags(&product.tags),
            gender: Some(product.gender),
            category_id: product.category_id.to_string(),
            sizes: product.sizes.clone(),
            images: Vec::new(),
            revision: 0,
        }
    }

    /// Create the form for an editing session
    pub fn initialize(product: Option<&Product>) -> Self {
        match product {
            Some(product) => Self::from_product(product),
            None => Self::blank(),
        }
    }

    // ========================================================================
    // Generic access
    // ========================================================================

    /// Read a field
    pub fn get(&self, field: FormField) -> FieldValue {
        match field {
            FormField::Id => FieldValue::Text(self.id.clone().unwrap_or_default()),
            FormField::Title => FieldValue::Text(self.title.clone()),
            FormField::Slug => FieldValue::Text(self.slug.clone()),
            FormField::Description => FieldValue::Text(self.description.clone()),
            FormField::Price => FieldValue::Number(self.price),
            FormField::InStock => FieldValue::Count(self.in_stock),
            FormField::Tags => FieldValue::Text(self.tags.clone()),
            FormField::Gender => FieldValue::Gender(self.gender),
            FormField::CategoryId => FieldValue::Text(self.category_id.clone()),
            FormField::Sizes => FieldValue::Sizes(self.sizes.clone()),
            FormField::Images => FieldValue::Files(self.images.clone()),
        }
    }

    /// Write a field
    pub fn set(&mut self, field: FormField, value: impl Into<FieldValue>) {
        let value = value.into();
        match field {
            FormField::Id => {
                let id = value.into_text();
                self.id = if id.trim().is_empty() { None } else { Some(id) };
            }
            FormField::Title => self.title = value.into_text(),
            FormField::Slug => self.slug = value.into_text(),
            FormField::Description => self.description = value.into_text(),
            FormField::Price => self.price = value.into_number(),
            FormField::InStock => self.in_stock = value.into_count(),
            FormField::Tags => self.tags = value.into_text(),
            FormField::Gender => self.gender = value.into_gender(),
            FormField::CategoryId => self.category_id = value.into_text(),
            FormField::Sizes => self.sizes = value.into_sizes(),
            FormField::Images => self.images = value.into_files(),
        }
        self.touch();
        tracing::trace!("Form field '{}' changed (revision {})", field, self.revision);
    }

    // ========================================================================
    // Sizes
    // ========================================================================

    /// Add the size if absent, remove it if present
    pub fn toggle_size(&mut self, size: Size) {
        let mut sizes = self.sizes.clone();
        if !sizes.remove(&size) {
            sizes.insert(size);
        }
        self.sizes = sizes;
        self.touch();
    }

    /// Check if a size is currently selected
    pub fn is_size_selected(&self, size: Size) -> bool {
        self.sizes.contains(&size)
    }

    /// Every chart size paired with its selection state, in chart order
    pub fn size_options(&self) -> Vec<(Size, bool)> {
        Size::all()
            .iter()
            .map(|&size| (size, self.is_size_selected(size)))
            .collect()
    }

    // ========================================================================
    // Images
    // ========================================================================

    /// Append picked files after any already attached
    pub fn attach_images(&mut self, files: impl IntoIterator<Item = AttachedFile>) {
        self.images.extend(files);
        self.touch();
    }

    /// Drop all picked files
    pub fn clear_images(&mut self) {
        self.images = Vec::new();
        self.touch();
    }

    // ========================================================================
    // Readiness
    // ========================================================================

    /// Check if a single field holds a value
    pub fn is_populated(&self, field: FormField) -> bool {
        match field {
            FormField::Id => self.id.is_some(),
            FormField::Title => !self.title.trim().is_empty(),
            FormField::Slug => !self.slug.trim().is_empty(),
            FormField::Description => !self.description.trim().is_empty(),
            FormField::Price => self.price.is_finite() && self.price > 0.0,
            FormField::InStock => self.in_stock > 0,
            FormField::Tags => !self.tags.trim().is_empty(),
            FormField::Gender => self.gender.is_some(),
            FormField::CategoryId => !self.category_id.trim().is_empty(),
            FormField::Sizes => !self.sizes.is_empty(),
            FormField::Images => !self.images.is_empty(),
        }
    }

    /// Required fields that are still empty
    pub fn missing_required(&self) -> Vec<FormField> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|f| !self.is_populated(*f))
            .collect()
    }

    /// Check if every required field is populated
    pub fn is_submittable(&self) -> bool {
        self.missing_required().is_empty()
    }

    // ========================================================================
    // Typed accessors
    // ========================================================================

    /// Identifier of the product being edited, if any
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Check if this form edits a stored product
    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn in_stock(&self) -> u32 {
        self.in_stock
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn sizes(&self) -> &BTreeSet<Size> {
        &self.sizes
    }

    pub fn images(&self) -> &[AttachedFile] {
        &self.images
    }

    /// Mutation counter, for observers that cannot subscribe to changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Validatable for ProductForm {
    fn validate(&self) -> CatalogResult<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::incomplete(missing.iter().map(FormField::key)))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::{Category, PersistedImage, split_tags};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn stored_shirt() -> Product {
        Product::new("Shirt", Category::new("Shirts").id)
            .with_id(Uuid::new_v4())
            .with_slug("shirt")
            .with_description("A shirt")
            .with_price(10.0, 5)
            .with_gender(Gender::Men)
            .with_tag("summer")
            .with_tag("cotton")
            .with_size(Size::Small)
            .with_size(Size::Medium)
    }

    fn filled_form() -> ProductForm {
        let mut form = ProductForm::blank();
        form.set(FormField::Title, "Shirt");
        form.set(FormField::Slug, "shirt");
        form.set(FormField::Description, "A shirt");
        form.set(FormField::Price, 10.0);
        form.set(FormField::Tags, "a, b");
        form.set(FormField::Gender, Gender::Men);
        form.set(FormField::CategoryId, "cat1");
        form
    }

    #[test]
    fn test_blank_form_defaults() {
        let form = ProductForm::initialize(None);
        assert_eq!(form.id(), None);
        assert_eq!(form.title(), "");
        assert_eq!(form.price(), 0.0);
        assert_eq!(form.in_stock(), 0);
        assert!(form.sizes().is_empty());
        assert!(form.images().is_empty());
        assert_eq!(form.gender(), None);
        assert!(!form.is_editing());
    }

    #[test]
    fn test_seeded_form_copies_product() {
        let product = stored_shirt();
        let form = ProductForm::initialize(Some(&product));

        assert_eq!(form.id(), product.id.map(|id| id.to_string()).as_deref());
        assert_eq!(form.title(), "Shirt");
        assert_eq!(form.tags(), "summer, cotton");
        assert_eq!(form.gender(), Some(Gender::Men));
        assert_eq!(form.category_id(), product.category_id.to_string());
        assert!(form.images().is_empty());
        assert!(form.is_editing());
    }

    #[test]
    fn test_seeded_images_never_rehydrate() {
        let product = stored_shirt().with_image(PersistedImage::new("a.png"));
        let form = ProductForm::from_product(&product);
        assert_eq!(form.get(FormField::Images), FieldValue::Files(Vec::new()));
    }

    #[test]
    fn test_initialized_sizes_are_within_chart() {
        let form = ProductForm::from_product(&stored_shirt());
        let chart: BTreeSet<Size> = Size::all().iter().copied().collect();
        assert!(form.sizes().is_subset(&chart));
        assert_eq!(form.sizes().len(), 2);
    }

    #[test]
    fn test_set_is_visible_to_next_get() {
        let mut form = ProductForm::blank();
        form.set(FormField::Title, "Shirt");
        assert_eq!(form.get(FormField::Title), FieldValue::Text("Shirt".into()));

        form.set(FormField::Price, "12.5");
        assert_eq!(form.get(FormField::Price), FieldValue::Number(12.5));

        form.set(FormField::InStock, "7");
        assert_eq!(form.get(FormField::InStock), FieldValue::Count(7));
    }

    #[test]
    fn test_set_coerces_instead_of_failing() {
        let mut form = ProductForm::blank();
        form.set(FormField::Price, "not a number");
        assert_eq!(form.price(), 0.0);

        form.set(FormField::InStock, -4.0);
        assert_eq!(form.in_stock(), 0);

        form.set(FormField::Gender, "robot");
        assert_eq!(form.gender(), None);

        form.set(FormField::Gender, "women");
        assert_eq!(form.gender(), Some(Gender::Women));

        form.set(FormField::Sizes, "M,XXXL,S");
        assert_eq!(
            form.sizes().iter().copied().collect::<Vec<_>>(),
            vec![Size::Small, Size::Medium]
        );
    }

    #[test]
    fn test_toggle_size_adds_and_removes() {
        let mut form = ProductForm::from_product(&stored_shirt());
        form.toggle_size(Size::Medium);
        form.toggle_size(Size::Large);

        let expected: BTreeSet<Size> = [Size::Small, Size::Large].into_iter().collect();
        assert_eq!(form.sizes(), &expected);
        assert!(form.is_size_selected(Size::Large));
        assert!(!form.is_size_selected(Size::Medium));
    }

    #[test]
    fn test_size_options_follow_selection() {
        let mut form = ProductForm::blank();
        assert!(form.size_options().iter().all(|(_, selected)| !selected));

        form.toggle_size(Size::Medium);
        form.toggle_size(Size::Large);
        form.toggle_size(Size::Medium);

        let options = form.size_options();
        assert_eq!(options.len(), Size::all().len());
        let selected: Vec<Size> = options
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(size, _)| *size)
            .collect();
        assert_eq!(selected, vec![Size::Large]);
        assert_eq!(options[0].0, Size::all()[0]);
    }

    #[test]
    fn test_toggle_size_twice_is_identity() {
        let form = ProductForm::from_product(&stored_shirt());
        for size in Size::all() {
            let mut toggled = form.clone();
            toggled.toggle_size(*size);
            toggled.toggle_size(*size);
            assert_eq!(toggled.sizes(), form.sizes());
        }
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut form = ProductForm::blank();
        let start = form.revision();
        form.toggle_size(Size::Medium);
        form.set(FormField::Title, "x");
        form.attach_images(vec![AttachedFile::from_name("a.png", vec![1])]);
        form.clear_images();
        assert_eq!(form.revision(), start + 4);
    }

    #[test]
    fn test_attach_images_keeps_selection_order() {
        let mut form = ProductForm::blank();
        form.attach_images(vec![AttachedFile::from_name("1.png", vec![])]);
        form.attach_images(vec![
            AttachedFile::from_name("2.jpg", vec![]),
            AttachedFile::from_name("3.png", vec![]),
        ]);
        let names: Vec<&str> = form.images().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["1.png", "2.jpg", "3.png"]);
    }

    #[test]
    fn test_submittable_when_required_fields_filled() {
        let form = filled_form();
        assert!(form.is_submittable());
        assert!(form.is_valid());
        assert!(form.sizes().is_empty());
        assert!(form.images().is_empty());
    }

    #[test]
    fn test_not_submittable_when_any_required_field_empty() {
        for field in REQUIRED_FIELDS {
            let mut form = filled_form();
            match field {
                FormField::Price => form.set(*field, 0.0),
                FormField::Gender => form.set(*field, None::<Gender>),
                _ => form.set(*field, "  "),
            }
            assert!(!form.is_submittable(), "{} should be required", field);
            assert_eq!(form.missing_required(), vec![*field]);
        }
    }

    #[test]
    fn test_optional_fields_do_not_gate_submission() {
        let mut form = filled_form();
        form.set(FormField::InStock, 0u32);
        form.toggle_size(Size::Large);
        form.attach_images(vec![AttachedFile::from_name("a.png", vec![1])]);
        assert!(form.is_submittable());
    }

    #[test]
    fn test_validate_reports_missing_keys() {
        let err = ProductForm::blank().validate().unwrap_err();
        match err {
            CatalogError::ValidationIncomplete { fields } => assert_eq!(
                fields,
                vec!["title", "slug", "description", "price", "tags", "gender", "categoryId"]
            ),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_tags_round_trip_through_form() {
        let product = stored_shirt();
        let form = ProductForm::from_product(&product);
        assert_eq!(split_tags(form.tags()), product.tags);
    }
}
