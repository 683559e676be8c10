//! Page Components for Catalog Admin
//!
//! - **ProductListPage**: catalog overview, target of stale-slug redirects
//! - **ProductEditPage**: create or update one product
//!

pub mod product_edit;
pub mod product_list;

pub use product_edit::ProductEditPage;
pub use product_list::ProductListPage;
