//! Catalog - templates, option categories, choices and compatibility rules.
//!
//! The catalog is plain lookup/insert storage. It carries no business logic;
//! decisions over selections live in [`crate::engine`].
//!
//! ## Example
//!
//! ```ignore
//! use product_configurator::catalog::{CatalogStore, InMemoryStore, ProductTemplate};
//!
//! let store = InMemoryStore::new();
//! store.create_template(ProductTemplate::new("laptop_x", "Laptop Model X", 800.0))?;
//! let template = store.get_template("laptop_x")?;
//! ```

mod error;
mod in_memory;
mod model;
mod store;

pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use model::{
    CompatibilityRule, OptionCategory, OptionChoice, ProductTemplate, RuleType, Selections,
};
pub use store::{CatalogStore, RuleStore};
