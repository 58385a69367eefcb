pub mod catalog;
pub mod engine;
pub mod sample;
pub mod service;

#[cfg(feature = "http")]
pub mod config;
#[cfg(feature = "http")]
pub mod http;

pub use catalog::{
    CatalogStore, CompatibilityRule, InMemoryStore, OptionCategory, OptionChoice,
    ProductTemplate, RuleStore, RuleType, Selections, StoreError,
};
pub use engine::{ChoiceResolver, ValidationResult, Violation};
pub use service::{ConfiguratorService, ServiceError};
