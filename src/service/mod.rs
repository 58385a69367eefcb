//! Request surface - typed requests, service operations and their errors.
//!
//! This module stays framework-agnostic: the HTTP transport in
//! [`crate::http`] only decodes bodies and forwards them here.
//!
//! ## Quick Start
//!
//! ```ignore
//! use product_configurator::catalog::InMemoryStore;
//! use product_configurator::service::{ConfiguratorService, CreateTemplateRequest};
//!
//! let service = ConfiguratorService::new(InMemoryStore::new());
//! service.create_template(CreateTemplateRequest {
//!     template_str_id: "laptop_x".into(),
//!     name: "Laptop Model X".into(),
//!     base_price: 800.0,
//! })?;
//! ```

mod configurator;
mod error;
mod requests;

pub use configurator::{ConfiguratorService, DEFAULT_APP_NAME};
pub use error::ServiceError;
pub use requests::{
    AvailableOptionsRequest, CreateCategoryRequest, CreateChoiceRequest, CreateRuleRequest,
    CreateTemplateRequest, ValidateConfigurationRequest,
};
