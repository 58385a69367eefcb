//! Configurator service - the operations behind every route.
//!
//! A `ConfiguratorService<S>` holds a store and maps typed requests onto
//! store writes, store lookups and engine calls.
//!
//! ## Example
//!
//! ```ignore
//! use product_configurator::catalog::InMemoryStore;
//! use product_configurator::service::{ConfiguratorService, ValidateConfigurationRequest};
//!
//! let service = ConfiguratorService::new(InMemoryStore::new());
//! let req = ValidateConfigurationRequest { template_str_id: None, selections };
//! let result = service.validate_configuration("laptop_x", &req)?;
//! ```

use tracing::{debug, info, warn};

use super::error::ServiceError;
use super::requests::{
    AvailableOptionsRequest, CreateCategoryRequest, CreateChoiceRequest, CreateRuleRequest,
    CreateTemplateRequest, ValidateConfigurationRequest,
};
use crate::catalog::{
    CatalogStore, CompatibilityRule, OptionCategory, OptionChoice, ProductTemplate, RuleStore,
    StoreError,
};
use crate::engine::{self, ValidationResult};

pub const DEFAULT_APP_NAME: &str = "Product Configuration API";

/// Request surface over a catalog/rule store.
///
/// Generic over `S`, the store type. Every method takes `&self`, so one
/// service can be shared across request handlers behind an `Arc`.
pub struct ConfiguratorService<S> {
    store: S,
    name: String,
}

impl<S: CatalogStore + RuleStore> ConfiguratorService<S> {
    /// Create a new service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// Set the display name reported by the root endpoint.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_template(
        &self,
        req: CreateTemplateRequest,
    ) -> Result<ProductTemplate, ServiceError> {
        req.validate()?;
        let template = self.store.create_template(req.into())?;
        info!(
            template = %template.template_str_id,
            base_price = template.base_price,
            "Created product template"
        );
        Ok(template)
    }

    pub fn get_template(&self, template_id: &str) -> Result<ProductTemplate, ServiceError> {
        self.store
            .get_template(template_id)?
            .ok_or_else(|| StoreError::TemplateNotFound(template_id.to_string()).into())
    }

    pub fn add_category(
        &self,
        template_id: &str,
        req: CreateCategoryRequest,
    ) -> Result<OptionCategory, ServiceError> {
        req.validate()?;
        let category = self.store.add_category(template_id, req.into())?;
        info!(
            template = template_id,
            category = %category.category_str_id,
            "Added option category"
        );
        Ok(category)
    }

    pub fn list_categories(&self, template_id: &str) -> Result<Vec<OptionCategory>, ServiceError> {
        self.ensure_template(template_id)?;
        Ok(self.store.list_categories(template_id)?)
    }

    pub fn add_choice(
        &self,
        category_id: &str,
        req: CreateChoiceRequest,
    ) -> Result<OptionChoice, ServiceError> {
        req.validate()?;
        let choice = self.store.add_choice(category_id, req.into())?;
        info!(
            category = category_id,
            choice = %choice.choice_str_id,
            price_delta = choice.price_delta,
            "Added option choice"
        );
        Ok(choice)
    }

    /// Choices of a category. Unknown categories list as empty.
    pub fn list_choices(&self, category_id: &str) -> Result<Vec<OptionChoice>, ServiceError> {
        Ok(self.store.list_choices(category_id)?)
    }

    pub fn add_rule(
        &self,
        template_id: &str,
        req: CreateRuleRequest,
    ) -> Result<CompatibilityRule, ServiceError> {
        req.validate()?;
        let rule = self.store.add_rule(template_id, req.into())?;
        info!(
            template = template_id,
            rule_type = %rule.rule_type,
            primary = %rule.primary_choice_str_id,
            secondary = %rule.secondary_choice_str_id,
            "Added compatibility rule"
        );
        Ok(rule)
    }

    pub fn list_rules(&self, template_id: &str) -> Result<Vec<CompatibilityRule>, ServiceError> {
        self.ensure_template(template_id)?;
        Ok(self.store.list_rules(template_id)?)
    }

    /// Choices of `category_id` still selectable alongside the current selections.
    ///
    /// Unknown templates are `NotFound`; an unknown category yields no choices.
    pub fn available_options(
        &self,
        template_id: &str,
        category_id: &str,
        req: &AvailableOptionsRequest,
    ) -> Result<Vec<OptionChoice>, ServiceError> {
        self.ensure_template(template_id)?;

        let choices = self.store.list_choices(category_id)?;
        let rules = self.store.list_rules(template_id)?;
        let available =
            engine::filter_available_choices(&choices, &rules, &req.current_selections);

        debug!(
            template = template_id,
            category = category_id,
            candidates = choices.len(),
            available = available.len(),
            "Computed available options"
        );
        Ok(available)
    }

    /// Validate a configuration and price it.
    ///
    /// An unknown template is reported inside the result, not as an error.
    pub fn validate_configuration(
        &self,
        template_id: &str,
        req: &ValidateConfigurationRequest,
    ) -> Result<ValidationResult, ServiceError> {
        if let Some(body_id) = req.template_str_id.as_deref() {
            if body_id != template_id {
                warn!(
                    path = template_id,
                    body = body_id,
                    "Template id in body differs from path; using path"
                );
            }
        }

        let template = match self.store.get_template(template_id)? {
            Some(template) => template,
            None => return Ok(ValidationResult::template_not_found(template_id)),
        };
        let rules = self.store.list_rules(template_id)?;
        let result = engine::validate_and_price(&template, &rules, &req.selections, &self.store)?;

        debug!(
            template = template_id,
            selections = req.selections.len(),
            is_valid = result.is_valid,
            errors = result.errors.len(),
            "Validated configuration"
        );
        Ok(result)
    }

    fn ensure_template(&self, template_id: &str) -> Result<(), ServiceError> {
        if !self.store.template_exists(template_id)? {
            return Err(StoreError::TemplateNotFound(template_id.to_string()).into());
        }
        Ok(())
    }
}
