//! Typed request bodies, one per operation.
//!
//! Each body is checked at the boundary (`validate`) before anything
//! reaches the store or the engine.

use serde::{Deserialize, Serialize};

use super::error::ServiceError;
use crate::catalog::{
    CompatibilityRule, OptionCategory, OptionChoice, ProductTemplate, RuleType, Selections,
};

fn require_id(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Invalid(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<(), ServiceError> {
    if !value.is_finite() {
        return Err(ServiceError::Invalid(format!("{} must be a finite number", field)));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplateRequest {
    pub template_str_id: String,
    pub name: String,
    pub base_price: f64,
}

impl CreateTemplateRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_id("template_str_id", &self.template_str_id)?;
        require_finite("base_price", self.base_price)
    }
}

impl From<CreateTemplateRequest> for ProductTemplate {
    fn from(req: CreateTemplateRequest) -> Self {
        ProductTemplate::new(req.template_str_id, req.name, req.base_price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub category_str_id: String,
    pub name: String,
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_id("category_str_id", &self.category_str_id)
    }
}

impl From<CreateCategoryRequest> for OptionCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        OptionCategory::new(req.category_str_id, req.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChoiceRequest {
    pub choice_str_id: String,
    pub name: String,
    pub price_delta: f64,
}

impl CreateChoiceRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_id("choice_str_id", &self.choice_str_id)?;
        require_finite("price_delta", self.price_delta)
    }
}

impl From<CreateChoiceRequest> for OptionChoice {
    fn from(req: CreateChoiceRequest) -> Self {
        OptionChoice::new(req.choice_str_id, req.name, req.price_delta)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRuleRequest {
    pub rule_type: RuleType,
    pub primary_choice_str_id: String,
    pub secondary_choice_str_id: String,
}

impl CreateRuleRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_id("primary_choice_str_id", &self.primary_choice_str_id)?;
        require_id("secondary_choice_str_id", &self.secondary_choice_str_id)
    }
}

impl From<CreateRuleRequest> for CompatibilityRule {
    fn from(req: CreateRuleRequest) -> Self {
        CompatibilityRule {
            rule_type: req.rule_type,
            primary_choice_str_id: req.primary_choice_str_id,
            secondary_choice_str_id: req.secondary_choice_str_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableOptionsRequest {
    pub current_selections: Selections,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfigurationRequest {
    /// Ignored in favour of the template id in the request path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_str_id: Option<String>,
    pub selections: Selections,
}
