use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category id -> chosen choice id. One entry per category.
pub type Selections = BTreeMap<String, String>;

/// A configurable product with a base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub template_str_id: String,
    pub name: String,
    pub base_price: f64,
}

impl ProductTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_price: f64) -> Self {
        Self {
            template_str_id: id.into(),
            name: name.into(),
            base_price,
        }
    }

    pub fn id(&self) -> &str {
        &self.template_str_id
    }
}

/// A configurable aspect of a template (e.g. "memory").
///
/// The owning template is recorded only in the store's template index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCategory {
    pub category_str_id: String,
    pub name: String,
}

impl OptionCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category_str_id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.category_str_id
    }
}

/// One concrete option within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChoice {
    pub choice_str_id: String,
    pub name: String,
    /// Added to the template's base price when selected.
    pub price_delta: f64,
}

impl OptionChoice {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_delta: f64) -> Self {
        Self {
            choice_str_id: id.into(),
            name: name.into(),
            price_delta,
        }
    }

    pub fn id(&self) -> &str {
        &self.choice_str_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    /// If the primary choice is selected, the secondary must be selected too.
    Requires,
    /// The two choices may not be selected together, in either order.
    IncompatibleWith,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::Requires => write!(f, "REQUIRES"),
            RuleType::IncompatibleWith => write!(f, "INCOMPATIBLE_WITH"),
        }
    }
}

/// A constraint between two choices, owned by a template.
///
/// Identifiers are not checked against the catalog: a rule naming an
/// unknown choice simply never matches a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRule {
    pub rule_type: RuleType,
    pub primary_choice_str_id: String,
    pub secondary_choice_str_id: String,
}

impl CompatibilityRule {
    pub fn requires(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            rule_type: RuleType::Requires,
            primary_choice_str_id: primary.into(),
            secondary_choice_str_id: secondary.into(),
        }
    }

    pub fn incompatible_with(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            rule_type: RuleType::IncompatibleWith,
            primary_choice_str_id: primary.into(),
            secondary_choice_str_id: secondary.into(),
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary_choice_str_id
    }

    pub fn secondary(&self) -> &str {
        &self.secondary_choice_str_id
    }
}
