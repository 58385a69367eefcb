//! Compatibility engine - availability filtering and validated pricing.
//!
//! The engine is pure: it reads a rule sequence and a selection map and
//! returns data. Rule violations are values ([`Violation`]), never errors.
//! The only failure it can surface is the choice resolver's own error.
//!
//! ## Example
//!
//! ```ignore
//! use product_configurator::engine;
//!
//! let rules = store.list_rules("laptop_x")?;
//! let available = engine::filter_available_choices(&store.list_choices("cpu")?, &rules, &selections);
//! let result = engine::validate_and_price(&template, &rules, &selections, &store)?;
//! ```

mod resolver;
mod violation;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{CompatibilityRule, OptionChoice, ProductTemplate, RuleType, Selections};

pub use resolver::ChoiceResolver;
pub use violation::Violation;

/// Outcome of validating a selection map against a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Present only when the configuration is valid.
    pub total_price: Option<f64>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid(total_price: f64) -> Self {
        Self {
            is_valid: true,
            total_price: Some(total_price),
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            total_price: None,
            errors,
        }
    }

    /// Result reported when validation is asked for an unknown template.
    pub fn template_not_found(template_id: &str) -> Self {
        Self::invalid(vec![format!("Template {} not found", template_id)])
    }
}

fn selected_ids(selections: &Selections) -> HashSet<&str> {
    selections.values().map(String::as_str).collect()
}

/// Whether an INCOMPATIBLE_WITH rule links `candidate` to something selected.
fn excluded_by(rule: &CompatibilityRule, candidate: &str, selected: &HashSet<&str>) -> bool {
    if rule.rule_type != RuleType::IncompatibleWith {
        return false;
    }
    (rule.primary() == candidate && selected.contains(rule.secondary()))
        || (rule.secondary() == candidate && selected.contains(rule.primary()))
}

/// Choices of a category that stay available given the current selections.
///
/// A choice is dropped when an INCOMPATIBLE_WITH rule pairs it with any
/// selected value, in either direction. REQUIRES rules are ignored here.
/// A selection for the target category itself counts like any other.
/// Output keeps the input order.
pub fn filter_available_choices(
    choices: &[OptionChoice],
    rules: &[CompatibilityRule],
    selections: &Selections,
) -> Vec<OptionChoice> {
    let selected = selected_ids(selections);
    choices
        .iter()
        .filter(|choice| {
            !rules
                .iter()
                .any(|rule| excluded_by(rule, choice.id(), &selected))
        })
        .cloned()
        .collect()
}

/// Every rule violation of a selection map.
///
/// All REQUIRES rules are checked first, then all INCOMPATIBLE_WITH rules,
/// each pass in rule-sequence order.
pub fn check_rules(rules: &[CompatibilityRule], selections: &Selections) -> Vec<Violation> {
    let selected = selected_ids(selections);
    let mut violations = Vec::new();

    for rule in rules.iter().filter(|r| r.rule_type == RuleType::Requires) {
        if selected.contains(rule.primary()) && !selected.contains(rule.secondary()) {
            violations.push(Violation::MissingRequirement {
                choice: rule.primary().to_string(),
                required: rule.secondary().to_string(),
            });
        }
    }

    for rule in rules
        .iter()
        .filter(|r| r.rule_type == RuleType::IncompatibleWith)
    {
        if selected.contains(rule.primary()) && selected.contains(rule.secondary()) {
            violations.push(Violation::Incompatible {
                choice: rule.primary().to_string(),
                conflicting: rule.secondary().to_string(),
            });
        }
    }

    violations
}

/// Validate a selection map and price it.
///
/// Pricing runs only when no rule is violated. Selections the resolver
/// cannot find contribute nothing to the total.
pub fn validate_and_price<R>(
    template: &ProductTemplate,
    rules: &[CompatibilityRule],
    selections: &Selections,
    resolver: &R,
) -> Result<ValidationResult, R::Error>
where
    R: ChoiceResolver + ?Sized,
{
    let violations = check_rules(rules, selections);
    if !violations.is_empty() {
        return Ok(ValidationResult::invalid(
            violations.iter().map(ToString::to_string).collect(),
        ));
    }

    let mut total_price = template.base_price;
    for (category_id, choice_id) in selections {
        if let Some(choice) = resolver.resolve(category_id, choice_id)? {
            total_price += choice.price_delta;
        }
    }

    Ok(ValidationResult::valid(total_price))
}
