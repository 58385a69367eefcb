//! Store traits for the catalog and the per-template rule sets.

use super::{
    CompatibilityRule, OptionCategory, OptionChoice, ProductTemplate, StoreError,
};

/// Template, category and choice storage keyed by string identifiers.
///
/// Writes take `&self`; implementations use interior mutability so one
/// store can be shared by every request handler.
pub trait CatalogStore: Send + Sync {
    /// Get a template by ID. Returns None if not found.
    fn get_template(&self, id: &str) -> Result<Option<ProductTemplate>, StoreError>;

    /// Insert a template, overwriting any template with the same ID.
    /// Categories and rules already attached to that ID are kept.
    fn create_template(&self, template: ProductTemplate) -> Result<ProductTemplate, StoreError>;

    /// Attach a category to an existing template.
    /// Fails with `TemplateNotFound` if the template is unknown.
    fn add_category(
        &self,
        template_id: &str,
        category: OptionCategory,
    ) -> Result<OptionCategory, StoreError>;

    /// Categories of a template in insertion order. Empty if the template is unknown.
    fn list_categories(&self, template_id: &str) -> Result<Vec<OptionCategory>, StoreError>;

    /// Add a choice to an existing category.
    /// Fails with `CategoryNotFound` if the category is unknown.
    fn add_choice(&self, category_id: &str, choice: OptionChoice)
        -> Result<OptionChoice, StoreError>;

    /// Choices of a category in enumeration order. Empty if the category is unknown.
    fn list_choices(&self, category_id: &str) -> Result<Vec<OptionChoice>, StoreError>;

    /// Look up one choice within one category.
    fn resolve_choice(
        &self,
        category_id: &str,
        choice_id: &str,
    ) -> Result<Option<OptionChoice>, StoreError>;

    fn template_exists(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.get_template(id)?.is_some())
    }
}

/// Compatibility rules keyed by owning template, in insertion order.
pub trait RuleStore: Send + Sync {
    /// Append a rule to a template's rule sequence.
    /// Fails with `TemplateNotFound` if the template is unknown.
    fn add_rule(
        &self,
        template_id: &str,
        rule: CompatibilityRule,
    ) -> Result<CompatibilityRule, StoreError>;

    /// The rule sequence of a template. Empty if the template is unknown.
    fn list_rules(&self, template_id: &str) -> Result<Vec<CompatibilityRule>, StoreError>;
}
