//! InMemoryStore - HashMap-backed catalog and rule store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{
    CatalogStore, CompatibilityRule, OptionCategory, OptionChoice, ProductTemplate, RuleStore,
    StoreError,
};

#[derive(Default)]
struct Catalog {
    templates: HashMap<String, ProductTemplate>,
    categories: HashMap<String, OptionCategory>,
    /// template id -> category ids, insertion order.
    template_categories: HashMap<String, Vec<String>>,
    /// category id -> choices, insertion order.
    choices: HashMap<String, Vec<OptionChoice>>,
    /// template id -> rules, insertion order.
    rules: HashMap<String, Vec<CompatibilityRule>>,
}

/// In-memory catalog backed by HashMaps behind a single lock.
///
/// Clone-friendly via Arc: clones share the same catalog. Concurrent writes
/// to the same identifier are last-writer-wins.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Catalog>, StoreError> {
        self.catalog
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write(&self, operation: &'static str) -> Result<RwLockWriteGuard<'_, Catalog>, StoreError> {
        self.catalog
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}

impl CatalogStore for InMemoryStore {
    fn get_template(&self, id: &str) -> Result<Option<ProductTemplate>, StoreError> {
        let catalog = self.read("get_template")?;
        Ok(catalog.templates.get(id).cloned())
    }

    fn create_template(&self, template: ProductTemplate) -> Result<ProductTemplate, StoreError> {
        let mut catalog = self.write("create_template")?;
        let id = template.template_str_id.clone();
        catalog.template_categories.entry(id.clone()).or_default();
        catalog.rules.entry(id.clone()).or_default();
        catalog.templates.insert(id, template.clone());
        Ok(template)
    }

    fn add_category(
        &self,
        template_id: &str,
        category: OptionCategory,
    ) -> Result<OptionCategory, StoreError> {
        let mut catalog = self.write("add_category")?;
        if !catalog.templates.contains_key(template_id) {
            return Err(StoreError::TemplateNotFound(template_id.to_string()));
        }

        let id = category.category_str_id.clone();
        let index = catalog
            .template_categories
            .entry(template_id.to_string())
            .or_default();
        if !index.contains(&id) {
            index.push(id.clone());
        }
        catalog.choices.entry(id.clone()).or_default();
        catalog.categories.insert(id, category.clone());
        Ok(category)
    }

    fn list_categories(&self, template_id: &str) -> Result<Vec<OptionCategory>, StoreError> {
        let catalog = self.read("list_categories")?;
        let ids = match catalog.template_categories.get(template_id) {
            Some(ids) => ids,
            None => return Ok(Vec::new()),
        };
        Ok(ids
            .iter()
            .filter_map(|id| catalog.categories.get(id).cloned())
            .collect())
    }

    fn add_choice(
        &self,
        category_id: &str,
        choice: OptionChoice,
    ) -> Result<OptionChoice, StoreError> {
        let mut catalog = self.write("add_choice")?;
        if !catalog.categories.contains_key(category_id) {
            return Err(StoreError::CategoryNotFound(category_id.to_string()));
        }

        let choices = catalog.choices.entry(category_id.to_string()).or_default();
        match choices
            .iter_mut()
            .find(|existing| existing.choice_str_id == choice.choice_str_id)
        {
            Some(existing) => *existing = choice.clone(),
            None => choices.push(choice.clone()),
        }
        Ok(choice)
    }

    fn list_choices(&self, category_id: &str) -> Result<Vec<OptionChoice>, StoreError> {
        let catalog = self.read("list_choices")?;
        Ok(catalog.choices.get(category_id).cloned().unwrap_or_default())
    }

    fn resolve_choice(
        &self,
        category_id: &str,
        choice_id: &str,
    ) -> Result<Option<OptionChoice>, StoreError> {
        let catalog = self.read("resolve_choice")?;
        Ok(catalog.choices.get(category_id).and_then(|choices| {
            choices
                .iter()
                .find(|choice| choice.choice_str_id == choice_id)
                .cloned()
        }))
    }

    fn template_exists(&self, id: &str) -> Result<bool, StoreError> {
        let catalog = self.read("template_exists")?;
        Ok(catalog.templates.contains_key(id))
    }
}

impl RuleStore for InMemoryStore {
    fn add_rule(
        &self,
        template_id: &str,
        rule: CompatibilityRule,
    ) -> Result<CompatibilityRule, StoreError> {
        let mut catalog = self.write("add_rule")?;
        if !catalog.templates.contains_key(template_id) {
            return Err(StoreError::TemplateNotFound(template_id.to_string()));
        }
        catalog
            .rules
            .entry(template_id.to_string())
            .or_default()
            .push(rule.clone());
        Ok(rule)
    }

    fn list_rules(&self, template_id: &str) -> Result<Vec<CompatibilityRule>, StoreError> {
        let catalog = self.read("list_rules")?;
        Ok(catalog.rules.get(template_id).cloned().unwrap_or_default())
    }
}
