use std::collections::BTreeMap;

use product_configurator::catalog::{InMemoryStore, Selections};
use product_configurator::sample::seed_sample_catalog;
use product_configurator::service::ConfiguratorService;

/// A fresh store holding the laptop_x demo catalog.
pub fn sample_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    seed_sample_catalog(&store).unwrap();
    store
}

pub fn sample_service() -> ConfiguratorService<InMemoryStore> {
    ConfiguratorService::new(sample_store())
}

pub fn selections(pairs: &[(&str, &str)]) -> Selections {
    pairs
        .iter()
        .map(|(category, choice)| (category.to_string(), choice.to_string()))
        .collect::<BTreeMap<_, _>>()
}
