//! Demo catalog loaded by the server at start-up.

use tracing::info;

use crate::catalog::{
    CatalogStore, CompatibilityRule, OptionCategory, OptionChoice, ProductTemplate, RuleStore,
    StoreError,
};

pub const SAMPLE_TEMPLATE_ID: &str = "laptop_x";

const CATEGORIES: &[(&str, &str)] = &[
    ("cpu", "Processor"),
    ("ram", "Memory"),
    ("gpu", "Graphics Card"),
];

const CHOICES: &[(&str, &str, &str, f64)] = &[
    ("cpu", "intel_i7", "Intel Core i7", 150.0),
    ("cpu", "intel_cpu", "Intel CPU", 100.0),
    ("cpu", "amd_cpu", "AMD CPU", 120.0),
    ("ram", "16gb_ddr4", "16GB DDR4", 200.0),
    ("ram", "8gb_ddr4", "8GB DDR4", 100.0),
    ("ram", "32gb_ddr4", "32GB DDR4", 400.0),
    ("gpu", "amd_gpu", "AMD GPU", 300.0),
    ("gpu", "intel_gpu", "Intel GPU", 200.0),
    ("gpu", "nvidia_gpu", "NVIDIA GPU", 500.0),
    ("gpu", "mobo_z", "Motherboard Z", 150.0),
];

/// Seed the `laptop_x` template with its categories, choices and rules.
pub fn seed_sample_catalog<S>(store: &S) -> Result<(), StoreError>
where
    S: CatalogStore + RuleStore + ?Sized,
{
    store.create_template(ProductTemplate::new(
        SAMPLE_TEMPLATE_ID,
        "Laptop Model X",
        800.0,
    ))?;

    for (id, name) in CATEGORIES {
        store.add_category(SAMPLE_TEMPLATE_ID, OptionCategory::new(*id, *name))?;
    }

    for (category, id, name, delta) in CHOICES {
        store.add_choice(category, OptionChoice::new(*id, *name, *delta))?;
    }

    store.add_rule(
        SAMPLE_TEMPLATE_ID,
        CompatibilityRule::requires("intel_i7", "mobo_z"),
    )?;
    store.add_rule(
        SAMPLE_TEMPLATE_ID,
        CompatibilityRule::incompatible_with("amd_gpu", "intel_cpu"),
    )?;

    info!(
        template = SAMPLE_TEMPLATE_ID,
        categories = CATEGORIES.len(),
        choices = CHOICES.len(),
        "Seeded sample catalog"
    );
    Ok(())
}
