//! Engine scenarios against the laptop_x demo catalog.

use product_configurator::catalog::{
    CatalogStore, CompatibilityRule, ProductTemplate, RuleStore, Selections,
};
use product_configurator::engine::{self, ValidationResult};

use crate::support::{sample_store, selections};

fn laptop(store: &impl CatalogStore) -> ProductTemplate {
    store.get_template("laptop_x").unwrap().unwrap()
}

#[test]
fn i7_without_motherboard_is_invalid() {
    let store = sample_store();
    let rules = vec![CompatibilityRule::requires("intel_i7", "mobo_z")];

    let result = engine::validate_and_price(
        &laptop(&store),
        &rules,
        &selections(&[("cpu", "intel_i7")]),
        &store,
    )
    .unwrap();

    assert_eq!(
        result,
        ValidationResult::invalid(vec!["Choice intel_i7 requires mobo_z".to_string()])
    );
}

#[test]
fn amd_gpu_with_intel_cpu_is_invalid() {
    let store = sample_store();
    let rules = vec![CompatibilityRule::incompatible_with("amd_gpu", "intel_cpu")];

    let result = engine::validate_and_price(
        &laptop(&store),
        &rules,
        &selections(&[("cpu", "intel_cpu"), ("gpu", "amd_gpu")]),
        &store,
    )
    .unwrap();

    assert!(!result.is_valid);
    assert!(result.total_price.is_none());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("amd_gpu"));
    assert!(result.errors[0].contains("intel_cpu"));
}

#[test]
fn satisfied_rules_price_the_configuration() {
    let store = sample_store();
    let rules = store.list_rules("laptop_x").unwrap();

    let result = engine::validate_and_price(
        &laptop(&store),
        &rules,
        &selections(&[("cpu", "intel_i7"), ("gpu", "mobo_z")]),
        &store,
    )
    .unwrap();

    assert!(result.is_valid);
    assert_eq!(result.total_price, Some(1100.0));
    assert!(result.errors.is_empty());
}

#[test]
fn amd_gpu_selection_hides_intel_cpu() {
    let store = sample_store();
    let rules = store.list_rules("laptop_x").unwrap();
    let cpus = store.list_choices("cpu").unwrap();

    let available =
        engine::filter_available_choices(&cpus, &rules, &selections(&[("gpu", "amd_gpu")]));

    let ids: Vec<&str> = available.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["intel_i7", "amd_cpu"]);
}

#[test]
fn intel_cpu_selection_hides_amd_gpu() {
    let store = sample_store();
    let rules = store.list_rules("laptop_x").unwrap();
    let gpus = store.list_choices("gpu").unwrap();

    let available =
        engine::filter_available_choices(&gpus, &rules, &selections(&[("cpu", "intel_cpu")]));

    let ids: Vec<&str> = available.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["intel_gpu", "nvidia_gpu", "mobo_z"]);
}

#[test]
fn nothing_selected_leaves_everything_available() {
    let store = sample_store();
    let rules = store.list_rules("laptop_x").unwrap();
    let rams = store.list_choices("ram").unwrap();

    let available = engine::filter_available_choices(&rams, &rules, &Selections::new());
    assert_eq!(available, rams);
}

#[test]
fn full_configuration_sums_every_delta() {
    let store = sample_store();
    let rules = store.list_rules("laptop_x").unwrap();

    let result = engine::validate_and_price(
        &laptop(&store),
        &rules,
        &selections(&[("cpu", "amd_cpu"), ("ram", "32gb_ddr4"), ("gpu", "nvidia_gpu")]),
        &store,
    )
    .unwrap();

    assert_eq!(result.total_price, Some(800.0 + 120.0 + 400.0 + 500.0));
}

#[test]
fn unknown_choice_contributes_nothing() {
    let store = sample_store();
    let rules = store.list_rules("laptop_x").unwrap();

    let result = engine::validate_and_price(
        &laptop(&store),
        &rules,
        &selections(&[("cpu", "amd_cpu"), ("ram", "64gb_ddr5"), ("psu", "psu_750")]),
        &store,
    )
    .unwrap();

    assert_eq!(result, ValidationResult::valid(920.0));
}

#[test]
fn validation_is_deterministic() {
    let store = sample_store();
    store
        .add_rule("laptop_x", CompatibilityRule::requires("amd_gpu", "32gb_ddr4"))
        .unwrap();
    let rules = store.list_rules("laptop_x").unwrap();
    let picked = selections(&[("cpu", "intel_cpu"), ("gpu", "amd_gpu"), ("ram", "8gb_ddr4")]);

    let first = engine::validate_and_price(&laptop(&store), &rules, &picked, &store).unwrap();
    let second = engine::validate_and_price(&laptop(&store), &rules, &picked, &store).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.errors,
        vec![
            "Choice amd_gpu requires 32gb_ddr4",
            "Choice amd_gpu is incompatible with intel_cpu",
        ]
    );
}
