//! Service-level tests - typed requests through store and engine.

use product_configurator::catalog::{CatalogStore, InMemoryStore, RuleType, Selections};
use product_configurator::service::{
    AvailableOptionsRequest, ConfiguratorService, CreateCategoryRequest, CreateChoiceRequest,
    CreateRuleRequest, CreateTemplateRequest, ServiceError, ValidateConfigurationRequest,
};

use crate::support::{sample_service, selections};

fn no_selections() -> AvailableOptionsRequest {
    AvailableOptionsRequest {
        current_selections: Selections::new(),
    }
}

fn bike_service() -> ConfiguratorService<InMemoryStore> {
    let service = ConfiguratorService::new(InMemoryStore::new());
    service
        .create_template(CreateTemplateRequest {
            template_str_id: "bike".into(),
            name: "Custom Bike".into(),
            base_price: 500.0,
        })
        .unwrap();
    for (id, name) in [("frame", "Frame"), ("wheels", "Wheels")] {
        service
            .add_category(
                "bike",
                CreateCategoryRequest {
                    category_str_id: id.into(),
                    name: name.into(),
                },
            )
            .unwrap();
    }
    for (category, id, delta) in [
        ("frame", "carbon", 400.0),
        ("frame", "steel", 0.0),
        ("wheels", "road", 120.0),
        ("wheels", "fat", 90.5),
    ] {
        service
            .add_choice(
                category,
                CreateChoiceRequest {
                    choice_str_id: id.into(),
                    name: id.into(),
                    price_delta: delta,
                },
            )
            .unwrap();
    }
    service
        .add_rule(
            "bike",
            CreateRuleRequest {
                rule_type: RuleType::IncompatibleWith,
                primary_choice_str_id: "carbon".into(),
                secondary_choice_str_id: "fat".into(),
            },
        )
        .unwrap();
    service
}

#[test]
fn full_lifecycle() {
    let service = bike_service();

    let template = service.get_template("bike").unwrap();
    assert_eq!(template.base_price, 500.0);
    assert_eq!(service.list_categories("bike").unwrap().len(), 2);
    assert_eq!(service.list_rules("bike").unwrap().len(), 1);
    assert_eq!(service.store().list_choices("frame").unwrap().len(), 2);

    let available = service
        .available_options(
            "bike",
            "wheels",
            &AvailableOptionsRequest {
                current_selections: selections(&[("frame", "carbon")]),
            },
        )
        .unwrap();
    let ids: Vec<&str> = available.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["road"]);

    let result = service
        .validate_configuration(
            "bike",
            &ValidateConfigurationRequest {
                template_str_id: Some("bike".into()),
                selections: selections(&[("frame", "steel"), ("wheels", "fat")]),
            },
        )
        .unwrap();
    assert!(result.is_valid);
    assert_eq!(result.total_price, Some(590.5));
}

#[test]
fn availability_for_unknown_template_is_not_found() {
    let service = sample_service();
    let err = service
        .available_options("ghost", "cpu", &no_selections())
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Template ghost not found");
}

#[test]
fn availability_for_unknown_category_is_empty() {
    let service = sample_service();
    let available = service
        .available_options("laptop_x", "keyboard", &no_selections())
        .unwrap();
    assert!(available.is_empty());
}

#[test]
fn validation_for_unknown_template_is_an_invalid_result() {
    let service = sample_service();
    let result = service
        .validate_configuration(
            "ghost",
            &ValidateConfigurationRequest {
                template_str_id: None,
                selections: selections(&[("cpu", "intel_i7")]),
            },
        )
        .unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.total_price, None);
    assert_eq!(result.errors, vec!["Template ghost not found"]);
}

#[test]
fn path_template_wins_over_body() {
    let service = sample_service();
    let result = service
        .validate_configuration(
            "laptop_x",
            &ValidateConfigurationRequest {
                template_str_id: Some("ghost".into()),
                selections: selections(&[("cpu", "amd_cpu")]),
            },
        )
        .unwrap();
    assert_eq!(result.total_price, Some(920.0));
}

#[test]
fn writes_under_unknown_parents_are_not_found() {
    let service = sample_service();

    let err = service
        .add_category(
            "ghost",
            CreateCategoryRequest {
                category_str_id: "cpu".into(),
                name: "Processor".into(),
            },
        )
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = service
        .add_rule(
            "ghost",
            CreateRuleRequest {
                rule_type: RuleType::Requires,
                primary_choice_str_id: "a".into(),
                secondary_choice_str_id: "b".into(),
            },
        )
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = service
        .add_choice(
            "keyboard",
            CreateChoiceRequest {
                choice_str_id: "us_layout".into(),
                name: "US Layout".into(),
                price_delta: 0.0,
            },
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "Category keyboard not found");
}

#[test]
fn invalid_bodies_never_reach_the_store() {
    let service = sample_service();
    let err = service
        .create_template(CreateTemplateRequest {
            template_str_id: String::new(),
            name: "Nameless".into(),
            base_price: 1.0,
        })
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(service.get_template("").is_err());
}

#[test]
fn rules_naming_unknown_choices_never_match() {
    let service = sample_service();
    service
        .add_rule(
            "laptop_x",
            CreateRuleRequest {
                rule_type: RuleType::Requires,
                primary_choice_str_id: "quantum_cpu".into(),
                secondary_choice_str_id: "cryo_cooler".into(),
            },
        )
        .unwrap();

    let result = service
        .validate_configuration(
            "laptop_x",
            &ValidateConfigurationRequest {
                template_str_id: None,
                selections: selections(&[("ram", "8gb_ddr4")]),
            },
        )
        .unwrap();
    assert_eq!(result.total_price, Some(900.0));
}
