//! Nested structure validation.

use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

struct Address {
    street: String,
    city: String,
}

struct Company {
    name: String,
    address: Address,
}

struct Employee {
    name: String,
    title: &'static str,
    home: Address,
    employer: Company,
}

validatable!(Address { street as "Street", city as "City" });
validatable!(Company { name as "Name"; nested address as "Address" });
validatable!(Employee {
    name as "Name",
    title as "Title";
    nested home as "Home",
    employer as "Employer",
});

fn address(street: &str, city: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
    }
}

fn rules() -> Rules {
    let mut rules = Rules::new();
    rules
        .register_required("Name", min_length(2), None)
        .register("Title", one_of(["engineer", "manager"]), Some("unknown title"))
        .register("Home.City", not_empty, None)
        .register("Employer.Address.City", not_empty, Some("company city required"))
        .register("City", not_empty, Some("never used: top-level key"));
    rules
}

#[test]
fn nested_required_field() {
    let mut rules = Rules::new();
    rules.register_required("Address.City", min_length(1), None);

    let company = Company {
        name: "Acme".to_string(),
        address: address("Main", ""),
    };
    let report = rules.validate_structured(&company);

    assert!(!report.is_valid());
    assert_eq!(
        report.errors_for("Address.City"),
        ["This value is required", "Must be at least 1 characters"]
    );
}

#[test]
fn failures_at_every_depth_flatten_into_one_map() {
    let employee = Employee {
        name: String::new(),
        title: "intern",
        home: address("Elm", ""),
        employer: Company {
            name: "Acme".to_string(),
            address: address("Main", ""),
        },
    };

    let report = rules().validate_structured(&employee);
    let (valid, messages) = report.into_parts();

    assert!(!valid);
    assert_eq!(
        messages.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Employer.Address.City", "Home.City", "Name", "Title"]
    );
    assert_eq!(
        messages["Name"],
        vec!["This value is required", "Must be at least 2 characters"]
    );
    assert_eq!(messages["Employer.Address.City"], vec!["company city required"]);
}

#[test]
fn valid_structure() {
    let employee = Employee {
        name: "Ann".to_string(),
        title: "engineer",
        home: address("Elm", "Oslo"),
        employer: Company {
            name: "Acme".to_string(),
            address: address("Main", "Bergen"),
        },
    };

    assert!(rules().validate_structured(&employee).is_valid());
}

#[test]
fn hand_written_validatable() {
    struct Login {
        user: String,
        password: String,
    }

    impl Validatable for Login {
        fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
            vec![
                ("user", FieldValue::from(&self.user)),
                ("password", FieldValue::from(&self.password)),
            ]
        }
    }

    let mut rules = Rules::new();
    rules
        .register_required("user", email(), None)
        .register("password", min_length(8), Some("password too short"));

    let login = Login {
        user: "ann@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let report = rules.validate_structured(&login);

    assert_eq!(report.len(), 1);
    assert_eq!(report.errors_for("password"), ["password too short"]);
}

#[test]
fn json_document_matches_struct_behaviour() {
    let document = json!({
        "Name": "",
        "Title": "intern",
        "Home": { "Street": "Elm", "City": "" },
        "Employer": { "Name": "Acme", "Address": { "Street": "Main", "City": "" } },
        "Salary": 1000
    });

    let from_json = rules().validate_structured(&document);

    let employee = Employee {
        name: String::new(),
        title: "intern",
        home: address("Elm", ""),
        employer: Company {
            name: "Acme".to_string(),
            address: address("Main", ""),
        },
    };
    let from_struct = rules().validate_structured(&employee);

    assert_eq!(from_json, from_struct);
}

#[test]
fn structured_validation_is_repeatable() {
    let document = json!({ "Name": "A", "Home": { "City": "" } });
    let rules = rules();

    assert_eq!(
        rules.validate_structured(&document),
        rules.validate_structured(&document)
    );
}
