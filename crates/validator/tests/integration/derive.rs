use std::fmt;

use pretty_assertions::assert_eq;
use ruleval_validator::message::{Locale, keys};
use ruleval_validator::record::Record;
use ruleval_validator::value::Value;
use ruleval_validator::{Validate, Validator};

#[derive(Validate)]
struct SignUp {
    #[validate(rules = "required;username", label = "User name", labels(zh = "用户名"))]
    user: String,

    #[validate]
    password: String,

    #[validate(rules = "equal:password", label = "Repeat", message = "Passwords do not match")]
    repeat: String,

    #[validate(rules = "min:18", label = "Age")]
    age: Option<u8>,

    #[validate(skip)]
    #[allow(dead_code)]
    session: u64,
}

fn sign_up() -> SignUp {
    SignUp {
        user: "ann".into(),
        password: "secret".into(),
        repeat: "secret".into(),
        age: Some(30),
        session: 7,
    }
}

#[test]
fn derived_record_lists_marked_fields() {
    let record = Record::of(&sign_up());

    let names: Vec<&str> = record.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["user", "repeat", "age"]);

    let scope = record.scope_of(&record.fields()[0]).unwrap();
    let keys: Vec<&str> = scope.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["user", "password", "repeat", "age"]);
}

#[test]
fn derived_record_validates() {
    let validator = Validator::default();
    assert!(validator.check_record(&sign_up()).is_valid());

    let form = SignUp {
        user: "1ann".into(),
        repeat: "other".into(),
        age: Some(12),
        ..sign_up()
    };
    let report = validator.check_record(&form);

    assert_eq!(
        report.messages(),
        vec![
            "User name must start with a letter",
            "Passwords do not match",
            "Age should be greater than 18",
        ]
    );
}

#[test]
fn absent_option_skips_non_required_rules() {
    let form = SignUp { age: None, ..sign_up() };
    assert!(Validator::default().check_record(&form).is_valid());
}

#[test]
fn localized_label_from_attribute() {
    let form = SignUp { user: String::new(), ..sign_up() };
    let report = Validator::default().check_record_in(&form, Locale::ZH);

    assert_eq!(report.messages(), vec!["用户名不能为空"]);
}

#[derive(Validate)]
struct Address {
    #[validate(rules = "required", label = "City")]
    city: String,
}

#[derive(Validate)]
struct Line {
    #[validate]
    sku: String,

    #[validate(rules = "min:1", label = "Quantity")]
    qty: u32,
}

#[derive(Debug)]
struct OrderProblem(&'static str);

impl fmt::Display for OrderProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Validate)]
#[validate(check = Order::skus_unique)]
struct Order {
    #[validate(nested)]
    address: Address,

    #[validate(each, rules = "required", label = "Lines")]
    lines: Vec<Line>,
}

impl Order {
    fn skus_unique(&self) -> Result<(), OrderProblem> {
        let mut seen = std::collections::HashSet::new();
        if self.lines.iter().all(|line| seen.insert(line.sku.as_str())) {
            Ok(())
        } else {
            Err(OrderProblem("line SKUs must be unique"))
        }
    }
}

#[test]
fn nested_and_each_flatten_paths() {
    let order = Order {
        address: Address { city: String::new() },
        lines: vec![
            Line { sku: "a".into(), qty: 1 },
            Line { sku: "a".into(), qty: 0 },
        ],
    };

    let report = Validator::default().check_record(&order);

    let fields: Vec<&str> = report.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["address.city", "lines[1].qty", ""]);
    assert_eq!(
        report.messages(),
        vec![
            "City must not be empty",
            "Quantity should be greater than 1",
            "line SKUs must be unique",
        ]
    );
    assert_eq!(report.errors()[2].template, keys::RECORD);
}

#[test]
fn each_rules_apply_to_the_sequence() {
    let order = Order {
        address: Address { city: "Oslo".into() },
        lines: Vec::new(),
    };

    let report = Validator::default().check_record(&order);

    assert_eq!(report.messages(), vec!["Lines must not be empty"]);
    assert_eq!(report.errors()[0].value, Value::Seq(Vec::new()));
}

#[derive(Validate)]
struct Unmarked {
    #[allow(dead_code)]
    password: String,

    #[validate(rules = "equal:password", label = "Repeat")]
    repeat: String,
}

#[test]
fn unmarked_sibling_is_not_found() {
    let form = Unmarked {
        password: "secret".into(),
        repeat: "secret".into(),
    };

    let report = Validator::default().check_record(&form);

    assert_eq!(report.len(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.template, keys::FIELD_NOT_FOUND);
    assert_eq!(error.message, "field password referenced by the rule does not exist");
}
