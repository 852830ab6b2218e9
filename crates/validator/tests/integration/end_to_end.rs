use pretty_assertions::assert_eq;
use rstest::rstest;
use ruleval_validator::message::keys;
use ruleval_validator::record::{Field, Record};
use ruleval_validator::value::{Value, ValueKind};
use ruleval_validator::{Validator, ValidatorConfig};

use crate::init_tracing;

fn single(field: Field) -> Record {
    let mut builder = Record::builder();
    builder.field(field);
    builder.build()
}

#[test]
fn score_below_minimum() {
    init_tracing();
    let record = single(Field::new("Score", -5).rules("min:0").label("Score"));

    let report = Validator::default().check(&record);

    assert!(!report.is_valid());
    assert_eq!(report.len(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.message, "Score should be greater than 0");
    assert_eq!(error.template, keys::MIN);
    assert_eq!(error.value, Value::Int(-5));
    assert_eq!(error.limit, Some(Value::Int(0)));
}

#[test]
fn empty_name_is_required() {
    let record = single(Field::new("Name", "").rules("required").label("Name"));

    let report = Validator::default().check(&record);

    assert_eq!(report.messages(), vec!["Name must not be empty"]);
}

#[test]
fn valid_record_has_no_errors() {
    let mut builder = Record::builder();
    builder
        .field(Field::new("name", "Ann").rules("required;alpha"))
        .field(Field::new("age", 30).rules("min:18;max:130"))
        .field(Field::new("email", "ann@example.com").rules("email"));
    let report = Validator::default().check(&builder.build());

    assert!(report.is_valid());
    assert!(report.into_result().is_ok());
}

#[test]
fn errors_follow_field_then_rule_order() {
    let mut builder = Record::builder();
    builder
        .field(Field::new("a", 200).rules("min:0;max:100;list:1,2").label("A"))
        .field(Field::new("b", "").rules("required").label("B"));
    let report = Validator::default().check(&builder.build());

    assert_eq!(
        report.messages(),
        vec!["A should be less than 100", "A is not a valid value", "B must not be empty"]
    );
}

#[test]
fn override_message_replaces_first_failure_only() {
    let record = single(
        Field::new("age", 200)
            .rules("max:100;list:1,2")
            .label("Age")
            .message("Please enter a real age"),
    );

    let report = Validator::default().check(&record);

    assert_eq!(report.messages(), vec!["Please enter a real age"]);
    assert_eq!(report.errors()[0].template, keys::MAX);
}

#[test]
fn validation_is_idempotent() {
    let record = single(Field::new("code", "ab-1").rules("alphanumeric;minlen:5").label("Code"));
    let validator = Validator::default();

    let first = validator.check(&record);
    let second = validator.check(&record);

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[rstest]
#[case::landline("26088888", true)]
#[case::mobile("13888888888", true)]
#[case::neither("123456", false)]
fn phone_accepts_either_format(#[case] number: &str, #[case] ok: bool) {
    let record = single(Field::new("phone", number).rules("phone").label("Phone"));

    let report = Validator::default().check(&record);

    assert_eq!(report.is_valid(), ok);
    if !ok {
        assert_eq!(report.messages(), vec!["Phone is not a valid phone number"]);
    }
}

#[rstest]
#[case("日本語", false)]
#[case("日本語の", true)]
#[case("", true)]
fn minlen_counts_characters(#[case] text: &str, #[case] ok: bool) {
    let record = single(Field::new("name", text).rules("minlen:4").label("Name"));

    let report = Validator::default().check(&record);

    assert_eq!(report.is_valid(), ok, "{text}");
    if !ok {
        assert_eq!(report.messages(), vec!["Name length should be greater than 4"]);
    }
}

#[rstest]
#[case("ann-1", keys::ALPHA_DASH)]
#[case("1ann", keys::FIRST_CHAR_ALPHA)]
#[case("ann_", keys::LAST_UNDERLINE)]
fn username_reports_one_error(#[case] name: &str, #[case] template: &str) {
    let record = single(Field::new("user", name).rules("username").label("User"));

    let report = Validator::default().check(&record);

    assert_eq!(report.len(), 1);
    assert_eq!(report.errors()[0].template, template);
    assert_eq!(report.errors()[0].value, Value::from(name));
}

#[test]
fn malformed_directives_are_reported_not_raised() {
    let mut builder = Record::builder();
    builder
        .field(Field::new("a", 5).rules("min:abc").label("A"))
        .field(Field::new("b", true).rules("minlen:3").label("B"))
        .field(Field::new("c", "x").rules("shout").label("C"))
        .field(Field::new("d", "x").rules("equal:missing").label("D"))
        .field(Field::new("e", "x").rules(";;;:ignored;").label("E"));
    let report = Validator::default().check(&builder.build());

    let templates: Vec<&str> = report.iter().map(|e| e.template.as_str()).collect();
    assert_eq!(
        templates,
        vec![
            keys::PARAM_ERROR,
            keys::VALUE_TYPE_ERROR,
            keys::CHECKER_NOT_FOUND,
            keys::FIELD_NOT_FOUND,
        ]
    );
    assert_eq!(report.errors()[0].message, "invalid parameters for rule min:abc");
    assert_eq!(report.errors()[2].message, "C uses an unknown rule shout");
}

#[test]
fn malformed_limits_are_reported_for_absent_values() {
    let mut builder = Record::builder();
    builder
        .field(Field::of("age", &None::<i32>).rules("min:abc").label("Age"))
        .field(Field::new("name", "").rules("minlen:abc").label("Name"));
    let report = Validator::default().check(&builder.build());

    let failures: Vec<(&str, &str)> = report
        .iter()
        .map(|e| (e.field.as_str(), e.template.as_str()))
        .collect();
    assert_eq!(failures, vec![("age", keys::PARAM_ERROR), ("name", keys::PARAM_ERROR)]);
}

#[test]
fn declared_float_field_compares_as_float() {
    let record = single(
        Field::with_kind("ratio", Value::Int(3), ValueKind::Float)
            .rules("min:2.5")
            .label("Ratio"),
    );

    assert!(Validator::default().check(&record).is_valid());
}

#[test]
fn zero_counts_as_missing_only_when_configured() {
    let record = single(Field::new("count", 0).rules("required").label("Count"));

    assert!(Validator::default().check(&record).is_valid());

    let strict = Validator::new(ValidatorConfig::default().with_zero_is_missing(true));
    assert_eq!(strict.check(&record).messages(), vec!["Count must not be empty"]);
}

#[test]
fn nested_fields_use_their_own_scope() {
    let mut builder = Record::builder();
    builder
        .field(Field::new("password", "outer"))
        .nested("account", |account| {
            account
                .field(Field::new("password", "inner"))
                .field(Field::new("repeat", "inner").rules("equal:password").label("Repeat"));
        });
    let report = Validator::default().check(&builder.build());

    assert!(report.is_valid());
}

#[test]
fn record_checks_come_after_field_errors() {
    let mut builder = Record::builder();
    builder
        .check(|_| Err::<(), _>("totals do not add up"))
        .field(Field::new("qty", 0).rules("min:1").label("Qty"));
    let report = Validator::default().check(&builder.build());

    assert_eq!(report.messages(), vec!["Qty should be greater than 1", "totals do not add up"]);
    assert_eq!(report.errors()[1].template, keys::RECORD);
}

#[test]
fn validate_joins_messages() {
    let record = single(Field::new("name", "").rules("required").label("Name"));
    let report = Validator::default().check(&record);

    let error = report.into_result().unwrap_err();
    assert_eq!(error.to_string(), "Name must not be empty");
    assert_eq!(error.errors().len(), 1);
}
