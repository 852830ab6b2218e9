use pretty_assertions::assert_eq;
use ruleval_validator::message::{Locale, MessageCatalog, Template};
use ruleval_validator::record::{Field, Record};
use ruleval_validator::{Validator, ValidatorConfig};

fn score() -> Record {
    let mut builder = Record::builder();
    builder.field(
        Field::new("score", -5)
            .rules("min:0")
            .label("Score")
            .label_in(Locale::ZH, "评分"),
    );
    builder.build()
}

#[test]
fn chinese_messages_have_no_separator() {
    let report = Validator::default().check_in(&score(), Locale::ZH);
    assert_eq!(report.messages(), vec!["评分应大于0"]);
}

#[test]
fn default_locale_comes_from_config() {
    let validator = Validator::new(ValidatorConfig::default().with_default_locale(Locale::ZH));
    assert_eq!(validator.check(&score()).messages(), vec!["评分应大于0"]);
}

#[test]
fn unknown_locale_falls_back_to_default_table() {
    let report = Validator::default().check_in(&score(), "fr");
    assert_eq!(report.messages(), vec!["Score should be greater than 0"]);
}

#[test]
fn missing_key_uses_the_locales_unknown_template() {
    let catalog = MessageCatalog::builtin();
    catalog.set_template("de", "_unknown", "unbekannter Fehler");
    catalog.set_template("de", "required", "darf nicht leer sein");

    let validator = Validator::builder().catalog(catalog).build();
    let mut builder = Record::builder();
    builder
        .field(Field::new("name", "").rules("required").label("Name"))
        .field(Field::new("age", -1).rules("min:0").label("Alter"));
    let report = validator.check_in(&builder.build(), "de");

    assert_eq!(
        report.messages(),
        vec!["Name darf nicht leer sein", "Alter unbekannter Fehler 0"]
    );
}

#[test]
fn template_tokens_place_label_and_limit() {
    let validator = Validator::default();
    validator.set_template(
        Locale::EN,
        "min",
        Template::parse_marked("{{{field} must be at least {limit}}}"),
    );

    let report = validator.check(&score());
    assert_eq!(report.messages(), vec!["Score must be at least 0"]);
}

#[test]
fn bundles_load_from_json_and_toml() {
    let catalog = MessageCatalog::builtin();
    let applied = catalog
        .load_json("en", r#"{ "required": "is mandatory", "min": "{{too small" }"#)
        .unwrap();
    assert_eq!(applied, 2);

    let applied = catalog
        .load_toml("zh", "required = \"必填\"\n")
        .unwrap();
    assert_eq!(applied, 1);

    let validator = Validator::builder().catalog(catalog).build();
    let mut builder = Record::builder();
    builder
        .field(Field::new("name", "").rules("required").label("Name"))
        .field(Field::new("age", -1).rules("min:0").label("Age"));
    let record = builder.build();

    assert_eq!(validator.check(&record).messages(), vec!["Name is mandatory", "too small 0"]);
    assert_eq!(validator.check_in(&record, Locale::ZH).messages()[0], "Name必填");
}

#[test]
fn malformed_bundle_is_an_error() {
    let catalog = MessageCatalog::builtin();
    assert!(catalog.load_json("en", "{ not json").is_err());
}
