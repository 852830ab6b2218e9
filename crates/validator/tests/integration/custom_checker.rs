use pretty_assertions::assert_eq;
use ruleval_validator::context::{CheckContext, FieldError};
use ruleval_validator::message::Locale;
use ruleval_validator::record::{Field, Record};
use ruleval_validator::registry::{Checker, CheckerRegistry};
use ruleval_validator::value::Value;
use ruleval_validator::{Validator, checker};

checker! {
    /// Lowercase ASCII letters only.
    pub Lowercase => "lowercase";
    rule(text) { text.bytes().all(|b| b.is_ascii_lowercase()) }
}

/// `multiple:<n>`: integer divisible by `n`.
struct Multiple;

impl Checker for Multiple {
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        let Some(step) = ctx.rule().single_param().and_then(|p| p.parse::<i64>().ok()) else {
            return Some(ctx.param_error());
        };
        match ctx.value() {
            Value::Nil => None,
            Value::Int(n) if step != 0 && n % step == 0 => None,
            Value::Int(_) => Some(ctx.violation().with_limit(step).finish()),
            _ => Some(ctx.type_error()),
        }
    }
}

fn record(field: Field) -> Record {
    let mut builder = Record::builder();
    builder.field(field);
    builder.build()
}

#[test]
fn registered_checker_uses_its_own_template() {
    let validator = Validator::default();
    validator.register_checker(Lowercase::NAME, Lowercase);
    validator.set_template(Locale::EN, Lowercase::NAME, "must be lowercase");
    validator.set_template(Locale::ZH, Lowercase::NAME, "必须为小写");

    let tagged = record(Field::new("tag", "Rust").rules("lowercase").label("Tag"));

    assert_eq!(validator.check(&tagged).messages(), vec!["Tag must be lowercase"]);
    assert_eq!(validator.check_in(&tagged, Locale::ZH).messages(), vec!["Tag必须为小写"]);
    assert!(validator.check(&record(Field::new("tag", "rust").rules("lowercase"))).is_valid());
}

#[test]
fn builder_checker_with_parameters() {
    let validator = Validator::builder().checker("multiple", Multiple).build();
    validator.merge_templates(Locale::EN, [("multiple", "must be a multiple of")]);

    let failing = record(Field::new("qty", 7).rules("multiple:5").label("Quantity"));
    let report = validator.check(&failing);
    let error = &report.errors()[0];
    assert_eq!(error.message, "Quantity must be a multiple of 5");
    assert_eq!(error.limit, Some(Value::Int(5)));

    assert!(validator.check(&record(Field::new("qty", 10).rules("multiple:5"))).is_valid());

    let misconfigured = record(Field::new("qty", 10).rules("multiple:x"));
    assert_eq!(
        validator.check(&misconfigured).messages(),
        vec!["invalid parameters for rule multiple:x"]
    );
}

#[test]
fn closure_checker_can_read_siblings() {
    let validator = Validator::builder()
        .checker("after", |ctx: &CheckContext<'_>| {
            let other = ctx.rule().single_param()?;
            let Some(Value::Int(start)) = ctx.sibling(other) else {
                return Some(ctx.field_not_found(other));
            };
            match ctx.value() {
                Value::Int(end) if end > start => None,
                _ => Some(ctx.violation().with_limit(*start).finish()),
            }
        })
        .build();
    validator.set_template(Locale::EN, "after", "must be after");

    let mut builder = Record::builder();
    builder
        .field(Field::new("start", 10))
        .field(Field::new("end", 5).rules("after:start").label("End"));

    assert_eq!(validator.check(&builder.build()).messages(), vec!["End must be after 10"]);
}

#[test]
fn custom_registry_without_builtins() {
    let registry = CheckerRegistry::empty();
    registry.register(Lowercase::NAME, Lowercase);
    let validator = Validator::builder().registry(registry).build();

    let report = validator.check(&record(Field::new("name", "").rules("required").label("Name")));

    assert_eq!(report.messages(), vec!["Name uses an unknown rule required"]);
}

#[test]
fn replacing_a_builtin() {
    let validator = Validator::default();
    validator.register_checker("email", |ctx: &CheckContext<'_>| {
        ctx.value()
            .as_str()
            .is_some_and(|text| !text.ends_with("@example.com"))
            .then(|| ctx.violation().finish())
    });

    let report = validator.check(&record(Field::new("mail", "a@b.org").rules("email").label("Mail")));

    assert_eq!(report.messages(), vec!["Mail is not a valid email address"]);
}
