use ruleval_validator::{Validate, Validator};

#[derive(Validate)]
pub struct SignUp {
    #[validate(rules = "required;username", label = "Username", labels(zh = "用户名"))]
    username: String,

    #[validate]
    password: String,

    #[validate(rules = "equal:password", message = "Passwords do not match")]
    repeat: String,

    #[validate(rules = "min:18")]
    age: Option<u8>,

    #[validate(skip)]
    _session: u64,

    note: String,
}

fn main() {
    let form = SignUp {
        username: "alice_1".to_string(),
        password: "secret".to_string(),
        repeat: "secret".to_string(),
        age: Some(30),
        _session: 0,
        note: String::new(),
    };
    let _ = &form.note;

    let report = Validator::default().check_record(&form);
    assert!(report.is_valid());
}
