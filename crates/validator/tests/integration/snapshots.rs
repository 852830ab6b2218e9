use insta::{assert_json_snapshot, assert_snapshot};
use ruleval_validator::Validator;
use ruleval_validator::message::Locale;
use ruleval_validator::record::{Field, Record};

fn sign_up() -> Record {
    let mut builder = Record::builder();
    builder
        .field(Field::new("score", -5).rules("min:0").label("Score").label_in(Locale::ZH, "评分"))
        .field(Field::new("name", "").rules("required").label("Name").label_in(Locale::ZH, "姓名"))
        .field(Field::new("tag", "a").rules("list:red,green").label("Tag").label_in(Locale::ZH, "标签"));
    builder.build()
}

#[test]
fn report_serializes_as_entry_list() {
    let report = Validator::default().check(&sign_up());

    assert_json_snapshot!(report, @r#"
    [
      {
        "field": "score",
        "label": "Score",
        "value": -5,
        "limit": 0,
        "template": "min",
        "message": "Score should be greater than 0"
      },
      {
        "field": "name",
        "label": "Name",
        "value": "",
        "template": "required",
        "message": "Name must not be empty"
      },
      {
        "field": "tag",
        "label": "Tag",
        "value": "a",
        "template": "list",
        "message": "Tag is not a valid value"
      }
    ]
    "#);
}

#[test]
fn chinese_messages() {
    let report = Validator::default().check_in(&sign_up(), Locale::ZH);

    assert_snapshot!(report.messages().join("\n"), @r"
    评分应大于0
    姓名不能为空
    标签不是一个有效的值
    ");
}
