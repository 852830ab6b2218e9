//! Built-in template tables.

use super::keys;

/// English templates, the default locale.
pub(crate) const EN: &[(&str, &str)] = &[
    (keys::REQUIRED, "must not be empty"),
    (keys::MIN, "should be greater than"),
    (keys::MAX, "should be less than"),
    (keys::MIN_LEN, "length should be greater than"),
    (keys::MAX_LEN, "length should be less than"),
    (keys::ALPHA, "must contain only letters"),
    (keys::ALPHANUMERIC, "must contain only letters or digits"),
    (keys::ALPHA_DASH, "must contain only letters, digits or underscores"),
    (keys::FIRST_CHAR_ALPHA, "must start with a letter"),
    (keys::LAST_UNDERLINE, "must not end with an underscore"),
    (keys::EMAIL, "is not a valid email address"),
    (keys::IPV4, "is not a valid IPv4 address"),
    (keys::MOBILE, "is not a valid mobile number"),
    (keys::TEL, "is not a valid landline number"),
    (keys::PHONE, "is not a valid phone number"),
    (keys::ID_CARD, "is not a valid ID card number"),
    (keys::EQUAL, "does not match"),
    (keys::LIST, "is not a valid value"),
    (keys::CHECKER_NOT_FOUND, "uses an unknown rule"),
    (keys::UNKNOWN, "unknown error"),
    (keys::PARAM_ERROR, "{{invalid parameters for rule {limit}}}"),
    (keys::VALUE_TYPE_ERROR, "has an unsupported value type"),
    (keys::FIELD_NOT_FOUND, "{{field {limit} referenced by the rule does not exist}}"),
    (keys::RECORD, "{{{limit}}}"),
];

/// Simplified Chinese templates.
pub(crate) const ZH: &[(&str, &str)] = &[
    (keys::REQUIRED, "不能为空"),
    (keys::MIN, "应大于"),
    (keys::MAX, "应小于"),
    (keys::MIN_LEN, "长度应大于"),
    (keys::MAX_LEN, "长度应小于"),
    (keys::ALPHA, "必须只包含字母"),
    (keys::ALPHANUMERIC, "只能含有字母或数字"),
    (keys::ALPHA_DASH, "只含有数字或字母以及下划线"),
    (keys::FIRST_CHAR_ALPHA, "的第一个字符必须为字母"),
    (keys::LAST_UNDERLINE, "的最后一个字符不能为下划线"),
    (keys::EMAIL, "不是合法的电子邮箱格式"),
    (keys::IPV4, "不是合法的 IPv4 地址格式"),
    (keys::MOBILE, "不是合法的手机号"),
    (keys::TEL, "不是合法的座机号码"),
    (keys::PHONE, "不是合法的号码"),
    (keys::ID_CARD, "不是合法的身份证号"),
    (keys::EQUAL, "的值前后不相同"),
    (keys::LIST, "不是一个有效的值"),
    (keys::CHECKER_NOT_FOUND, "检查规则未找到"),
    (keys::UNKNOWN, "未知错误"),
    (keys::PARAM_ERROR, "{{检查规则 {limit} 入参错误}}"),
    (keys::VALUE_TYPE_ERROR, "参数类型不正确"),
    (keys::FIELD_NOT_FOUND, "{{字段 {limit} 不存在}}"),
    (keys::RECORD, "{{{limit}}}"),
];
