//! Format checkers
//!
//! Patterns run in ASCII mode (`(?-u)`), so `\d` and `\w` never match
//! non-ASCII digits or letters.

use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?-u)^[\w!#$%&'*+/=?^_`{|}~-]+(?:\.[\w!#$%&'*+/=?^_`{|}~-]+)*@(?:\w(?:[\w-]*\w)?\.)+[a-zA-Z0-9](?:[\w-]*\w)?$"
    ).unwrap()
});

static IPV4_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?-u)^((2[0-4]\d|25[0-5]|[01]?\d\d?)\.){3}(2[0-4]\d|25[0-5]|[01]?\d\d?)$").unwrap()
});

// Mainland China mobile numbers by carrier segment, optional +86/86 prefix.
static MOBILE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?-u)^(?:\+?86)?1(?:3\d{3}|5[0-35-9]\d{2}|8\d{3}|7(?:[0-35-9]\d{2}|4(?:0\d|1[0-2]|9\d))|9[0-35-9]\d{2}|6[2567]\d{2}|4(?:(?:10|4[01])\d{3}|[68]\d{4}|[579]\d{2}))\d{6}$"
    ).unwrap()
});

static TEL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?-u)^(0\d{2,3}-?)?\d{7,8}$").unwrap());

static ID_CARD_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?-u)(^\d{15}$)|(^\d{17}[0-9X]$)").unwrap());

crate::checker! {
    /// Email address: `local@label.label.tld`.
    pub Email => "email";
    pattern(EMAIL_REGEX);
}

crate::checker! {
    /// Dotted-quad IPv4 address, each octet 0-255.
    pub Ipv4 => "ipv4";
    pattern(IPV4_REGEX);
}

crate::checker! {
    /// Mainland China mobile number.
    pub Mobile => "mobile";
    pattern(MOBILE_REGEX);
}

crate::checker! {
    /// Landline number with optional area code: `010-12345678`, `26088888`.
    pub Tel => "tel";
    pattern(TEL_REGEX);
}

crate::checker! {
    /// Either a [`Tel`] or a [`Mobile`] number.
    pub Phone => "phone";
    rule(text) { Tel::matches(text) || Mobile::matches(text) }
}

crate::checker! {
    /// Resident ID card number: 15 digits, or 17 digits and a digit or `X`.
    pub IdCard => "idcard";
    pattern(ID_CARD_REGEX);
}

// ============================================================================
// TESTS
// ============================================================================
