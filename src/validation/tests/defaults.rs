use crate::validation::validate_default;

/// validate_default() test case: key + value → expected ok flag.
macro_rules! default_test {
    ($name:ident, key: $key:expr, value: $value:expr, expect: $ok:expr) => {
        #[test]
        fn $name() {
            let result = validate_default($key, $value);
            assert_eq!(result.ok, $ok, "{:?}", result);
            assert_eq!(result.reason.is_none(), $ok);
        }
    };
}

// ---- key presence ----

default_test!(empty_key_invalid,               key: "",                   value: "",          expect: false);
default_test!(whitespace_key_invalid,          key: "   ",                value: "x",         expect: false);

// ---- bool ----

default_test!(bool_bare_flag_valid,            key: "env_reset",          value: "",          expect: true);
default_test!(bool_true_valid,                 key: "use_pty",            value: "true",      expect: true);
default_test!(bool_false_valid,                key: "mail_badpass",       value: "false",     expect: true);
default_test!(bool_yes_invalid,                key: "requiretty",         value: "yes",       expect: false);
default_test!(bool_uppercase_invalid,          key: "env_reset",          value: "TRUE",      expect: false);

// ---- enum ----

default_test!(enum_once_valid,                 key: "lecture",            value: "once",      expect: true);
default_test!(enum_never_valid,                key: "lecture",            value: "never",     expect: true);
default_test!(enum_sometimes_invalid,          key: "lecture",            value: "sometimes", expect: false);
default_test!(enum_empty_invalid,              key: "lecture",            value: "",          expect: false);

// ---- int ----

default_test!(int_in_range_valid,              key: "timestamp_timeout",  value: "5",         expect: true);
default_test!(int_lower_bound_valid,           key: "timestamp_timeout",  value: "-1",        expect: true);
default_test!(int_upper_bound_valid,           key: "timestamp_timeout",  value: "999",       expect: true);
default_test!(int_below_range_invalid,         key: "timestamp_timeout",  value: "-5",        expect: false);
default_test!(int_above_range_invalid,         key: "timestamp_timeout",  value: "1000",      expect: false);
default_test!(int_non_numeric_invalid,         key: "timestamp_timeout",  value: "abc",       expect: false);
default_test!(int_fraction_invalid,            key: "timestamp_timeout",  value: "1.5",       expect: false);
default_test!(int_empty_invalid,               key: "timestamp_timeout",  value: "",          expect: false);
default_test!(int_huge_invalid,                key: "timestamp_timeout",  value: "99999999999999999999", expect: false);

// ---- path / text ----

default_test!(path_any_value_valid,            key: "secure_path",        value: "\"/usr/bin\"", expect: true);
default_test!(path_empty_valid,                key: "secure_path",        value: "",          expect: true);
default_test!(unknown_key_any_value_valid,     key: "env_keep",           value: "+= \"HOME\"", expect: true);

#[test]
fn surrounding_whitespace_is_ignored() {
    assert!(validate_default("  timestamp_timeout ", " 15 ").ok);
}

#[test]
fn int_reason_names_the_key() {
    let result = validate_default("timestamp_timeout", "abc");
    assert!(result.reason.unwrap().contains("timestamp_timeout"));
}

#[test]
fn enum_reason_lists_choices() {
    let result = validate_default("lecture", "sometimes");
    assert!(result.reason.unwrap().contains("always, once, never"));
}
