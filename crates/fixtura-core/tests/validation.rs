use fixtura_core::{
    Error, is_valid_email, validate_age_range, validate_non_empty_string, validate_non_negative,
    validate_positive_integer, validate_range,
};

#[test]
fn positive_integer_accepts_positive_values() {
    assert!(validate_positive_integer(1, "count").is_ok());
    assert!(validate_positive_integer(10_000, "count").is_ok());
}

#[test]
fn positive_integer_rejects_zero_and_negatives() {
    for value in [0, -1, -100] {
        let result = validate_positive_integer(value, "count");
        let Err(Error::Validation(message)) = result else {
            panic!("expected validation error for {value}");
        };
        assert!(message.contains("count"));
    }
}

#[test]
fn age_range_rejects_inverted_bounds_naming_both() {
    let Err(Error::Validation(message)) = validate_age_range(30, 20) else {
        panic!("expected validation error");
    };
    assert!(message.contains("30"));
    assert!(message.contains("20"));
}

#[test]
fn age_range_rejects_negative_and_excessive_ages() {
    assert!(validate_age_range(-1, 50).is_err());
    assert!(validate_age_range(0, -5).is_err());
    assert!(validate_age_range(18, 151).is_err());
    assert!(validate_age_range(18, 150).is_ok());
    assert!(validate_age_range(0, 0).is_ok());
}

#[test]
fn email_shape_check() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("a.b+c@sub.domain.org"));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("user@domain"));
    assert!(!is_valid_email("user name@example.com"));
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn non_negative_and_range_guards_name_the_parameter() {
    let Err(Error::Validation(message)) = validate_non_negative(-0.5, "price") else {
        panic!("expected validation error");
    };
    assert!(message.contains("price"));

    let Err(Error::Validation(message)) = validate_range(10.0, 0.0, 5.0, "rating") else {
        panic!("expected validation error");
    };
    assert!(message.contains("rating"));
    assert!(validate_range(3.0, 0.0, 5.0, "rating").is_ok());
}

#[test]
fn non_empty_string_rejects_whitespace() {
    assert!(validate_non_empty_string("name", "field").is_ok());
    assert!(validate_non_empty_string("   ", "field").is_err());
    assert!(validate_non_empty_string("", "field").is_err());
}
