use crate::integrations::{error::IntegrationError, format::Format, validator::ArgsValidator};

#[test]
fn accept_positive_integers() {
    assert_eq!(ArgsValidator::parse_positive("5").unwrap(), 5);
    assert_eq!(ArgsValidator::parse_positive("1").unwrap(), 1);
    assert_eq!(ArgsValidator::parse_positive("+7").unwrap(), 7);
    assert_eq!(ArgsValidator::parse_positive("4294967295").unwrap(), u32::MAX);
}

#[test]
fn reject_zero() {
    match ArgsValidator::parse_positive("0") {
        Err(IntegrationError::InvalidArgument(msg)) => {
            assert_eq!(msg, "0 is an invalid positive int value")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn reject_negative() {
    match ArgsValidator::parse_positive("-3") {
        Err(IntegrationError::InvalidArgument(msg)) => {
            assert_eq!(msg, "-3 is an invalid positive int value")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn reject_non_integers() {
    for value in ["abc", "", "1.5", "4 ", " 4", "0x10"] {
        match ArgsValidator::parse_positive(value) {
            Err(IntegrationError::InvalidArgument(msg)) => {
                assert_eq!(msg, format!("{value} is not a valid integer"))
            }
            other => panic!("unexpected result for {:?}: {:?}", value, other),
        }
    }
}

#[test]
fn reject_out_of_range() {
    assert!(matches!(
        ArgsValidator::parse_positive("4294967296"),
        Err(IntegrationError::InvalidArgument(_))
    ));
}

#[test]
fn multi_line_requires_lines() {
    match ArgsValidator::validate_lines(Format::MultiLine, None) {
        Err(IntegrationError::MissingArgument(msg)) => {
            assert_eq!(msg, "Argument -l/--lines is required for multi-line format")
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(ArgsValidator::validate_lines(Format::MultiLine, Some(4)).is_ok());
}

#[test]
fn other_formats_do_not_require_lines() {
    for format in Format::all().iter().filter(|f| !f.is_multi_line()) {
        assert!(ArgsValidator::validate_lines(*format, None).is_ok());
        assert!(ArgsValidator::validate_lines(*format, Some(2)).is_ok());
    }
}
