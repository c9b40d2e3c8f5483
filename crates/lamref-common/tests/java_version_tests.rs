use super::*;

#[test]
fn test_parse_plain_major() {
    assert_eq!("8".parse::<JavaVersion>(), Ok(JavaVersion::new(8)));
    assert_eq!("11".parse::<JavaVersion>(), Ok(JavaVersion::new(11)));
    assert_eq!("17.0.2".parse::<JavaVersion>(), Ok(JavaVersion::new(17)));
}

#[test]
fn test_parse_legacy_one_dot_form() {
    assert_eq!("1.7".parse::<JavaVersion>(), Ok(JavaVersion::new(7)));
    assert_eq!("1.8".parse::<JavaVersion>(), Ok(JavaVersion::new(8)));
    assert_eq!(" 1.8 ".parse::<JavaVersion>(), Ok(JavaVersion::new(8)));
}

#[test]
fn test_parse_rejects_garbage() {
    for input in ["", "java8", "1", "1.x", "0", "-3"] {
        assert!(
            input.parse::<JavaVersion>().is_err(),
            "expected '{input}' to be rejected"
        );
    }
    let err = "eight".parse::<JavaVersion>().unwrap_err();
    assert_eq!(err.to_string(), "invalid Java source version 'eight'");
}

#[test]
fn test_java8_compatibility() {
    assert!(JavaVersion::NOT_SET.is_java8_compatible());
    assert!(JavaVersion::new(8).is_java8_compatible());
    assert!(JavaVersion::new(21).is_java8_compatible());
    assert!(!JavaVersion::new(7).is_java8_compatible());
    assert!(JavaVersion::new(7).is_java7_compatible());
    assert!(!JavaVersion::new(6).is_java7_compatible());
}

#[test]
fn test_compatibility_message_only_when_not_set() {
    assert_eq!(
        JavaVersion::NOT_SET.java8_compatibility_message(),
        " (sourceVersion not set. Assuming 8 or greater.)"
    );
    assert_eq!(JavaVersion::new(8).java8_compatibility_message(), "");
    assert_eq!(
        JavaVersion::NOT_SET.java7_compatibility_message(),
        " (sourceVersion not set. Assuming 7 or greater.)"
    );
    assert_eq!(JavaVersion::new(11).java7_compatibility_message(), "");
}

#[test]
fn test_default_is_not_set() {
    assert!(JavaVersion::default().is_not_set());
    assert_eq!(JavaVersion::default().to_string(), "<not set>");
    assert_eq!(JavaVersion::new(8).to_string(), "8");
}

#[test]
fn test_deserialize_from_json_string() {
    let version: JavaVersion = serde_json::from_str("\"1.8\"").unwrap();
    assert_eq!(version.major(), Some(8));
    assert!(serde_json::from_str::<JavaVersion>("\"latest\"").is_err());
}
