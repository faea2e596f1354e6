use anyhow::Result;
use fosterbook::core::cli_syntax::ALL_ADD_PREFIXES;
use fosterbook::domain::model::{Availability, Email, Name, Phone, MESSAGE_AVAILABILITY_REQUIRED};
use fosterbook::{AddCommand, AddCommandParser, BookError, CommandParser};

const VALID: &str = "n/Jane Doe p/98765432 e/jane@example.com a/1 Main St";

/// 測試完整輸入：所有欄位都與輸入一致
#[test]
fn test_full_input_round_trips_field_values() -> Result<()> {
    let parser = AddCommandParser::default();
    let command = parser.parse(
        "n/Jane Doe p/98765432 e/jane@example.com a/1 Main St t/friend an/Rex av/Available at/able.Dog",
    )?;
    let person = command.person();

    assert_eq!(person.name().as_str(), "Jane Doe");
    assert_eq!(person.phone().as_str(), "98765432");
    assert_eq!(person.email().as_str(), "jane@example.com");
    assert_eq!(person.address().as_str(), "1 Main St");
    assert_eq!(
        person.tags().iter().map(|t| t.as_str()).collect::<Vec<_>>(),
        vec!["friend"]
    );
    assert_eq!(person.animal_name().map(|n| n.as_str()), Some("Rex"));
    assert_eq!(person.availability(), Some(Availability::Available));
    assert_eq!(person.animal_type().map(|t| t.as_str()), Some("able.Dog"));
    Ok(())
}

/// 只有 availability 沒有動物欄位也合法
#[test]
fn test_availability_alone_is_allowed() -> Result<()> {
    let parser = AddCommandParser::default();
    let command = parser.parse(&format!("{} av/NotAvailable", VALID))?;
    assert_eq!(
        command.person().availability(),
        Some(Availability::NotAvailable)
    );
    assert!(command.person().animal_name().is_none());
    Ok(())
}

#[test]
fn test_each_missing_required_field_is_a_format_error() {
    let parser = AddCommandParser::default();
    let inputs = [
        "p/98765432 e/jane@example.com a/1 Main St",
        "n/Jane Doe e/jane@example.com a/1 Main St",
        "n/Jane Doe p/98765432 a/1 Main St",
        "n/Jane Doe p/98765432 e/jane@example.com",
        "",
    ];

    for input in inputs {
        let err = parser.parse(input).unwrap_err();
        assert!(
            matches!(err, BookError::InvalidCommandFormat { .. }),
            "expected format error for '{}', got {:?}",
            input,
            err
        );
        assert_eq!(
            err.to_string(),
            format!("Invalid command format! \n{}", AddCommand::MESSAGE_USAGE)
        );
    }
}

#[test]
fn test_non_empty_preamble_is_a_format_error() {
    let parser = AddCommandParser::default();
    let err = parser.parse(&format!("NonEmptyPreamble {}", VALID)).unwrap_err();
    assert!(matches!(err, BookError::InvalidCommandFormat { .. }));
}

#[test]
fn test_repeated_single_valued_fields_are_rejected() {
    let parser = AddCommandParser::default();
    let cases = [
        ("n/Amy", "n/"),
        ("p/11111111", "p/"),
        ("e/amy@example.com", "e/"),
        ("a/2 Side St", "a/"),
    ];

    for (extra, prefix) in cases {
        let err = parser.parse(&format!("{} {}", VALID, extra)).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Multiple values specified for the following single-valued field(s): {}",
                prefix
            )
        );
    }

    let err = parser
        .parse(&format!("{} n/Amy p/11111111 e/amy@example.com a/2 Side St", VALID))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Multiple values specified for the following single-valued field(s): n/ p/ e/ a/"
    );
}

#[test]
fn test_repeated_tags_are_allowed() -> Result<()> {
    let parser = AddCommandParser::default();
    let command = parser.parse(&format!("{} t/vet t/vet t/friend", VALID))?;
    assert_eq!(command.person().tags().len(), 2);
    Ok(())
}

#[test]
fn test_animal_fields_without_availability() {
    let parser = AddCommandParser::default();
    for extra in ["an/Rex", "at/able.Dog", "an/Rex at/able.Dog"] {
        let err = parser.parse(&format!("{} {}", VALID, extra)).unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_AVAILABILITY_REQUIRED);
        assert_eq!(
            err.to_string(),
            "Availability is required when providing animalName or animalType."
        );
    }
}

#[test]
fn test_tag_order_does_not_matter() -> Result<()> {
    let parser = AddCommandParser::default();
    let first = parser.parse(&format!("{} t/a t/b", VALID))?;
    let second = parser.parse(&format!("{} t/b t/a", VALID))?;
    assert_eq!(first.person().tags(), second.person().tags());
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_invalid_field_values_report_constraints() {
    let parser = AddCommandParser::default();
    let cases = [
        ("n/James& p/911 e/j@e.com a/Street", Name::MESSAGE_CONSTRAINTS),
        ("n/James p/911a e/j@e.com a/Street", Phone::MESSAGE_CONSTRAINTS),
        ("n/James p/911 e/bob!yahoo a/Street", Email::MESSAGE_CONSTRAINTS),
        ("n/James p/911 e/j@e.com a/Street an/R*x av/Available", Name::MESSAGE_CONSTRAINTS),
        ("n/James p/911 e/j@e.com a/Street av/Later", Availability::MESSAGE_CONSTRAINTS),
    ];

    for (input, expected) in cases {
        let err = parser.parse(input).unwrap_err();
        assert!(matches!(err, BookError::InvalidField { .. }));
        assert_eq!(err.to_string(), expected, "input: {}", input);
    }
}

/// 欄位依序解析：name 錯誤先於 phone 錯誤回報
#[test]
fn test_first_invalid_field_wins() {
    let parser = AddCommandParser::default();
    let err = parser
        .parse("n/James& p/911a e/bob!yahoo a/Street")
        .unwrap_err();
    assert_eq!(err.to_string(), Name::MESSAGE_CONSTRAINTS);
}

#[test]
fn test_spec_scenarios() {
    let parser = AddCommandParser::default();

    let ok = parser.parse("n/Jane p/123 e/j@e.com a/Street").unwrap();
    assert!(ok.person().animal_name().is_none());
    assert!(ok.person().availability().is_none());
    assert!(ok.person().animal_type().is_none());

    let dependency = parser
        .parse("n/Jane p/123 e/j@e.com a/Street an/Rex")
        .unwrap_err();
    assert_eq!(dependency.to_string(), MESSAGE_AVAILABILITY_REQUIRED);

    let missing = parser.parse("p/123 e/j@e.com a/Street").unwrap_err();
    assert!(missing.to_string().contains(AddCommand::MESSAGE_USAGE));
}

#[test]
fn test_parser_recognises_all_eight_prefixes() {
    let prefixes: Vec<&str> = ALL_ADD_PREFIXES.iter().map(|p| p.as_str()).collect();
    assert_eq!(
        prefixes,
        vec!["n/", "p/", "e/", "a/", "t/", "an/", "av/", "at/"]
    );
}
