//! Tests for the public parsing and disclosure API.

use safeview::disclosure::{AuthOutcome, DisclosureConfig, DisclosureGate};
use safeview::records::{parse, ParseErrorReason};

fn non_blank(input: &str) -> usize {
    input.lines().filter(|l| !l.trim().is_empty()).count()
}

const MIXED: &[&str] = &[
    "",
    "ana;123",
    "ana;123\nluis;456",
    "ana;123;999\nluis;456",
    " ; \nluis;456",
    ";\n;;\n;;;\n",
    "\n\n  \n",
    "a;b\r\n\r\nc;d;e\r\n f ; g \r\n",
    "name only\nx;\n;y\nok;ok",
];

#[test]
fn every_non_blank_line_is_a_record_or_an_error() {
    for input in MIXED {
        let result = parse(input);
        assert_eq!(
            result.record_count() + result.error_count(),
            non_blank(input),
            "input {:?}",
            input
        );
    }
}

#[test]
fn field_count_decides_malformed_delimiter() {
    for input in MIXED {
        let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        let result = parse(input);
        for error in result.errors() {
            let line = lines[error.line_number - 1];
            let fields = line.split(';').count();
            if fields != 2 {
                assert_eq!(
                    error.reason,
                    ParseErrorReason::MalformedDelimiter { fields }
                );
            } else {
                assert_eq!(error.reason, ParseErrorReason::EmptyField);
            }
        }
    }
}

#[test]
fn parsing_twice_gives_the_same_result() {
    for input in MIXED {
        assert_eq!(parse(input), parse(input));
    }
}

#[test]
fn scenario_two_records() {
    let result = parse("ana;123\nluis;456");
    assert_eq!(result.record_count(), 2);
    assert_eq!(result.error_count(), 0);

    let gate = DisclosureGate::new(DisclosureConfig::with_secret("pw"));
    let denied = gate.disclose(result.records(), "wrong");
    assert_eq!(denied.view.lines(), vec!["- ana", "- luis"]);

    let granted = gate.disclose(result.records(), "pw");
    assert_eq!(granted.view.lines(), vec!["- ana | 123", "- luis | 456"]);
}

#[test]
fn scenario_extra_delimiter() {
    let result = parse("ana;123;999\nluis;456");
    assert_eq!(result.record_count(), 1);
    assert_eq!(result.records()[0].name(), "luis");
    assert_eq!(result.errors()[0].line_number, 1);
    assert!(matches!(
        result.errors()[0].reason,
        ParseErrorReason::MalformedDelimiter { .. }
    ));
}

#[test]
fn scenario_blank_fields() {
    let result = parse(" ; \nluis;456");
    assert_eq!(result.record_count(), 1);
    assert_eq!(result.errors()[0].line_number, 1);
    assert_eq!(result.errors()[0].reason, ParseErrorReason::EmptyField);
}

#[test]
fn mismatched_secret_never_renders_a_datum() {
    let result = parse("ana;datum-one\nluis;datum-two\nmia;datum-three");
    let gate = DisclosureGate::new(DisclosureConfig::with_secret("Secret"));

    for entered in ["", "secret", "Secret ", " Secret", "SECRET", "Secre"] {
        let shown = gate.disclose(result.records(), entered);
        assert_eq!(shown.outcome, AuthOutcome::Unauthorized);
        for line in shown.view.lines() {
            assert!(!line.contains("datum-"), "{:?} leaked {:?}", entered, line);
        }
    }
}

#[test]
fn matching_secret_pairs_each_datum_with_its_name() {
    let result = parse("ana;datum-one\nluis;datum-two");
    let gate = DisclosureGate::new(DisclosureConfig::with_secret("Secret"));
    let shown = gate.disclose(result.records(), "Secret");

    assert_eq!(shown.outcome, AuthOutcome::Authorized);
    for (record, line) in result.records().iter().zip(shown.view.lines()) {
        assert_eq!(line, format!("- {} | {}", record.name(), record.datum()));
    }
}
