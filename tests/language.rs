use std::fs;

use intcalc::{ErrorKind, evaluate_line};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_calc_lines(&content) {
            count += 1;
            let (source, expected) = line.rsplit_once(" => ")
                                         .unwrap_or_else(|| panic!("Malformed example in {path:?}: {line}"));
            let result = evaluate_line(source);

            match parse_expectation(expected) {
                Expectation::Value(value) => assert_eq!(result, Ok(value),
                                                        "example {source:?} in {path:?}"),
                Expectation::Failure(kind) => {
                    let err = result.expect_err(&format!("example {source:?} in {path:?} should fail"));
                    assert_eq!(err.kind(), kind, "example {source:?} in {path:?}: {err}");
                },
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

enum Expectation {
    Value(i64),
    Failure(ErrorKind),
}

fn parse_expectation(expected: &str) -> Expectation {
    match expected.trim() {
        "error(invalid-character)" => Expectation::Failure(ErrorKind::InvalidCharacter),
        "error(syntax)" => Expectation::Failure(ErrorKind::Syntax),
        "error(arithmetic)" => Expectation::Failure(ErrorKind::Arithmetic),
        other => Expectation::Value(other.parse()
                                         .unwrap_or_else(|_| panic!("Bad expectation: {other}"))),
    }
}

fn extract_calc_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}

fn assert_value(src: &str, expected: i64) {
    match evaluate_line(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate_line(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "evaluating {src:?}: {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", 14);
    assert_value("(2+3)*4", 20);
    assert_value("2*3+4*5", 26);
    assert_value("((((7))))", 7);
    assert_value("8 / (3 - 1) * 2", 8);
}

#[test]
fn binary_operators_group_from_the_left() {
    assert_value("10-2-3", 5);
    assert_value("64/4/2", 8);
    assert_value("10-(2-3)", 11);
    assert_value("1-2+3", 2);
}

#[test]
fn unary_chains() {
    assert_value("--5", 5);
    assert_value("---5", -5);
    assert_value("-(2+3)", -5);
    assert_value("+7", 7);
    assert_value("3--2", 5);
    assert_value("3-+-2", 5);
}

#[test]
fn division_rounds_toward_negative_infinity() {
    assert_value("-7/2", -4);
    assert_value("7/-2", -4);
    assert_value("-7/-2", 3);
    assert_value("7/2", 3);
    assert_value("-6/3", -2);
    assert_value("0/-5", 0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate_line("1+2"), evaluate_line("  1  +  2  "));
    assert_value("\t12 *\t(3 + 4) ", 84);
}

#[test]
fn multi_digit_literals() {
    assert_value("1234", 1234);
    assert_value("9223372036854775807", i64::MAX);
    assert_value("-9223372036854775807 - 1", i64::MIN);
}

#[test]
fn malformed_input_fails() {
    assert_failure("(1+2", ErrorKind::Syntax);
    assert_failure("1+", ErrorKind::Syntax);
    assert_failure("1+2)", ErrorKind::Syntax);
    assert_failure("*3", ErrorKind::Syntax);
    assert_failure("", ErrorKind::Syntax);
    assert_failure("1+@", ErrorKind::InvalidCharacter);
    assert_failure("x", ErrorKind::InvalidCharacter);
    assert_failure("1.5", ErrorKind::InvalidCharacter);
}

#[test]
fn invalid_character_is_reported_before_later_syntax_errors() {
    let err = evaluate_line("1+@").unwrap_err();
    assert_eq!(err.to_string(), "Error at offset 2: Invalid character '@'.");
}

#[test]
fn arithmetic_failures() {
    assert_failure("5/0", ErrorKind::Arithmetic);
    assert_failure("0 * (1 / 0)", ErrorKind::Arithmetic);
    assert_failure("9223372036854775807 * 2", ErrorKind::Arithmetic);
    assert_failure("-(-9223372036854775807 - 1)", ErrorKind::Arithmetic);
    assert_failure("(-9223372036854775807 - 1) / -1", ErrorKind::Arithmetic);
}

#[test]
fn lines_are_independent() {
    assert_failure("(1", ErrorKind::Syntax);
    assert_value("1", 1);
    assert_failure("1/0", ErrorKind::Arithmetic);
    assert_value("2", 2);
}
