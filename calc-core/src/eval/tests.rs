use std::path::PathBuf;

use pretty_assertions::assert_eq;

use crate::{
    parser::prelude::ParseErrorType,
    utils::prelude::Error
};
use super::prelude::{eval_file, evaluate, evaluate_with, format_outcome, format_significant, format_value, EvalOptions};

fn run(input: &str) -> String {
    let options = EvalOptions::default();

    format_outcome(&evaluate(input.as_bytes()), &options)
}

#[test]
fn test_outcomes() {
    let cases = vec![
        ("1 + 2 * 3", "7"),
        ("(1 + 2) * 3", "9"),
        ("2**3**2", "512"),
        ("10 / 0", "ERROR:4"),
        ("0 ** -1", "ERROR:3"),
        ("2 + ", "ERROR:5"),
        ("# comment\n42", "42"),
        ("", "ERROR:1"),
        ("7 / 2", "3.5"),
        ("1 / 3", "0.333333333333333"),
        ("0.1 + 0.2", "0.3"),
        ("2 ** 0.5", "1.4142135623731"),
        ("-7 / 2", "-3.5"),
    ];

    for (input, expected) in cases {
        assert_eq!(run(input), expected, "evaluating {input:?}");
    }
}

#[test]
fn test_format_integers() {
    let options = EvalOptions::default();

    assert_eq!(format_value(42.0, &options), "42");
    assert_eq!(format_value(-3.0, &options), "-3");
    assert_eq!(format_value(2.9999999999999996, &options), "3");
    assert_eq!(format_value(-1e-13, &options), "0");
    assert_eq!(format_value(-0.0, &options), "0");
    assert_eq!(format_value(1.5e20, &options), "150000000000000000000");
}

#[test]
fn test_format_fractions() {
    let options = EvalOptions::default();

    assert_eq!(format_value(123456.789, &options), "123456.789");
    assert_eq!(format_value(1.5e-7, &options), "1.5e-07");
    assert_eq!(format_value(0.0001, &options), "0.0001");
    assert_eq!(format_value(1e15 + 0.5, &options), "1e+15");
    assert_eq!(format_value(-2.25, &options), "-2.25");
}

#[test]
fn test_format_significant_digits() {
    assert_eq!(format_significant(3.14159, 3), "3.14");
    assert_eq!(format_significant(1234.5, 3), "1.23e+03");
    assert_eq!(format_significant(9.9999, 2), "10");
    assert_eq!(format_significant(0.5, 0), "0.5");
}

#[test]
fn test_format_non_finite() {
    let options = EvalOptions::default();

    assert_eq!(run("10 ** 400"), "inf");
    assert_eq!(run("-10 ** 401"), "-inf");
    assert_eq!(format_value(f64::NAN, &options), "nan");
}

#[test]
fn test_integer_round_trip() {
    let options = EvalOptions::default();
    let values = [0.0, 1.0, -1.0, 42.0, 65536.0, -123456789.0, 999999999999999.0, -999999999999999.0];

    for value in values {
        let rendered = format_value(value, &options);
        let reparsed = evaluate(rendered.as_bytes()).expect("rendered value parses");

        assert!((reparsed - value).abs() < 1e-12, "{value} rendered as {rendered} parsed back as {reparsed}");
    }
}

#[test]
fn test_idempotent() {
    for input in ["1 + 2 * 3", "10 / 0", "(1 + 2", "2 ** 0.5"] {
        assert_eq!(evaluate(input.as_bytes()), evaluate(input.as_bytes()));
    }
}

#[test]
fn test_tolerances() {
    let src = b"1 / 1e-16";

    assert_eq!(format_outcome(&evaluate(src), &EvalOptions::default()), "ERROR:3");
    assert!(evaluate_with(src, &EvalOptions::exact()).is_ok());

    let loose = EvalOptions { integer_tolerance: 0.01, ..EvalOptions::default() };
    assert_eq!(format_outcome(&evaluate_with(b"2.001", &loose), &loose), "2");
}

#[test]
fn test_eval_file() -> Result<(), Error> {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("expression.txt");
    std::fs::write(&path, "# powers of two\n2 ** 10\n").expect("write input");

    assert_eq!(eval_file(path, &EvalOptions::default())?, 1024.0);

    Ok(())
}

#[test]
fn test_eval_file_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.txt");
    std::fs::write(&path, "10 / 0").expect("write input");

    let err = eval_file(path.clone(), &EvalOptions::default()).expect_err("division by zero");

    match &err {
        Error::Parse { path: err_path, error, .. } => {
            assert_eq!(err_path, &path);
            assert_eq!(error.error, ParseErrorType::DivisionByZero);
            assert_eq!(error.position(), 4);
        },
        other => panic!("Expected a parse error, got {other:?}"),
    }

    let pretty = err.pretty_string();
    assert!(pretty.contains("Arithmetic error at position 4"), "{pretty}");
    assert!(pretty.contains("Division by zero"), "{pretty}");
}

#[test]
fn test_eval_file_missing() {
    let path = PathBuf::from("definitely/not/here.txt");

    let err = eval_file(path.clone(), &EvalOptions::default()).expect_err("missing file");

    assert_eq!(err, Error::StdIo { path, err: std::io::ErrorKind::NotFound });
    assert!(err.pretty_string().contains("Standard IO error"));
}

#[test]
fn test_non_utf8_diagnostic_does_not_panic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bytes.txt");
    std::fs::write(&path, b"1 + \xff\xfe").expect("write input");

    let err = eval_file(path, &EvalOptions::default()).expect_err("invalid byte");

    assert!(err.pretty_string().contains("Lexical error at position 5"));
}

#[test]
fn test_non_utf8_diagnostic_falls_back_to_title() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("latin1.txt");
    std::fs::write(&path, b"# \xff\n1/0").expect("write input");

    let err = eval_file(path, &EvalOptions::default()).expect_err("division by zero");
    let pretty = err.pretty_string();

    assert!(pretty.contains("error: Arithmetic error at position 6"), "{pretty}");
    assert!(pretty.contains("Division by zero"), "{pretty}");
    assert!(!pretty.contains("\u{FFFD}"), "{pretty}");
}
