use std::fs::{self};

use exprtree::{get_result, interpreter::parser::ParenMatching};
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

        for (source, expected) in extract_examples(&content) {
            count += 1;
            match get_result(&source, ParenMatching::Balanced) {
                Ok(value) => assert_eq!(value, expected, "Example `{source}` in {path:?}"),
                Err(e) => panic!("Example `{source}` in {path:?} failed:\nError: {e}"),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects the `expression => value` lines of every exprtree code block.
fn extract_examples(content: &str) -> Vec<(String, i64)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```exprtree") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((source, expected)) = line.rsplit_once("=>") {
            let expected = expected.trim()
                                   .parse()
                                   .unwrap_or_else(|e| panic!("Bad expected value in `{line}`: {e}"));
            examples.push((source.to_string(), expected));
        }
    }

    examples
}

fn assert_value(src: &str, expected: i64) {
    match get_result(src, ParenMatching::Balanced) {
        Ok(value) => assert_eq!(value, expected, "Expression `{src}`"),
        Err(e) => panic!("Expression `{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src, ParenMatching::Balanced).is_ok() {
        panic!("Expression `{src}` succeeded but was expected to fail")
    }
}

#[test]
fn single_level_arithmetic() {
    for (a, b) in [(0, 0), (1, 2), (10, 3), (3, 10), (123_456, 654_321)] {
        assert_value(&format!("{a}+{b}"), a + b);
        assert_value(&format!("{a}-{b}"), a - b);
    }
}

#[test]
fn seed_scenario() {
    assert_value("(10+2)-(22-99)", 89);
}

#[test]
fn first_closing_matching_on_simple_groups() {
    assert_eq!(get_result("(10+2)-(22-99)", ParenMatching::FirstClosing).unwrap(), 89);
}

#[test]
fn first_closing_matching_rejects_nested_groups() {
    assert!(get_result("((1+2)-3)", ParenMatching::FirstClosing).is_err());
}

#[test]
fn malformed_input() {
    assert_failure("");
    assert_failure("abc");
    assert_failure("()");
    assert_failure("(1+2");
    assert_failure("1+2)");
    assert_failure("1 2");
    assert_failure("1+");
    assert_failure("1+2+3");
    assert_failure("99999999999999999999");
    assert_failure(&format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000)));
}

#[test]
fn overflow_is_an_error() {
    assert_failure("9223372036854775807+1");
    assert_failure("(0-9223372036854775807)-2");
}
