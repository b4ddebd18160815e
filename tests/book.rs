use std::fs::{self};

use fermi::{config::EvaluationOptions, evaluate_expression_with_steps};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let options = EvaluationOptions::default().seeded(2024);
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_example_lines(&content) {
            count += 1;
            let (expression, expected) = match line.split_once("=>") {
                Some((expression, expected)) => (expression.trim(), Some(expected.trim())),
                None => (line.trim(), None),
            };

            let outcome = evaluate_expression_with_steps(expression, 1_000, &options)
                .unwrap_or_else(|e| panic!("Example '{expression}' in {path:?} failed: {e}"));
            let display = outcome.result.map(|r| r.display).unwrap_or_default();

            if let Some(expected) = expected {
                assert_eq!(display, expected, "Example '{expression}' in {path:?}");
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_example_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```fermi") {
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
