//! Test utilities for mock generation.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use mockgen_core::{Content, Encoding, emit};

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (line endings differ)\n");
        }
        panic!("Content mismatch:\n{}", diff);
    }
}

/// Serialize content through the streaming writer into memory.
pub fn render_to_string(content: &Content) -> String {
    let mut out = Vec::new();
    emit(content, &mut out, Encoding::Utf8).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("emitted content is UTF-8")
}
