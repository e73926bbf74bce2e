use console::Style;
use dissimilar::{Chunk, diff};
use std::fmt::Write;

/// Generates a colored diff between expected and captured lines
pub fn get_line_diff(expected: &[String], actual: &[String]) -> String {
    let expected_str = expected.join("\n");
    let actual_str = actual.join("\n");

    let mut output = String::new();
    let _ = writeln!(output, "Diff (Expected - / Actual +):");

    for chunk in diff(&expected_str, &actual_str) {
        let (style, text) = match chunk {
            Chunk::Equal(text) => (Style::new().dim(), text),
            Chunk::Delete(text) => (Style::new().red(), text),
            Chunk::Insert(text) => (Style::new().green(), text),
        };
        let _ = write!(output, "{}", style.apply_to(text));
    }

    output
}
