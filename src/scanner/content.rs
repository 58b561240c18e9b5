//! Positional match computation
//!
//! Pure helpers shared by every scan specialization: mapping a byte offset to
//! a 1-based line/column pair and building the bounded display snippet.
//! Identical content and rules always produce identical match positions.

/// Line number (1-based) and column (1-based offset from the preceding line
/// break) for a match starting at `start`.
pub fn line_and_column(content: &str, start: usize) -> (usize, usize) {
    let before = &content[..start.min(content.len())];
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(idx) => start - idx,
        None => start + 1,
    };
    (line, column)
}

/// Bounded snippet of ±`CONTEXT` lines around `line_number`, with 4-wide line
/// numbers and a `>>>` marker on the hit line.
pub fn code_snippet(lines: &[&str], line_number: usize) -> String {
    const CONTEXT: usize = 2;

    let start = line_number.saturating_sub(CONTEXT + 1);
    let end = (line_number + CONTEXT).min(lines.len());

    (start..end)
        .map(|i| {
            let marker = if i + 1 == line_number { ">>> " } else { "    " };
            format!("{:4}{}{}", i + 1, marker, lines[i].trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_column_first_line() {
        let content = "os.system(cmd)";
        assert_eq!(line_and_column(content, 0), (1, 1));
        assert_eq!(line_and_column(content, 3), (1, 4));
    }

    #[test]
    fn test_line_and_column_later_lines() {
        let content = "line one\nline two\nline three";
        // 'l' of "line two" is at byte 9, directly after the newline at 8
        assert_eq!(line_and_column(content, 9), (2, 1));
        // 't' of "two" at byte 14
        assert_eq!(line_and_column(content, 14), (2, 6));
        assert_eq!(line_and_column(content, 18), (3, 1));
    }

    #[test]
    fn test_code_snippet_marks_hit_line() {
        let lines: Vec<&str> = vec!["a", "b", "c", "d", "e", "f"];
        let snippet = code_snippet(&lines, 3);
        let rendered: Vec<&str> = snippet.lines().collect();
        assert_eq!(rendered.len(), 5); // lines 1..=5
        assert!(rendered[2].contains(">>> c"));
        assert!(rendered[0].contains("   1    a"));
    }

    #[test]
    fn test_code_snippet_clamps_at_edges() {
        let lines: Vec<&str> = vec!["only", "two"];
        let snippet = code_snippet(&lines, 1);
        assert_eq!(snippet.lines().count(), 2);
        assert!(snippet.lines().next().unwrap().contains(">>> only"));
    }
}
