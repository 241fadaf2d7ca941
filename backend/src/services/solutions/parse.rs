//! Splits a solution source file into description, code and complexity.
//!
//! Layout of a solution file:
//!
//! ```text
//! # Two Sum                      <- description: comments before the first code line
//! # https://leetcode.com/...
//!
//! def two_sum(nums, target):     <- code: first to last non-comment line
//!     ...
//!
//! # Time: O(n)                   <- complexity: comments after the last code line
//! ```
//!
//! A file without code is all description.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSolution {
    pub description: String,
    pub code: String,
    pub complexity: String,
}

pub fn parse_solution(source: &str, comment_prefix: &str) -> ParsedSolution {
    let lines: Vec<&str> = source.lines().collect();
    let is_comment = |line: &str| line.trim_start().starts_with(comment_prefix);
    let is_code = |line: &str| !line.trim().is_empty() && !is_comment(line);

    let Some(first_code) = lines.iter().position(|l| is_code(l)) else {
        return ParsedSolution {
            description: comment_text(&lines, comment_prefix),
            ..ParsedSolution::default()
        };
    };
    let last_code = lines.iter().rposition(|l| is_code(l)).unwrap_or(first_code);

    ParsedSolution {
        description: comment_text(&lines[..first_code], comment_prefix),
        code: lines[first_code..=last_code].join("\n"),
        complexity: comment_text(&lines[last_code + 1..], comment_prefix),
    }
}

/// Comment lines of `lines` with their markers removed, one per line.
fn comment_text(lines: &[&str], comment_prefix: &str) -> String {
    let marker = comment_prefix.chars().next().unwrap_or('#');
    lines
        .iter()
        .map(|l| l.trim_start())
        .filter(|l| l.starts_with(comment_prefix))
        .map(|l| l.trim_start_matches(marker).trim_start_matches(' '))
        .collect::<Vec<_>>()
        .join("\n")
}

/// First `http://` or `https://` link found in `text`.
pub fn first_link(text: &str) -> Option<String> {
    text.split_whitespace().find_map(|word| {
        let start = word.find("https://").or_else(|| word.find("http://"))?;
        Some(word[start..].trim_end_matches([')', ']', ',', '.', '>']).to_string())
    })
}
