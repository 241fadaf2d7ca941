//! Line-based syntax highlighting for the supported languages.
//!
//! A single alternation regex per language finds comments, string literals,
//! numbers and words; words in the keyword list become keywords and
//! everything else stays plain. Constructs that span lines (block comments,
//! triple-quoted strings) are only recognised when they open and close on the
//! same line.

use common::model::language::profile;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Keyword,
    Str,
    Number,
    Comment,
}

impl TokenKind {
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Plain => "tok-plain",
            TokenKind::Keyword => "tok-keyword",
            TokenKind::Str => "tok-string",
            TokenKind::Number => "tok-number",
            TokenKind::Comment => "tok-comment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

const DOUBLE_QUOTED: &str = r#""(?:[^"\\]|\\.)*""#;
const SINGLE_QUOTED: &str = r"'(?:[^'\\]|\\.)*'";
const CHAR_LITERAL: &str = r"'(?:[^'\\]|\\.)'";
const TEMPLATE: &str = r"`(?:[^`\\]|\\.)*`";

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "self", "try", "while", "with", "yield",
];

const TYPESCRIPT_KEYWORDS: &[&str] = &[
    "async", "await", "boolean", "break", "case", "catch", "class", "const", "continue",
    "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
    "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "number", "of", "private", "protected", "public", "readonly", "return", "string",
    "super", "switch", "this", "throw", "true", "try", "type", "typeof", "undefined", "var",
    "void", "while", "yield",
];

const CPP_KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "class", "const", "constexpr",
    "continue", "default", "delete", "do", "double", "else", "enum", "explicit", "false",
    "float", "for", "friend", "if", "include", "inline", "int", "long", "namespace", "new",
    "nullptr", "private", "protected", "public", "return", "short", "signed", "sizeof",
    "static", "std", "string", "struct", "switch", "template", "this", "throw", "true", "try",
    "typedef", "typename", "unsigned", "using", "vector", "virtual", "void", "while",
];

const RUST_KEYWORDS: &[&str] = &[
    "Err", "None", "Ok", "Option", "Result", "Self", "Some", "String", "Vec", "as", "async",
    "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while",
];

pub struct Highlighter {
    pattern: Regex,
    keywords: &'static [&'static str],
}

impl Highlighter {
    /// `None` for languages without a profile; their code is shown plain.
    pub fn for_language(language: &str) -> Option<Self> {
        let profile = profile(language)?;
        let (strings, keywords) = match profile.value {
            "python" => (format!("{}|{}", DOUBLE_QUOTED, SINGLE_QUOTED), PYTHON_KEYWORDS),
            "typescript" => (
                format!("{}|{}|{}", DOUBLE_QUOTED, SINGLE_QUOTED, TEMPLATE),
                TYPESCRIPT_KEYWORDS,
            ),
            "rust" => (format!("{}|{}", DOUBLE_QUOTED, CHAR_LITERAL), RUST_KEYWORDS),
            _ => (format!("{}|{}", DOUBLE_QUOTED, CHAR_LITERAL), CPP_KEYWORDS),
        };

        let mut comment = format!("{}.*$", regex::escape(profile.comment_prefix));
        if profile.comment_prefix == "//" {
            comment = format!(r"{}|/\*.*?\*/", comment);
        }
        let pattern = Regex::new(&format!(
            r"(?P<comment>{})|(?P<string>{})|(?P<number>\b\d+(?:\.\d+)?\b)|(?P<word>[A-Za-z_][A-Za-z0-9_]*)",
            comment, strings
        ))
        .ok()?;

        Some(Self { pattern, keywords })
    }

    /// Splits one line into tokens covering it exactly.
    pub fn tokens<'a>(&self, line: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut plain_from = 0;

        for caps in self.pattern.captures_iter(line) {
            let Some(m) = caps.get(0) else { continue };
            let kind = if caps.name("comment").is_some() {
                TokenKind::Comment
            } else if caps.name("string").is_some() {
                TokenKind::Str
            } else if caps.name("number").is_some() {
                TokenKind::Number
            } else if self.keywords.contains(&m.as_str()) {
                TokenKind::Keyword
            } else {
                continue;
            };

            if plain_from < m.start() {
                tokens.push(Token {
                    kind: TokenKind::Plain,
                    text: &line[plain_from..m.start()],
                });
            }
            tokens.push(Token {
                kind,
                text: m.as_str(),
            });
            plain_from = m.end();
        }

        if plain_from < line.len() {
            tokens.push(Token {
                kind: TokenKind::Plain,
                text: &line[plain_from..],
            });
        }
        tokens
    }
}
