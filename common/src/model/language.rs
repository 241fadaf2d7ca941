use serde::{Deserialize, Serialize};

/// Entry returned by `GET /languages` and shown in the language switcher.
///
/// `value` doubles as the URL segment of `/solutions/{language}` and as the
/// directory name below the backend's solutions root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub value: String,
    pub icon: String,
}

/// Static description of a supported language: how its files are named and
/// how its comments start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub name: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub extension: &'static str,
    pub comment_prefix: &'static str,
}

impl LanguageProfile {
    pub fn to_language(&self) -> Language {
        Language {
            name: self.name.to_string(),
            value: self.value.to_string(),
            icon: self.icon.to_string(),
        }
    }
}

pub const DEFAULT_LANGUAGE: &str = "python";

pub const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "Python",
        value: "python",
        icon: "🐍",
        extension: ".py",
        comment_prefix: "#",
    },
    LanguageProfile {
        name: "TypeScript",
        value: "typescript",
        icon: "🟦",
        extension: ".ts",
        comment_prefix: "//",
    },
    LanguageProfile {
        name: "C++",
        value: "c++",
        icon: "⚙️",
        extension: ".cpp",
        comment_prefix: "//",
    },
    LanguageProfile {
        name: "Rust",
        value: "rust",
        icon: "🦀",
        extension: ".rs",
        comment_prefix: "//",
    },
];

/// Looks up a profile by its `value`, ignoring ASCII case.
pub fn profile(value: &str) -> Option<&'static LanguageProfile> {
    PROFILES
        .iter()
        .find(|p| p.value.eq_ignore_ascii_case(value))
}

/// File extension for `value`; unknown languages fall back to Python's.
pub fn extension_for(value: &str) -> &'static str {
    profile(value).map_or(".py", |p| p.extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_lookup_ignores_case() {
        assert_eq!(profile("Rust").map(|p| p.extension), Some(".rs"));
        assert_eq!(profile("C++").map(|p| p.value), Some("c++"));
        assert!(profile("cobol").is_none());
    }

    #[test]
    fn unknown_language_uses_python_extension() {
        assert_eq!(extension_for("typescript"), ".ts");
        assert_eq!(extension_for("haskell"), ".py");
    }
}
