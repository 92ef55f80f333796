use std::fmt;

use serde::{Deserialize, Serialize};

/// A language the execution-output analysis knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    C,
    Cpp,
    Java,
    Csharp,
    Rust,
    Go,
    Shell,
    Sql,
    Mongodb,
    Swift,
    Ruby,
    Typescript,
    Dart,
    Kotlin,
    Perl,
    Scala,
    Julia,
}

/// What a snippet in the language is: decides how "output" is described.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageKind {
    /// Compiled or interpreted programs that print to stdout.
    Program,
    /// Shell scripts.
    Script,
    /// Database queries that return rows or documents.
    Query,
}

impl Language {
    pub const ALL: [Language; 19] = [
        Language::Python,
        Language::Javascript,
        Language::C,
        Language::Cpp,
        Language::Java,
        Language::Csharp,
        Language::Rust,
        Language::Go,
        Language::Shell,
        Language::Sql,
        Language::Mongodb,
        Language::Swift,
        Language::Ruby,
        Language::Typescript,
        Language::Dart,
        Language::Kotlin,
        Language::Perl,
        Language::Scala,
        Language::Julia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Csharp => "csharp",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Shell => "shell",
            Language::Sql => "sql",
            Language::Mongodb => "mongodb",
            Language::Swift => "swift",
            Language::Ruby => "ruby",
            Language::Typescript => "typescript",
            Language::Dart => "dart",
            Language::Kotlin => "kotlin",
            Language::Perl => "perl",
            Language::Scala => "scala",
            Language::Julia => "julia",
        }
    }

    /// Parse a wire slug. Matching is exact: slugs are lowercase.
    pub fn parse_str(s: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|l| l.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Javascript => "JavaScript",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::Csharp => "C#",
            Language::Rust => "Rust",
            Language::Go => "Go",
            Language::Shell => "Shell",
            Language::Sql => "SQL",
            Language::Mongodb => "MongoDB",
            Language::Swift => "Swift",
            Language::Ruby => "Ruby",
            Language::Typescript => "TypeScript",
            Language::Dart => "Dart",
            Language::Kotlin => "Kotlin",
            Language::Perl => "Perl",
            Language::Scala => "Scala",
            Language::Julia => "Julia",
        }
    }

    pub fn kind(&self) -> LanguageKind {
        match self {
            Language::Shell => LanguageKind::Script,
            Language::Sql | Language::Mongodb => LanguageKind::Query,
            _ => LanguageKind::Program,
        }
    }

    /// The tool whose diagnostics the model should imitate for this language.
    pub fn tool(&self) -> &'static str {
        match self {
            Language::Python => "a Python interpreter",
            Language::Javascript => "a JavaScript interpreter",
            Language::C => "a C compiler",
            Language::Cpp => "a C++ compiler",
            Language::Java => "a Java compiler",
            Language::Csharp => "a C# compiler",
            Language::Rust => "a Rust compiler",
            Language::Go => "a Go compiler",
            Language::Shell => "a shell interpreter",
            Language::Sql => "a SQL engine",
            Language::Mongodb => "a MongoDB engine",
            Language::Swift => "a Swift compiler",
            Language::Ruby => "a Ruby interpreter",
            Language::Typescript => "a TypeScript compiler",
            Language::Dart => "a Dart compiler",
            Language::Kotlin => "a Kotlin compiler",
            Language::Perl => "a Perl interpreter",
            Language::Scala => "a Scala compiler",
            Language::Julia => "a Julia interpreter",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_roundtrip_for_every_language() {
        for lang in Language::ALL {
            assert_eq!(Language::parse_str(lang.as_str()), Some(lang));
        }
    }

    #[test]
    fn unknown_and_miscased_slugs() {
        assert_eq!(Language::parse_str("cobol"), None);
        assert_eq!(Language::parse_str("Python"), None);
        assert_eq!(Language::parse_str(""), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(Language::Sql.kind(), LanguageKind::Query);
        assert_eq!(Language::Mongodb.kind(), LanguageKind::Query);
        assert_eq!(Language::Shell.kind(), LanguageKind::Script);
        assert_eq!(Language::Rust.kind(), LanguageKind::Program);
    }

    #[test]
    fn tools() {
        assert_eq!(Language::Python.tool(), "a Python interpreter");
        assert_eq!(Language::Cpp.tool(), "a C++ compiler");
        assert_eq!(Language::Shell.tool(), "a shell interpreter");
        assert_eq!(Language::Sql.tool(), "a SQL engine");
        assert_eq!(Language::Mongodb.tool(), "a MongoDB engine");
        for lang in Language::ALL {
            assert!(lang.tool().starts_with("a "), "{lang}");
        }
    }

    #[test]
    fn serde_uses_slug() {
        let json = serde_json::to_string(&Language::Csharp).unwrap();
        assert_eq!(json, "\"csharp\"");
        let lang: Language = serde_json::from_str("\"typescript\"").unwrap();
        assert_eq!(lang, Language::Typescript);
    }
}
