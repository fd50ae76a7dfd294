//! Source languages and their keyword tables.
//!
//! The language of a buffer is detected once, from the file extension, when
//! the lexer is created. Each [`Language`] variant owns a static keyword
//! table; looking up a keyword is an exact, case-sensitive comparison.

use std::fmt;
use std::path::Path;

/// Reserved words of C and C++.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while", "alignas", "alignof", "and", "and_eq", "asm", "bitand", "bitor", "bool",
    "catch", "char8_t", "char16_t", "char32_t", "class", "compl", "concept", "consteval",
    "constexpr", "constinit", "const_cast", "co_await", "co_return", "co_yield", "decltype",
    "delete", "dynamic_cast", "explicit", "export", "false", "friend", "inline", "mutable",
    "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq",
    "private", "protected", "public", "reinterpret_cast", "requires", "static_assert",
    "static_cast", "template", "this", "thread_local", "throw", "true", "try", "typeid",
    "typename", "using", "virtual", "wchar_t", "xor", "xor_eq",
];

/// Reserved words and literals of Java.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "var", "record", "yield", "sealed",
    "permits",
];

/// Hard, soft, and modifier keywords of Kotlin.
const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while", "by", "catch", "constructor",
    "delegate", "dynamic", "field", "file", "finally", "get", "import", "init", "param",
    "property", "receiver", "set", "setparam", "where", "abstract", "actual", "annotation",
    "companion", "const", "crossinline", "data", "enum", "expect", "external", "final", "infix",
    "inline", "inner", "internal", "lateinit", "noinline", "open", "operator", "out", "override",
    "private", "protected", "public", "reified", "sealed", "suspend", "tailrec", "vararg",
];

/// Keywords of Python 3.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Literal words of the MiniConf configuration format.
const MINICONF_KEYWORDS: &[&str] = &[
    "true", "false", "yes", "no", "on", "off", "null", "include",
];

/// A source language the lexer can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// C and C++; the default for unknown or missing extensions.
    #[default]
    CFamily,
    /// Java (`.java`).
    Java,
    /// Kotlin (`.kt`, `.kts`).
    Kotlin,
    /// Python (`.py`).
    Python,
    /// MiniConf configuration files (`.miniconf`).
    MiniConf,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 5] = [
        Language::CFamily,
        Language::Java,
        Language::Kotlin,
        Language::Python,
        Language::MiniConf,
    ];

    /// Detects the language of a file from its path.
    ///
    /// The extension is the text after the last `.` in the path, unless that
    /// dot is the first character (a bare dotfile name). Matching is exact and
    /// case-sensitive; anything unrecognized is [`Language::CFamily`].
    ///
    /// # Example
    ///
    /// ```
    /// use hilex_lex::Language;
    ///
    /// assert_eq!(Language::from_path("Foo.py"), Language::Python);
    /// assert_eq!(Language::from_path("Foo.PY"), Language::CFamily);
    /// assert_eq!(Language::from_path(".py"), Language::CFamily);
    /// assert_eq!(Language::from_path("Foo"), Language::CFamily);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_string_lossy();
        match path.rfind('.') {
            Some(dot) if dot > 0 => Self::from_extension(&path[dot + 1..]),
            _ => Self::CFamily,
        }
    }

    /// Maps a bare extension (without the dot) to a language.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "kt" | "kts" => Self::Kotlin,
            "py" => Self::Python,
            "java" => Self::Java,
            "miniconf" => Self::MiniConf,
            _ => Self::CFamily,
        }
    }

    /// Looks a language up by its display name, ignoring ASCII case.
    ///
    /// Also accepts `c` and `cpp` for [`Language::CFamily`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "c" | "cpp" | "c++" => Some(Self::CFamily),
            "java" => Some(Self::Java),
            "kotlin" => Some(Self::Kotlin),
            "python" => Some(Self::Python),
            "miniconf" => Some(Self::MiniConf),
            _ => None,
        }
    }

    /// Display name for status lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::CFamily => "C++",
            Self::Java => "Java",
            Self::Kotlin => "Kotlin",
            Self::Python => "Python",
            Self::MiniConf => "MiniConf",
        }
    }

    /// File extensions that select this language. Empty for the default.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::CFamily => &[],
            Self::Java => &["java"],
            Self::Kotlin => &["kt", "kts"],
            Self::Python => &["py"],
            Self::MiniConf => &["miniconf"],
        }
    }

    /// The keyword table of this language.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::CFamily => C_KEYWORDS,
            Self::Java => JAVA_KEYWORDS,
            Self::Kotlin => KOTLIN_KEYWORDS,
            Self::Python => PYTHON_KEYWORDS,
            Self::MiniConf => MINICONF_KEYWORDS,
        }
    }

    /// Returns true if `word` is exactly one of this language's keywords.
    pub fn is_keyword(self, word: &[u8]) -> bool {
        self.keywords()
            .iter()
            .any(|kw| kw.len() == word.len() && kw.as_bytes() == word)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
