//! Target languages the generator can emit stubs for.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Supported target languages for stub generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// C (header + source pairs)
    C,
    /// C++ (header + source pairs)
    Cpp,
    /// Go (one file per blueprint file)
    Go,
    /// Python
    Python,
    /// JavaScript (CommonJS modules)
    JavaScript,
    /// Java (one file per class)
    Java,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
        }
    }
}

/// The fallback target when a blueprint does not name a language.
impl Default for Language {
    fn default() -> Self {
        Language::C
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" => Ok(Language::C),
            "c++" | "cpp" => Ok(Language::Cpp),
            "go" => Ok(Language::Go),
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            "java" => Ok(Language::Java),
            _ => Err(format!(
                "unsupported language '{}', expected one of: c, c++, go, python, javascript, java",
                s
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Language::from_str("c").unwrap(), Language::C);
        assert_eq!(Language::from_str("c++").unwrap(), Language::Cpp);
        assert_eq!(Language::from_str("cpp").unwrap(), Language::Cpp);
        assert_eq!(Language::from_str("go").unwrap(), Language::Go);
        assert_eq!(Language::from_str("python").unwrap(), Language::Python);
        assert_eq!(Language::from_str("js").unwrap(), Language::JavaScript);
        assert_eq!(
            Language::from_str("JavaScript").unwrap(),
            Language::JavaScript
        );
        assert_eq!(Language::from_str("java").unwrap(), Language::Java);
        assert!(Language::from_str("rust").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::C.to_string(), "c");
        assert_eq!(Language::Cpp.to_string(), "cpp");
        assert_eq!(Language::JavaScript.to_string(), "javascript");
    }

    #[test]
    fn test_default_is_c() {
        assert_eq!(Language::default(), Language::C);
    }
}
