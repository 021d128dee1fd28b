//! Value objects shared by the synthesizer and the dependency catalog port.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Maven coordinate a dependency id resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    /// `None` when the version is managed by the framework BOM.
    pub version: Option<String>,
    pub scope: Option<String>,
}

impl Coordinate {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            scope: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

/// Outcome of looking a selected dependency id up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedDependency {
    Known { id: String, coordinate: Coordinate },
    /// Not in the catalog; rendered as a comment so the user can fix it by hand.
    Unknown { id: String },
}

/// How user-supplied text is inserted into `pom.xml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupPolicy {
    /// Replace `& < > " '` with entity references and drop characters XML 1.0
    /// cannot represent (C0 controls other than tab/LF/CR, U+FFFE, U+FFFF).
    #[default]
    Escape,
    /// Insert values verbatim. The output is only well-formed if the values are.
    Literal,
}

impl MarkupPolicy {
    pub fn apply<'a>(&self, value: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            Self::Literal => std::borrow::Cow::Borrowed(value),
            Self::Escape => escape_xml(value),
        }
    }
}

impl FromStr for MarkupPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "escape" => Ok(Self::Escape),
            "literal" => Ok(Self::Literal),
            other => Err(DomainError::InvalidSetting(format!(
                "unknown markup policy '{other}', expected 'escape' or 'literal'"
            ))),
        }
    }
}

impl fmt::Display for MarkupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escape => f.write_str("escape"),
            Self::Literal => f.write_str("literal"),
        }
    }
}

/// The XML 1.0 `Char` production. Surrogates cannot occur in a `char`.
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn escape_xml(value: &str) -> std::borrow::Cow<'_, str> {
    if !value
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'') || !is_xml_char(c))
    {
        return std::borrow::Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    std::borrow::Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_display() {
        let c = Coordinate::new("org.postgresql", "postgresql");
        assert_eq!(c.to_string(), "org.postgresql:postgresql");
        assert_eq!(c.with_version("42.7.3").to_string(), "org.postgresql:postgresql:42.7.3");
    }

    #[test]
    fn escape_policy_replaces_specials() {
        assert_eq!(
            MarkupPolicy::Escape.apply("R&D <team> \"x\" 'y'"),
            "R&amp;D &lt;team&gt; &quot;x&quot; &apos;y&apos;"
        );
    }

    #[test]
    fn escape_policy_drops_non_xml_characters() {
        assert_eq!(MarkupPolicy::Escape.apply("a\u{1}b"), "ab");
        assert_eq!(MarkupPolicy::Escape.apply("\u{0}x\u{FFFE}<"), "x&lt;");
        assert_eq!(MarkupPolicy::Escape.apply("tab\there\r\n"), "tab\there\r\n");
        assert_eq!(MarkupPolicy::Literal.apply("a\u{1}b"), "a\u{1}b");
    }

    #[test]
    fn escape_borrows_when_clean() {
        assert!(matches!(
            MarkupPolicy::Escape.apply("plain"),
            std::borrow::Cow::Borrowed(_)
        ));
    }

    #[test]
    fn literal_policy_is_verbatim() {
        assert_eq!(MarkupPolicy::Literal.apply("a < b"), "a < b");
    }

    #[test]
    fn policy_parses_case_insensitive() {
        assert_eq!("Literal".parse::<MarkupPolicy>().unwrap(), MarkupPolicy::Literal);
        assert!("raw".parse::<MarkupPolicy>().is_err());
    }
}
