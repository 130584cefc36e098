//! Core types for pagegraph.
//!
//! These types define the vocabulary that everything builds on.
//! They flow through widget construction, page assembly, and out to the
//! template boundary, which resolves them by each node's template key.

// =============================================================================
// Field values
// =============================================================================

/// A primitive display value carried by a widget field or table cell.
///
/// Closed set - the template boundary only ever has to format these four
/// shapes. Nested nodes are modeled as children, never as field values.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl FieldValue {
    /// Format the value for display the way the template boundary does.
    pub fn display(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// =============================================================================
// Style vocabulary
// =============================================================================

/// Gap size between children of a Stack or Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gap {
    Small,
    #[default]
    Medium,
    Large,
}

impl Gap {
    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// Stable name used by the template boundary as a CSS class suffix.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// HTML button element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonKind {
    /// The `type` attribute value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Typographic role of a Text widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Body,
    Heading,
    Subtle,
    Mono,
}

impl TextStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Heading => "heading",
            Self::Subtle => "subtle",
            Self::Mono => "mono",
        }
    }
}

// =============================================================================
// Request context
// =============================================================================

/// The current request's authenticated identity, as decided by the
/// session layer. The core only displays according to it - no
/// authorization decisions happen here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
    /// Role string granted at login. Absent for anonymous visitors.
    /// Unrecognized values degrade to the anonymous link set.
    pub role: Option<String>,
    /// Name shown in the navigation header. Absent falls back to a
    /// fixed placeholder.
    pub display_name: Option<String>,
}

impl Actor {
    /// Anonymous visitor - no role, no name.
    pub const fn anonymous() -> Self {
        Self {
            role: None,
            display_name: None,
        }
    }

    pub fn new(role: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            display_name: Some(display_name.into()),
        }
    }
}

/// A one-shot queued notification: category tag plus message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub category: String,
    pub message: String,
}

impl FlashMessage {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Navigation and page metadata
// =============================================================================

/// A labeled hyperlink. The core arranges links; it never constructs URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A single `<meta>` tag on the page head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Externally computed pagination state, passed through into widgets as
/// plain data. The core performs none of the arithmetic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub total_records: u64,
    pub has_next: bool,
    pub has_prev: bool,
    pub next_href: Option<String>,
    pub prev_href: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_parse() {
        assert_eq!(Gap::parse("small"), Some(Gap::Small));
        assert_eq!(Gap::parse("MEDIUM"), Some(Gap::Medium));
        assert_eq!(Gap::parse("huge"), None);
        assert_eq!(Gap::Large.as_str(), "large");
        assert_eq!(Gap::default(), Gap::Medium);
    }

    #[test]
    fn test_button_kind_attr() {
        assert_eq!(ButtonKind::default().as_str(), "button");
        assert_eq!(ButtonKind::Submit.as_str(), "submit");
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from("x").display(), "x");
        assert_eq!(FieldValue::Int(42).display(), "42");
        assert_eq!(FieldValue::Bool(false).display(), "false");
    }

    #[test]
    fn test_actor_anonymous() {
        let a = Actor::anonymous();
        assert!(a.role.is_none());
        assert!(a.display_name.is_none());
    }
}
