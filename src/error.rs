//! Structural errors for the document tree.
//!
//! Malformed markup is never an error (the parser is total) and unknown
//! roles degrade to the anonymous link set, so the only failures left are
//! programming defects in tree construction. They abort the current
//! request with a generic response and are logged server-side; nothing
//! here is ever shown to the end user.

use thiserror::Error;

/// A defect in document-tree construction.
///
/// Cycles are unrepresentable (children are owned and moved into their
/// parent), so the remaining structural failures are attaching children
/// to leaves and missing mandatory fields on checked constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    /// Tried to append a child to a node kind that owns no children.
    #[error("node `{template_key}` cannot hold children")]
    NotAContainer {
        /// Template key of the offending node.
        template_key: &'static str,
    },

    /// A mandatory field was empty at construction.
    #[error("node `{node}` requires field `{field}`")]
    MissingField {
        node: &'static str,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = StructuralError::NotAContainer {
            template_key: "widget_text.html",
        };
        assert_eq!(e.to_string(), "node `widget_text.html` cannot hold children");

        let e = StructuralError::MissingField {
            node: "Panel",
            field: "title",
        };
        assert_eq!(e.to_string(), "node `Panel` requires field `title`");
    }
}
