//! Composite nodes - containers that own an ordered list of children.
//!
//! Ownership is exclusive and tree-shaped: a child is moved into its
//! parent at construction or through `push`, so a container can never be
//! its own descendant. Acyclicity holds by construction, not by runtime
//! checks. Children render in insertion order; order is meaningful.

use crate::error::StructuralError;
use crate::types::{Gap, Pagination};

use super::Node;

// =============================================================================
// Stack
// =============================================================================

/// Renders children vertically with a consistent gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    pub gap: Gap,
    pub children: Vec<Node>,
}

impl Stack {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            gap: Gap::Medium,
            children,
        }
    }

    pub fn gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }
}

// =============================================================================
// Grid
// =============================================================================

/// Renders children in a fixed-column grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub cols: u8,
    pub gap: Gap,
    pub children: Vec<Node>,
}

impl Grid {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            cols: 3,
            gap: Gap::Medium,
            children,
        }
    }

    pub fn cols(mut self, cols: u8) -> Self {
        self.cols = cols;
        self
    }

    pub fn gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }
}

// =============================================================================
// Panel
// =============================================================================

/// A visible container with a background, border, optional header fields
/// and footer. Groups related widgets ("User Details", an announcement).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub timestamp: Option<String>,
    pub footnote: Option<String>,
    /// Rendered below the children, outside the body padding.
    pub footer: Option<Box<Node>>,
    pub collapsible: bool,
    /// Only meaningful when `collapsible`; the boundary ignores it
    /// otherwise.
    pub start_collapsed: bool,
    /// Externally computed paging state for list panels, forwarded as-is.
    pub pagination: Option<Pagination>,
    pub children: Vec<Node>,
}

impl Panel {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// An announcement panel: the title is mandatory for this shape.
    pub fn announcement(
        title: impl Into<String>,
        author: impl Into<String>,
        timestamp: impl Into<String>,
        children: Vec<Node>,
    ) -> Result<Self, StructuralError> {
        let title = title.into();
        if title.is_empty() {
            return Err(StructuralError::MissingField {
                node: "Panel",
                field: "title",
            });
        }
        Ok(Self {
            title: Some(title),
            author: Some(author.into()),
            timestamp: Some(timestamp.into()),
            children,
            ..Self::default()
        })
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }

    pub fn footer(mut self, footer: Node) -> Self {
        self.footer = Some(Box::new(footer));
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn collapsible(mut self, start_collapsed: bool) -> Self {
        self.collapsible = true;
        self.start_collapsed = start_collapsed;
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_preserves_order() {
        let mut stack = Stack::new(vec![Node::text("a"), Node::text("b")]);
        stack.push(Node::text("c"));
        let labels: Vec<_> = stack
            .children
            .iter()
            .map(|n| match n {
                Node::Text(t) => t.content.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn test_grid_defaults() {
        let grid = Grid::new(vec![]);
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.gap, Gap::Medium);
    }

    #[test]
    fn test_panel_announcement_requires_title() {
        let err = Panel::announcement("", "mira", "2026-01-02", vec![]).unwrap_err();
        assert_eq!(
            err,
            StructuralError::MissingField {
                node: "Panel",
                field: "title"
            }
        );

        let panel = Panel::announcement("Patch notes", "mira", "2026-01-02", vec![]).unwrap();
        assert_eq!(panel.title.as_deref(), Some("Patch notes"));
        assert_eq!(panel.author.as_deref(), Some("mira"));
    }

    #[test]
    fn test_panel_collapsible_flags() {
        let panel = Panel::new(vec![]).title("Details").collapsible(true);
        assert!(panel.collapsible);
        assert!(panel.start_collapsed);

        let open = Panel::new(vec![]).collapsible(false);
        assert!(open.collapsible);
        assert!(!open.start_collapsed);
    }
}
