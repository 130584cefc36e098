//! The document tree node model.
//!
//! `Node` is a closed tagged union: one variant per widget or container
//! kind, each carrying its own field struct. The template boundary
//! dispatches on `template_key()` - a single match, the only place a
//! kind maps to its visual representation - and recurses through
//! `children()` uniformly for leaves and composites alike.
//!
//! Every node is built fresh per request, bottom-up, handed to the
//! boundary once, and discarded. Children are owned values moved into
//! their parent, so the tree is acyclic by construction.

pub mod containers;
pub mod widgets;

pub use containers::{Grid, Panel, Stack};
pub use widgets::{
    Button, Column, FlashModal, Form, FormField, FormRef, Navigation, Row, RowAction, StatCard,
    Table, Text,
};

use crate::error::StructuralError;
use crate::types::TextStyle;

/// A displayable unit of the page tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Widgets (leaves)
    StatCard(StatCard),
    Table(Table),
    Form(Form),
    Button(Button),
    Navigation(Navigation),
    FlashModal(FlashModal),
    Text(Text),
    // Containers
    Stack(Stack),
    Grid(Grid),
    Panel(Panel),
}

impl Node {
    /// The fixed template key selecting this node's visual representation.
    ///
    /// Immutable per kind, decided at construction by the variant.
    pub const fn template_key(&self) -> &'static str {
        match self {
            Self::StatCard(_) => "widget_stat_card.html",
            Self::Table(_) => "widget_table.html",
            Self::Form(_) => "widget_form.html",
            Self::Button(_) => "widget_button.html",
            Self::Navigation(_) => "widget_navigation.html",
            Self::FlashModal(_) => "widget_flash_modal.html",
            Self::Text(_) => "widget_text.html",
            Self::Stack(_) => "container_stack.html",
            Self::Grid(_) => "container_grid.html",
            Self::Panel(_) => "container_panel.html",
        }
    }

    /// The node's children in render order. Empty for every leaf, so the
    /// boundary recurses without caring which kind it holds.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Stack(s) => &s.children,
            Self::Grid(g) => &g.children,
            Self::Panel(p) => &p.children,
            _ => &[],
        }
    }

    /// Whether this kind owns children at all.
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Stack(_) | Self::Grid(_) | Self::Panel(_))
    }

    /// Append a child to a container node.
    ///
    /// The child is moved in, keeping ownership exclusive. Appending to a
    /// leaf is a programming defect and returns `StructuralError`.
    pub fn append_child(&mut self, child: Node) -> Result<(), StructuralError> {
        match self {
            Self::Stack(s) => s.children.push(child),
            Self::Grid(g) => g.children.push(child),
            Self::Panel(p) => p.children.push(child),
            _ => {
                let key = self.template_key();
                tracing::error!(template_key = key, "append_child on a leaf node");
                return Err(StructuralError::NotAContainer { template_key: key });
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Convenience constructors for the shapes routes build constantly.
    // -------------------------------------------------------------------------

    /// A body-style text block.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(Text::new(content))
    }

    /// A heading text block.
    pub fn heading(content: impl Into<String>) -> Self {
        Self::Text(Text::new(content).style(TextStyle::Heading))
    }

    /// A link-style button.
    pub fn button_link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Button(Button::new(label).href(href))
    }
}

impl From<StatCard> for Node {
    fn from(w: StatCard) -> Self {
        Self::StatCard(w)
    }
}

impl From<Table> for Node {
    fn from(w: Table) -> Self {
        Self::Table(w)
    }
}

impl From<Form> for Node {
    fn from(w: Form) -> Self {
        Self::Form(w)
    }
}

impl From<Button> for Node {
    fn from(w: Button) -> Self {
        Self::Button(w)
    }
}

impl From<Navigation> for Node {
    fn from(w: Navigation) -> Self {
        Self::Navigation(w)
    }
}

impl From<FlashModal> for Node {
    fn from(w: FlashModal) -> Self {
        Self::FlashModal(w)
    }
}

impl From<Text> for Node {
    fn from(w: Text) -> Self {
        Self::Text(w)
    }
}

impl From<Stack> for Node {
    fn from(c: Stack) -> Self {
        Self::Stack(c)
    }
}

impl From<Grid> for Node {
    fn from(c: Grid) -> Self {
        Self::Grid(c)
    }
}

impl From<Panel> for Node {
    fn from(c: Panel) -> Self {
        Self::Panel(c)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn every_kind() -> Vec<Node> {
        vec![
            StatCard::new("n", 1).into(),
            Table::new(vec![], vec![]).into(),
            Form::new(FormRef::new("f"), "/x").into(),
            Button::new("b").into(),
            Navigation::new("nav", vec![]).into(),
            FlashModal::default().into(),
            Text::new("t").into(),
            Stack::new(vec![]).into(),
            Grid::new(vec![]).into(),
            Panel::new(vec![]).into(),
        ]
    }

    #[test]
    fn test_template_keys_fixed_and_distinct() {
        let keys: Vec<_> = every_kind().iter().map(|n| n.template_key()).collect();
        assert_eq!(
            keys,
            [
                "widget_stat_card.html",
                "widget_table.html",
                "widget_form.html",
                "widget_button.html",
                "widget_navigation.html",
                "widget_flash_modal.html",
                "widget_text.html",
                "container_stack.html",
                "container_grid.html",
                "container_panel.html",
            ]
        );
        let mut dedup = keys.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), keys.len());
    }

    #[test]
    fn test_leaves_have_no_children() {
        for node in every_kind() {
            if !node.is_container() {
                assert!(node.children().is_empty(), "{}", node.template_key());
            }
        }
    }

    #[test]
    fn test_append_child_on_leaf_errors() {
        let mut leaf = Node::text("hello");
        let err = leaf.append_child(Node::text("child")).unwrap_err();
        assert_eq!(
            err,
            StructuralError::NotAContainer {
                template_key: "widget_text.html"
            }
        );
    }

    #[test]
    fn test_append_child_preserves_order() {
        let mut stack = Node::Stack(Stack::new(vec![]));
        for i in 0..5 {
            stack.append_child(Node::text(format!("w{i}"))).unwrap();
        }
        let order: Vec<_> = stack
            .children()
            .iter()
            .map(|n| match n {
                Node::Text(t) => t.content.clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(order, ["w0", "w1", "w2", "w3", "w4"]);
    }

    #[test]
    fn test_nested_containers_recurse() {
        let inner = Node::Grid(Grid::new(vec![Node::text("cell")]));
        let outer = Node::Panel(Panel::new(vec![inner]));
        let grid = &outer.children()[0];
        assert_eq!(grid.template_key(), "container_grid.html");
        assert_eq!(grid.children()[0].template_key(), "widget_text.html");
    }
}
