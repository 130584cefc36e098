//! The standard three-column application layout.
//!
//! 1. Sidebar: navigation (left)
//! 2. Content: main view (center)
//! 3. Visuals: effects and decorations (right)

use crate::node::Node;
use crate::types::Actor;

/// The single top-level arrangement every page uses. Three independently
/// ordered child lists plus an optional content title. The actor is
/// read-only display context, cloned in - the layout never reaches back
/// into session state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub sidebar: Vec<Node>,
    pub content: Vec<Node>,
    pub visuals: Vec<Node>,
    pub content_title: Option<String>,
    pub actor: Option<Actor>,
}

impl Layout {
    /// Template key consumed by the rendering boundary.
    pub const TEMPLATE_KEY: &'static str = "layout_3col.html";

    pub fn new(sidebar: Vec<Node>, content: Vec<Node>) -> Self {
        Self {
            sidebar,
            content,
            visuals: Vec::new(),
            content_title: None,
            actor: None,
        }
    }

    pub fn content_title(mut self, title: impl Into<String>) -> Self {
        self.content_title = Some(title.into());
        self
    }

    pub fn visuals(mut self, visuals: Vec<Node>) -> Self {
        self.visuals = visuals;
        self
    }

    pub fn actor(mut self, actor: Actor) -> Self {
        self.actor = Some(actor);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = Layout::new(vec![], vec![Node::text("body")]);
        assert!(layout.sidebar.is_empty());
        assert_eq!(layout.content.len(), 1);
        assert!(layout.visuals.is_empty());
        assert!(layout.content_title.is_none());
        assert!(layout.actor.is_none());
    }

    #[test]
    fn test_layout_columns_independent() {
        let layout = Layout::new(vec![Node::text("nav")], vec![Node::text("main")])
            .visuals(vec![Node::text("fx")])
            .content_title("Dashboard");
        assert_eq!(layout.sidebar.len(), 1);
        assert_eq!(layout.content.len(), 1);
        assert_eq!(layout.visuals.len(), 1);
        assert_eq!(layout.content_title.as_deref(), Some("Dashboard"));
    }
}
