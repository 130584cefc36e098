//! The page assembler.
//!
//! Wraps caller-built content into the standard page shape: role-driven
//! navigation in the sidebar, pending flash messages appended to the
//! content, everything inside the three-column layout and a `Page` root.
//!
//! Deterministic and total - every role value has a defined branch, an
//! unknown role falls through to the anonymous link set, and nothing
//! here performs I/O beyond draining the injected flash queue once.

use bitflags::bitflags;

use crate::layout::Layout;
use crate::node::{FlashModal, Navigation, Node};
use crate::page::Page;
use crate::types::{Actor, FlashMessage, Link, MetaTag};

/// Navigation header shown for visitors with no display name.
pub const ANONYMOUS_NAME: &str = "anon_user";

/// Fixed content title on every assembled page.
pub const CONTENT_TITLE: &str = ".scavengers.io";

bitflags! {
    /// Which navigation blocks a role may see. Display-only - the real
    /// authorization decision was made upstream when the role was set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NavGrants: u8 {
        const ADMIN      = 1 << 0;
        const USER_PAGES = 1 << 1;
        const SOCIAL     = 1 << 2;
    }
}

impl NavGrants {
    /// Map a session role to its navigation grants.
    ///
    /// Unrecognized roles get no grants - the caller then sees the same
    /// links as a logged-out visitor.
    pub fn for_role(role: Option<&str>) -> Self {
        match role {
            Some("admin") => Self::ADMIN | Self::USER_PAGES | Self::SOCIAL,
            Some("user") => Self::USER_PAGES | Self::SOCIAL,
            Some("social") => Self::SOCIAL,
            _ => Self::empty(),
        }
    }
}

/// Every route target the navigation can point at, supplied by the
/// routing layer as opaque hrefs. The assembler arranges these; it never
/// builds a URL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLinks {
    pub login: String,
    pub register: String,
    pub admin_dashboard: String,
    pub report: String,
    pub request: String,
    pub media: String,
    pub dev: String,
    pub board: String,
    pub announcements: String,
    pub feed: String,
    pub chat: String,
    pub profile: String,
    pub logout: String,
}

impl RouteLinks {
    /// The ordered link list for a grant set.
    ///
    /// Concatenation order is fixed: admin block, user block, social
    /// block, logout. Empty grants produce the logged-out pair instead.
    pub fn links_for(&self, grants: NavGrants) -> Vec<Link> {
        if grants.is_empty() {
            return vec![
                Link::new("login", &self.login),
                Link::new("register", &self.register),
            ];
        }

        let mut links = Vec::new();
        if grants.contains(NavGrants::ADMIN) {
            links.push(Link::new("admin", &self.admin_dashboard));
        }
        if grants.contains(NavGrants::USER_PAGES) {
            links.push(Link::new("report", &self.report));
            links.push(Link::new("request", &self.request));
            links.push(Link::new("media", &self.media));
            links.push(Link::new("dev", &self.dev));
            links.push(Link::new("board", &self.board));
        }
        if grants.contains(NavGrants::SOCIAL) {
            links.push(Link::new("announcements", &self.announcements));
            links.push(Link::new("feed", &self.feed));
            links.push(Link::new("chat", &self.chat));
            links.push(Link::new("profile", &self.profile));
        }
        links.push(Link::new("logout", &self.logout));
        links
    }
}

/// The one-shot flash-message source, injected so the assembler stays
/// free of ambient session state.
pub trait FlashQueue {
    /// Take every pending message, in queue order. Messages are consumed;
    /// a second drain returns nothing.
    fn drain(&mut self) -> Vec<FlashMessage>;
}

/// Simple owned queue, used by tests and by callers that already pulled
/// messages out of their session layer.
#[derive(Debug, Clone, Default)]
pub struct PendingFlashes(pub Vec<FlashMessage>);

impl FlashQueue for PendingFlashes {
    fn drain(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.0)
    }
}

/// Assemble the standard page around caller-built content.
///
/// 1. Compute navigation links from the actor's role (fail-closed).
/// 2. Title the navigation with the actor's display name, or the fixed
///    anonymous placeholder.
/// 3. Drain the flash queue into a modal appended as the last content
///    element - empty is fine, the modal then renders nothing.
/// 4. Wrap in the three-column layout and page root.
///
/// Never fails, for any role value.
pub fn assemble(
    content: Vec<Node>,
    title: &str,
    actor: &Actor,
    flashes: &mut dyn FlashQueue,
    links: &RouteLinks,
) -> Page {
    assemble_with_meta(content, title, actor, flashes, links, Vec::new())
}

/// `assemble` plus caller-supplied meta tags on the page head.
pub fn assemble_with_meta(
    mut content: Vec<Node>,
    title: &str,
    actor: &Actor,
    flashes: &mut dyn FlashQueue,
    links: &RouteLinks,
    meta_tags: Vec<MetaTag>,
) -> Page {
    let grants = NavGrants::for_role(actor.role.as_deref());
    let nav_links = links.links_for(grants);
    tracing::debug!(
        role = actor.role.as_deref().unwrap_or("<none>"),
        links = nav_links.len(),
        title,
        "assembling page"
    );

    let nav_title = actor.display_name.as_deref().unwrap_or(ANONYMOUS_NAME);
    let nav = Node::Navigation(Navigation::new(nav_title, nav_links));

    let messages = flashes.drain();
    content.push(Node::FlashModal(FlashModal::new(messages)));

    let layout = Layout::new(vec![nav], content)
        .content_title(CONTENT_TITLE)
        .actor(actor.clone());

    Page::new(title, layout).meta_tags(meta_tags)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> RouteLinks {
        RouteLinks {
            login: "/auth/login".into(),
            register: "/auth/register".into(),
            admin_dashboard: "/admin".into(),
            report: "/report".into(),
            request: "/request".into(),
            media: "/media".into(),
            dev: "/dev".into(),
            board: "/board".into(),
            announcements: "/social/announcements".into(),
            feed: "/social/feed".into(),
            chat: "/social/chat".into(),
            profile: "/social/profile".into(),
            logout: "/auth/logout".into(),
        }
    }

    fn labels(links: &[Link]) -> Vec<&str> {
        links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn test_grants_per_role() {
        assert_eq!(NavGrants::for_role(None), NavGrants::empty());
        assert_eq!(
            NavGrants::for_role(Some("admin")),
            NavGrants::ADMIN | NavGrants::USER_PAGES | NavGrants::SOCIAL
        );
        assert_eq!(
            NavGrants::for_role(Some("user")),
            NavGrants::USER_PAGES | NavGrants::SOCIAL
        );
        assert_eq!(NavGrants::for_role(Some("social")), NavGrants::SOCIAL);
        // Fail-closed on anything unrecognized.
        assert_eq!(NavGrants::for_role(Some("superuser")), NavGrants::empty());
        assert_eq!(NavGrants::for_role(Some("")), NavGrants::empty());
    }

    #[test]
    fn test_logged_out_links() {
        let links = routes().links_for(NavGrants::empty());
        assert_eq!(labels(&links), ["login", "register"]);
    }

    #[test]
    fn test_admin_links_full_order() {
        let links = routes().links_for(NavGrants::for_role(Some("admin")));
        assert_eq!(
            labels(&links),
            [
                "admin", "report", "request", "media", "dev", "board", "announcements", "feed",
                "chat", "profile", "logout",
            ]
        );
    }

    #[test]
    fn test_user_links_order() {
        let links = routes().links_for(NavGrants::for_role(Some("user")));
        assert_eq!(
            labels(&links),
            [
                "report", "request", "media", "dev", "board", "announcements", "feed", "chat",
                "profile", "logout",
            ]
        );
    }

    #[test]
    fn test_social_links_order() {
        let links = routes().links_for(NavGrants::for_role(Some("social")));
        assert_eq!(
            labels(&links),
            ["announcements", "feed", "chat", "profile", "logout"]
        );
    }

    #[test]
    fn test_unknown_role_matches_logged_out() {
        let known = routes().links_for(NavGrants::for_role(None));
        let unknown = routes().links_for(NavGrants::for_role(Some("wizard")));
        assert_eq!(known, unknown);
    }

    #[test]
    fn test_assemble_never_panics_across_roles() {
        for role in [None, Some("admin"), Some("user"), Some("social"), Some("???")] {
            let actor = Actor {
                role: role.map(String::from),
                display_name: Some("kay".into()),
            };
            let mut flashes = PendingFlashes::default();
            let page = assemble(vec![Node::text("hi")], "Home", &actor, &mut flashes, &routes());
            assert_eq!(page.title, "Home");
            assert_eq!(page.layout.sidebar.len(), 1);
        }
    }

    #[test]
    fn test_flash_modal_appended_last() {
        let actor = Actor::new("user", "kay");
        let mut flashes = PendingFlashes(vec![
            FlashMessage::new("error", "bad password"),
            FlashMessage::new("info", "try again"),
        ]);
        let page = assemble(
            vec![Node::text("a"), Node::text("b")],
            "Login",
            &actor,
            &mut flashes,
            &routes(),
        );

        let content = &page.layout.content;
        assert_eq!(content.len(), 3);
        match &content[2] {
            Node::FlashModal(modal) => {
                assert_eq!(modal.messages.len(), 2);
                // Queue order preserved.
                assert_eq!(modal.messages[0].category, "error");
                assert_eq!(modal.messages[1].message, "try again");
            }
            other => panic!("expected flash modal, got {}", other.template_key()),
        }
        // Queue drained once.
        assert!(flashes.0.is_empty());
    }

    #[test]
    fn test_empty_flash_queue_still_appends_modal() {
        let actor = Actor::anonymous();
        let mut flashes = PendingFlashes::default();
        let page = assemble(vec![], "Login", &actor, &mut flashes, &routes());
        match &page.layout.content[0] {
            Node::FlashModal(modal) => assert!(modal.is_empty()),
            other => panic!("expected flash modal, got {}", other.template_key()),
        }
    }

    #[test]
    fn test_anonymous_nav_title_placeholder() {
        let mut flashes = PendingFlashes::default();
        let page = assemble(vec![], "Home", &Actor::anonymous(), &mut flashes, &routes());
        match &page.layout.sidebar[0] {
            Node::Navigation(nav) => assert_eq!(nav.title, ANONYMOUS_NAME),
            other => panic!("expected navigation, got {}", other.template_key()),
        }
    }

    #[test]
    fn test_fixed_content_title_and_empty_visuals() {
        let mut flashes = PendingFlashes::default();
        let page = assemble(vec![], "Home", &Actor::anonymous(), &mut flashes, &routes());
        assert_eq!(page.layout.content_title.as_deref(), Some(CONTENT_TITLE));
        assert!(page.layout.visuals.is_empty());
        assert!(page.meta_tags.is_empty());
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let actor = Actor::new("admin", "root");
        let build = || {
            let mut flashes = PendingFlashes(vec![FlashMessage::new("info", "hello")]);
            assemble(vec![Node::text("x")], "Home", &actor, &mut flashes, &routes())
        };
        assert_eq!(build(), build());
    }
}
