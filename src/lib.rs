//! # pagegraph
//!
//! Server-side page composition core: a typed UI document tree plus the
//! safe-markup formatter for untrusted content.
//!
//! ## Architecture
//!
//! Every route builds its page the same way:
//! ```text
//! data → Widget/Container nodes → assemble() → Page → template boundary
//! ```
//! Nodes form a closed tagged union. Each kind carries a fixed template
//! key; the (out-of-scope) template boundary dispatches on that key and
//! recurses through `Node::children()`. Trees are built fresh per
//! request, bottom-up, handed off once, and discarded - nothing is
//! shared between requests.
//!
//! The markup side is independent: [`render_text`] escapes untrusted
//! text up front and then recognizes only the `[label](url)` inline-link
//! construct, so user content can never reach the browser as live HTML.
//!
//! ## Modules
//!
//! - [`types`] - Shared vocabulary (Gap, Actor, FlashMessage, ...)
//! - [`node`] - The Node tagged union: widgets and containers
//! - [`layout`] - The three-column layout
//! - [`page`] - The Page root and default resource lists
//! - [`assemble`] - The page assembler and navigation rule table
//! - [`markup`] - Safe content markup
//! - [`error`] - Structural error taxonomy

pub mod assemble;
pub mod error;
pub mod layout;
pub mod markup;
pub mod node;
pub mod page;
pub mod types;

// Re-export commonly used items
pub use types::{
    Actor, ButtonKind, FieldValue, FlashMessage, Gap, Link, MetaTag, Pagination, TextStyle,
};

pub use node::{
    Button, Column, FlashModal, Form, FormField, FormRef, Grid, Navigation, Node, Panel, Row,
    RowAction, Stack, StatCard, Table, Text,
};

pub use assemble::{
    assemble, assemble_with_meta, FlashQueue, NavGrants, PendingFlashes, RouteLinks,
    ANONYMOUS_NAME, CONTENT_TITLE,
};

pub use error::StructuralError;
pub use layout::Layout;
pub use markup::{render_optional, render_text, SafeMarkup};
pub use page::{Page, CSS_DEFAULT_SHEETS, JS_DEFAULT_SCRIPTS};
