//! Leaf widgets - nodes that carry concrete display data and no children.
//!
//! Each widget is a plain struct with typed fields. Free-form pass-through
//! exists in exactly one place: `Button::attrs`, a single opaque attribute
//! string forwarded verbatim to the template boundary.

use crate::types::{ButtonKind, FieldValue, FlashMessage, Link, Pagination, TextStyle};

// =============================================================================
// StatCard
// =============================================================================

/// A key metric card ("Total Users: 150").
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: String,
    pub value: FieldValue,
    pub icon: String,
    pub trend: String,
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: String::new(),
            trend: String::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = trend.into();
        self
    }
}

// =============================================================================
// Table
// =============================================================================

/// A named table column. `key` selects the row field, `label` is the
/// header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A per-row action link or button rendered in the actions cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub label: String,
    pub href: String,
    /// HTTP method the action submits with ("GET" renders a link).
    pub method: String,
    /// CSS class tag ("danger", "primary", ...).
    pub class: String,
    /// Confirmation prompt shown before submitting, if any.
    pub confirm: Option<String>,
}

impl RowAction {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            method: "GET".to_string(),
            class: String::new(),
            confirm: None,
        }
    }

    pub fn post(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            method: "POST".to_string(),
            ..Self::link(label, href)
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn confirm(mut self, prompt: impl Into<String>) -> Self {
        self.confirm = Some(prompt.into());
        self
    }
}

/// One table row: an ordered field list plus its actions. The table
/// renders fields through `Column::key` lookup and never reorders rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub fields: Vec<(String, FieldValue)>,
    pub actions: Vec<RowAction>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn action(mut self, action: RowAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Look up a field by column key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// A data table with named columns and row actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    /// Externally computed paging state, forwarded to the template as-is.
    pub pagination: Option<Pagination>,
}

impl Table {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            pagination: None,
        }
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

// =============================================================================
// Form
// =============================================================================

/// One field of an externally owned form, as the template boundary needs
/// to see it: name, current raw value, validation errors already computed
/// by the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub errors: Vec<String>,
}

/// Opaque handle to an external form object. The core arranges it on the
/// page; field validation lives outside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormRef {
    pub name: String,
    pub fields: Vec<FormField>,
}

impl FormRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
            errors: Vec::new(),
        });
        self
    }
}

/// Wraps an external form with its action target and submit buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub form: FormRef,
    /// Button nodes rendered inside the form footer.
    pub buttons: Vec<super::Node>,
    pub action: String,
    pub method: String,
    pub form_id: String,
    /// When true the template renders its default action row even if
    /// `buttons` is empty.
    pub render_actions: bool,
}

impl Form {
    pub fn new(form: FormRef, action: impl Into<String>) -> Self {
        Self {
            form,
            buttons: Vec::new(),
            action: action.into(),
            method: "POST".to_string(),
            form_id: String::new(),
            render_actions: true,
        }
    }

    pub fn button(mut self, button: super::Node) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn form_id(mut self, id: impl Into<String>) -> Self {
        self.form_id = id.into();
        self
    }

    pub fn render_actions(mut self, render: bool) -> Self {
        self.render_actions = render;
        self
    }
}

// =============================================================================
// Button
// =============================================================================

/// A standalone button, optionally acting as a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub href: Option<String>,
    pub kind: ButtonKind,
    /// Style tag ("primary", "danger", ...).
    pub style: String,
    /// Opaque extra attributes forwarded verbatim.
    pub attrs: String,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            kind: ButtonKind::Button,
            style: "primary".to_string(),
            attrs: String::new(),
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn attrs(mut self, attrs: impl Into<String>) -> Self {
        self.attrs = attrs.into();
        self
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// The sidebar navigation: a header plus an ordered link list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub title: String,
    pub links: Vec<Link>,
}

impl Navigation {
    pub fn new(title: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            title: title.into(),
            links,
        }
    }
}

// =============================================================================
// FlashModal
// =============================================================================

/// A hidden modal that pops up when flash messages are pending.
/// An empty message list is valid and renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlashModal {
    pub messages: Vec<FlashMessage>,
}

impl FlashModal {
    pub fn new(messages: Vec<FlashMessage>) -> Self {
        Self { messages }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// =============================================================================
// Text
// =============================================================================

/// A text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
    pub style: TextStyle,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::Body,
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
