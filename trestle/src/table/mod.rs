//! The responsive table widget.
//!
//! One table, two markup shapes: a conventional header/row grid when the
//! viewport is wide, stacked key/value groups (one body section per row) when
//! it is narrow. Which shape renders is driven entirely by a
//! [`BreakpointMatcher`] over the configured breakpoint.

mod render;

use std::sync::Arc;

use webdom::Element;

use crate::breakpoint::Breakpoint;
use crate::matcher::BreakpointMatcher;
use crate::source::MatchSource;
use crate::styling::TableStyling;

// =============================================================================
// Column
// =============================================================================

/// A table column definition. Column order is `Vec` order.
#[derive(Debug, Clone)]
pub struct Column {
    /// Unique identifier for this column; also the cell lookup key.
    pub id: String,
    /// Header content displayed for this column.
    pub header: Element,
}

impl Column {
    /// Create a column with a plain-text header.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: Element::text(header),
        }
    }

    /// Create a column with arbitrary header markup.
    pub fn with_header(id: impl Into<String>, header: Element) -> Self {
        Self {
            id: id.into(),
            header,
        }
    }
}

// =============================================================================
// TableRow
// =============================================================================

/// Trait for rows that can be displayed in a responsive table.
///
/// # Example
///
/// ```
/// use trestle::table::TableRow;
/// use webdom::Element;
///
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: String,
///     email: String,
/// }
///
/// impl TableRow for User {
///     fn key(&self) -> String {
///         self.id.to_string()
///     }
///
///     fn cell(&self, column_id: &str) -> Element {
///         match column_id {
///             "name" => Element::text(&self.name),
///             "email" => Element::text(&self.email),
///             _ => Element::text(""),
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// A unique, caller-defined identity for this row (not positional).
    fn key(&self) -> String;

    /// The cell content for the given column.
    fn cell(&self, column_id: &str) -> Element;
}

/// A ready-made row for dynamic, map-shaped data: an explicit key plus an
/// ordered field list. Missing fields render as empty text.
#[derive(Debug, Clone, Default)]
pub struct Record {
    key: String,
    fields: Vec<(String, Element)>,
}

impl Record {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: Vec::new(),
        }
    }

    /// Add a plain-text field.
    pub fn field(self, column_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.field_element(column_id, Element::text(text))
    }

    /// Add a field with arbitrary markup.
    pub fn field_element(mut self, column_id: impl Into<String>, element: Element) -> Self {
        self.fields.push((column_id.into(), element));
        self
    }
}

impl TableRow for Record {
    fn key(&self) -> String {
        self.key.clone()
    }

    fn cell(&self, column_id: &str) -> Element {
        self.fields
            .iter()
            .find(|(id, _)| id == column_id)
            .map(|(_, element)| element.clone())
            .unwrap_or_else(|| Element::text(""))
    }
}

// =============================================================================
// ResponsiveTable
// =============================================================================

/// The component: columns, rows, a breakpoint, and optional decoration.
///
/// Configuration is builder-style; `mount` binds the matcher to a match
/// source, and `render` produces the current markup shape. Dropping the
/// component releases its subscription.
pub struct ResponsiveTable<R: TableRow> {
    columns: Vec<Column>,
    rows: Vec<R>,
    styling: Option<TableStyling>,
    with_classes: bool,
    matcher: BreakpointMatcher,
}

impl<R: TableRow> ResponsiveTable<R> {
    pub fn new(columns: Vec<Column>, rows: Vec<R>, breakpoint: impl Into<Breakpoint>) -> Self {
        Self {
            columns,
            rows,
            styling: None,
            with_classes: false,
            matcher: BreakpointMatcher::new(breakpoint, false),
        }
    }

    /// Root-element styling value.
    pub fn styling(mut self, styling: TableStyling) -> Self {
        self.styling = Some(styling);
        self
    }

    /// Enable `header-<columnId>` / `row-<rowKey>` class decoration.
    pub fn with_classes(mut self, enabled: bool) -> Self {
        self.with_classes = enabled;
        self
    }

    /// Fallback narrow flag used until (and unless) a source is bound.
    pub fn initial_narrow(self, narrow: bool) -> Self {
        self.matcher.set_fallback(narrow);
        self
    }

    /// Bind the breakpoint matcher to a match source.
    pub fn mount(&mut self, source: Arc<dyn MatchSource>) {
        self.matcher.bind(source);
    }

    /// Release the match source; the layout keeps its last state.
    pub fn unmount(&mut self) {
        self.matcher.unbind();
    }

    /// Swap the breakpoint; the old subscription is released and a new one
    /// established.
    pub fn set_breakpoint(&mut self, breakpoint: impl Into<Breakpoint>) {
        self.matcher.set_breakpoint(breakpoint);
    }

    /// Replace the data rows.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn is_narrow(&self) -> bool {
        self.matcher.is_narrow()
    }

    /// Whether a matcher notification arrived since the last call; the
    /// caller re-renders once per `true`.
    pub fn take_dirty(&self) -> bool {
        self.matcher.take_dirty()
    }

    /// Produce the markup for the current layout.
    pub fn render(&self) -> Element {
        let narrow = self.matcher.is_narrow();
        render::table(
            &self.columns,
            &self.rows,
            self.styling.as_ref(),
            self.with_classes,
            narrow,
        )
    }
}

impl<R: TableRow> std::fmt::Debug for ResponsiveTable<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsiveTable")
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("with_classes", &self.with_classes)
            .field("matcher", &self.matcher)
            .finish()
    }
}
