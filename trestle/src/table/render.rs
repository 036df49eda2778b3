//! The two markup shapes.

use webdom::{Element, Scope};

use super::{Column, TableRow};
use crate::styling::{self, TableStyling};

pub(super) fn table<R: TableRow>(
    columns: &[Column],
    rows: &[R],
    styling: Option<&TableStyling>,
    with_classes: bool,
    narrow: bool,
) -> Element {
    let attrs = styling::resolve(styling, narrow);
    let root = Element::table().class_opt(attrs.class);
    let root = match attrs.style {
        Some(style) => root.style_props(style),
        None => root,
    };

    if narrow {
        root.children(rows.iter().map(|row| narrow_group(columns, row, with_classes)))
    } else {
        root.child(wide_head(columns, with_classes))
            .child(wide_body(columns, rows, with_classes))
    }
}

/// Wide mode: one header row, cells in column order.
fn wide_head(columns: &[Column], with_classes: bool) -> Element {
    Element::thead().child(
        Element::tr().children(columns.iter().map(|column| {
            Element::th()
                .key(&column.id)
                .class_opt(header_class(with_classes, &column.id))
                .scope(Scope::Col)
                .child(column.header.clone())
        })),
    )
}

/// Wide mode: one body section, one row per data row.
fn wide_body<R: TableRow>(columns: &[Column], rows: &[R], with_classes: bool) -> Element {
    Element::tbody().children(rows.iter().map(|row| {
        let key = row.key();
        Element::tr()
            .key(&key)
            .class_opt(row_class(with_classes, &key))
            .children(
                columns
                    .iter()
                    .map(|column| Element::td().key(&column.id).child(row.cell(&column.id))),
            )
    }))
}

/// Narrow mode: an independent body group per data row, one heading/value
/// line per column.
fn narrow_group<R: TableRow>(columns: &[Column], row: &R, with_classes: bool) -> Element {
    let key = row.key();
    Element::tbody()
        .key(&key)
        .children(columns.iter().map(|column| {
            Element::tr()
                .key(&column.id)
                .class_opt(row_class(with_classes, &key))
                .child(
                    Element::th()
                        .class_opt(header_class(with_classes, &column.id))
                        .scope(Scope::Row)
                        .child(column.header.clone()),
                )
                .child(Element::td().child(row.cell(&column.id)))
        }))
}

fn header_class(with_classes: bool, column_id: &str) -> Option<String> {
    with_classes.then(|| format!("header-{column_id}"))
}

fn row_class(with_classes: bool, key: &str) -> Option<String> {
    with_classes.then(|| format!("row-{key}"))
}
