use std::sync::Arc;

use trestle::prelude::*;
use webdom::Tag;

fn columns() -> Vec<Column> {
    vec![Column::new("a", "A"), Column::new("b", "B")]
}

fn rows() -> Vec<Record> {
    vec![
        Record::new("A 1").field("a", "A 1").field("b", "B 1"),
        Record::new("A 2").field("a", "A 2").field("b", "B 2"),
    ]
}

#[test]
fn test_wide_layout_counts() {
    let mut table = ResponsiveTable::new(columns(), rows(), 300u32);
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    assert_eq!(markup.count(Tag::Table), 1);
    assert_eq!(markup.count(Tag::Tr), 3);
    assert_eq!(markup.count(Tag::THead), 1);
    assert_eq!(markup.count(Tag::TBody), 1);
}

#[test]
fn test_narrow_layout_counts() {
    let mut table = ResponsiveTable::new(columns(), rows(), 3000u32);
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    assert_eq!(markup.count(Tag::Table), 1);
    assert_eq!(markup.count(Tag::Tr), 4);
    assert_eq!(markup.count(Tag::THead), 0);
    assert_eq!(markup.count(Tag::TBody), 2);
}

#[test]
fn test_wide_header_line() {
    let mut table = ResponsiveTable::new(columns(), rows(), 300u32);
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    let heads = markup.find_all(Tag::THead);
    assert_eq!(heads.len(), 1);

    let header_cells = heads[0].find_all(Tag::Th);
    assert_eq!(header_cells.len(), 2);
    assert_eq!(header_cells[0].text_content(), "A");
    assert_eq!(header_cells[1].text_content(), "B");
    assert_eq!(header_cells[0].scope, Some(webdom::Scope::Col));
}

#[test]
fn test_wide_row_identity_and_cell_order() {
    let mut table = ResponsiveTable::new(columns(), rows(), 300u32);
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    let body = markup.find_all(Tag::TBody);
    let data_rows = body[0].find_all(Tag::Tr);
    assert_eq!(data_rows[0].key.as_deref(), Some("A 1"));
    assert_eq!(data_rows[1].key.as_deref(), Some("A 2"));

    let cells = data_rows[0].find_all(Tag::Td);
    assert_eq!(cells[0].text_content(), "A 1");
    assert_eq!(cells[1].text_content(), "B 1");
    assert_eq!(cells[0].key.as_deref(), Some("a"));
}

#[test]
fn test_narrow_groups_pair_headers_with_values() {
    let mut table = ResponsiveTable::new(columns(), rows(), 3000u32);
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    let groups = markup.find_all(Tag::TBody);
    assert_eq!(groups[0].key.as_deref(), Some("A 1"));
    assert_eq!(groups[1].key.as_deref(), Some("A 2"));

    let lines = groups[0].find_all(Tag::Tr);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].key.as_deref(), Some("a"));
    assert_eq!(lines[1].key.as_deref(), Some("b"));

    let heading = &lines[0].find_all(Tag::Th)[0];
    assert_eq!(heading.text_content(), "A");
    assert_eq!(heading.scope, Some(webdom::Scope::Row));
    assert_eq!(lines[0].find_all(Tag::Td)[0].text_content(), "A 1");
}

#[test]
fn test_unmounted_defaults_to_wide() {
    let table = ResponsiveTable::new(columns(), rows(), 300u32);
    assert!(!table.is_narrow());
    assert_eq!(table.render().count(Tag::THead), 1);
}

#[test]
fn test_initial_narrow_without_source() {
    let table = ResponsiveTable::new(columns(), rows(), 300u32).initial_narrow(true);
    assert!(table.is_narrow());
    assert_eq!(table.render().count(Tag::TBody), 2);
}

#[test]
fn test_with_classes_decoration() {
    let mut table = ResponsiveTable::new(columns(), rows(), 300u32).with_classes(true);
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    let header_cells = markup.find_all(Tag::Th);
    assert_eq!(header_cells[0].class.as_deref(), Some("header-a"));
    assert_eq!(header_cells[1].class.as_deref(), Some("header-b"));

    let body = markup.find_all(Tag::TBody);
    let data_rows = body[0].find_all(Tag::Tr);
    assert_eq!(data_rows[0].class.as_deref(), Some("row-A 1"));
}

#[test]
fn test_with_classes_decoration_narrow() {
    let mut table = ResponsiveTable::new(columns(), rows(), 3000u32).with_classes(true);
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    let groups = markup.find_all(Tag::TBody);
    for line in groups[0].find_all(Tag::Tr) {
        assert_eq!(line.class.as_deref(), Some("row-A 1"));
    }
    let heading = &groups[0].find_all(Tag::Th)[0];
    assert_eq!(heading.class.as_deref(), Some("header-a"));
}

#[test]
fn test_classes_disabled_by_default() {
    let mut table = ResponsiveTable::new(columns(), rows(), 300u32);
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    assert!(markup.find_all(Tag::Th).iter().all(|th| th.class.is_none()));
    assert!(markup.find_all(Tag::Tr).iter().all(|tr| tr.class.is_none()));
}

#[test]
fn test_query_breakpoint_wide() {
    let mut table = ResponsiveTable::new(columns(), rows(), "screen and (min-width: 1000px)");
    table.mount(Arc::new(ViewportSource::new(1200)));
    assert!(!table.is_narrow());
    assert_eq!(table.render().count(Tag::THead), 1);
}

#[test]
fn test_breakpoint_change_swaps_layout() {
    let mut table = ResponsiveTable::new(columns(), rows(), 300u32);
    table.mount(Arc::new(ViewportSource::new(1200)));
    assert!(!table.is_narrow());
    table.take_dirty();

    table.set_breakpoint(3000u32);
    assert!(table.take_dirty());
    assert!(table.is_narrow());
    assert_eq!(table.render().count(Tag::TBody), 2);
}

#[test]
fn test_set_rows_changes_body() {
    let mut table = ResponsiveTable::new(columns(), rows(), 300u32);
    table.mount(Arc::new(ViewportSource::new(1200)));

    table.set_rows(vec![Record::new("only").field("a", "x")]);
    let markup = table.render();
    let body = markup.find_all(Tag::TBody);
    assert_eq!(body[0].find_all(Tag::Tr).len(), 1);
}

#[test]
fn test_missing_record_field_renders_empty() {
    let sparse = vec![Record::new("r1").field("a", "A 1")];
    let mut table = ResponsiveTable::new(columns(), sparse, 300u32);
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    let body = markup.find_all(Tag::TBody);
    let cells = body[0].find_all(Tag::Td);
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1].text_content(), "");
}
