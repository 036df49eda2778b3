use std::sync::Arc;

use trestle::prelude::*;
use trestle::styling::resolve;
use webdom::{StyleProps, Tag};

fn columns() -> Vec<Column> {
    vec![Column::new("a", "A"), Column::new("b", "B")]
}

fn rows() -> Vec<Record> {
    vec![
        Record::new("A 1").field("a", "A 1").field("b", "B 1"),
        Record::new("A 2").field("a", "A 2").field("b", "B 2"),
    ]
}

fn narrow_or_wide() -> TableStyling {
    TableStyling::computed(|args| {
        TableStyling::class_name(if args.narrow { "narrow" } else { "wide" })
    })
}

#[test]
fn test_absent_styling_yields_no_attributes() {
    let attrs = resolve(None, false);
    assert!(attrs.class.is_none());
    assert!(attrs.style.is_none());
}

#[test]
fn test_class_name_styling() {
    let styling = TableStyling::class_name("fancy");
    let attrs = resolve(Some(&styling), false);
    assert_eq!(attrs.class.as_deref(), Some("fancy"));
    assert!(attrs.style.is_none());
}

#[test]
fn test_props_styling_yields_style_only() {
    let styling = TableStyling::props(StyleProps::new().set("color", "red"));
    let attrs = resolve(Some(&styling), false);
    assert!(attrs.class.is_none());
    assert_eq!(attrs.style.unwrap().css(), "color: red;");
}

#[test]
fn test_computed_sees_narrow_flag() {
    let styling = narrow_or_wide();
    assert_eq!(resolve(Some(&styling), true).class.as_deref(), Some("narrow"));
    assert_eq!(resolve(Some(&styling), false).class.as_deref(), Some("wide"));
}

#[test]
fn test_computed_may_yield_props() {
    let styling = TableStyling::computed(|args| {
        if args.narrow {
            TableStyling::props(StyleProps::new().set("display", "block"))
        } else {
            TableStyling::class_name("grid")
        }
    });
    let attrs = resolve(Some(&styling), true);
    assert!(attrs.class.is_none());
    assert_eq!(attrs.style.unwrap().get("display"), Some("block"));
}

#[test]
fn test_endless_computed_chain_fails_open() {
    fn endless() -> TableStyling {
        TableStyling::computed(|_| endless())
    }
    let styling = endless();
    let attrs = resolve(Some(&styling), false);
    assert!(attrs.class.is_none());
    assert!(attrs.style.is_none());
}

#[test]
fn test_table_root_gets_class() {
    let mut table =
        ResponsiveTable::new(columns(), rows(), 1000u32).styling(narrow_or_wide());
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    assert_eq!(markup.class.as_deref(), Some("wide"));
    assert!(markup.style.is_none());
}

#[test]
fn test_table_root_gets_style() {
    let mut table = ResponsiveTable::new(columns(), rows(), 3000u32)
        .styling(TableStyling::props(StyleProps::new().set("color", "red")));
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    assert!(markup.class.is_none());
    assert_eq!(markup.style.unwrap().css(), "color: red;");
}

#[test]
fn test_class_updates_when_narrow_flips() {
    let source = ViewportSource::new(1200);
    let mut table =
        ResponsiveTable::new(columns(), rows(), 1000u32).styling(narrow_or_wide());
    table.mount(Arc::new(source.clone()));

    assert_eq!(table.render().class.as_deref(), Some("wide"));
    table.take_dirty();

    source.set_width(900);
    assert!(table.take_dirty());
    let markup = table.render();
    assert_eq!(markup.class.as_deref(), Some("narrow"));
    assert_eq!(markup.count(Tag::TBody), 2);
}

#[test]
fn test_styling_does_not_leak_into_cells() {
    let mut table = ResponsiveTable::new(columns(), rows(), 1000u32)
        .styling(TableStyling::class_name("root-only"));
    table.mount(Arc::new(ViewportSource::new(1200)));

    let markup = table.render();
    assert!(markup
        .find_all(Tag::Td)
        .iter()
        .all(|cell| cell.class.is_none() && cell.style.is_none()));
}
