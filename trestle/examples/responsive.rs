//! Responsive Table Example
//!
//! Builds a small staff table, renders it wide, then shrinks the viewport
//! past the breakpoint and renders the stacked narrow layout.

use std::fs::File;
use std::sync::Arc;

use simplelog::{Config, LevelFilter, WriteLogger};
use trestle::prelude::*;
use webdom::to_html;

fn staff() -> Vec<Record> {
    vec![
        Record::new("alice")
            .field("name", "Alice Smith")
            .field("role", "Lead")
            .field("location", "Berlin"),
        Record::new("bob")
            .field("name", "Bob Jones")
            .field("role", "Senior")
            .field("location", "London"),
        Record::new("charlie")
            .field("name", "Charlie Garcia")
            .field("role", "Junior")
            .field("location", "Tokyo"),
    ]
}

fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("trestle-example.log").unwrap(),
    );

    let columns = vec![
        Column::new("name", "Name"),
        Column::new("role", "Role"),
        Column::new("location", "Location"),
    ];

    let source = ViewportSource::new(1280);
    let mut table = ResponsiveTable::new(columns, staff(), 768u32)
        .styling(TableStyling::computed(|args| {
            TableStyling::class_name(if args.narrow { "stacked" } else { "grid" })
        }))
        .with_classes(true);
    table.mount(Arc::new(source.clone()));

    println!("viewport {}px:", source.width());
    println!("{}\n", to_html(&table.render()));

    source.set_width(480);
    if table.take_dirty() {
        println!("viewport {}px:", source.width());
        println!("{}", to_html(&table.render()));
    }
}
