use super::Content;
use crate::types::StyleProps;

/// The table-shaped tag vocabulary.
///
/// `Fragment` has no tag name: it renders as bare text (or as its children
/// spliced in place) and exists so cell values can be plain text runs or
/// grouped markup without an extra wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Fragment,
    Table,
    THead,
    TBody,
    Tr,
    Th,
    Td,
}

impl Tag {
    /// The HTML tag name, or `None` for fragments.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Fragment => None,
            Self::Table => Some("table"),
            Self::THead => Some("thead"),
            Self::TBody => Some("tbody"),
            Self::Tr => Some("tr"),
            Self::Th => Some("th"),
            Self::Td => Some("td"),
        }
    }
}

/// The `scope` attribute of a heading cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Row,
    Col,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Col => "col",
        }
    }
}

/// A node in the markup tree.
///
/// Elements are built with chained setters and handed off as a declarative
/// description; the consumer (a reconciler, the HTML writer) decides what to
/// do with them. `key` is reconciliation identity and never reaches output.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    pub key: Option<String>,
    pub class: Option<String>,
    pub style: Option<StyleProps>,
    pub scope: Option<Scope>,
    pub content: Content,
}

impl Element {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            key: None,
            class: None,
            style: None,
            scope: None,
            content: Content::None,
        }
    }

    /// Create a bare text fragment.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Fragment)
        }
    }

    /// Create an empty fragment (renders nothing).
    pub fn fragment() -> Self {
        Self::new(Tag::Fragment)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::TBody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th() -> Self {
        Self::new(Tag::Th)
    }

    pub fn td() -> Self {
        Self::new(Tag::Td)
    }

    // Identity

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    // Attributes

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the class attribute only when one is given.
    pub fn class_opt(mut self, class: Option<String>) -> Self {
        self.class = class;
        self
    }

    pub fn style_props(mut self, style: StyleProps) -> Self {
        self.style = Some(style);
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    // Children

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Queries

    /// Direct children, empty for text or empty content.
    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    /// Collect all descendants (including self) with the given tag,
    /// depth-first in document order.
    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: Tag, found: &mut Vec<&'a Element>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in self.content.children() {
            child.collect_tag(tag, found);
        }
    }

    /// Count descendants (including self) with the given tag.
    pub fn count(&self, tag: Tag) -> usize {
        let own = usize::from(self.tag == tag);
        own + self
            .content
            .children()
            .iter()
            .map(|c| c.count(tag))
            .sum::<usize>()
    }

    /// Concatenated text of this element and all descendants, in
    /// document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
