use super::Element;

/// What an element holds: nothing, a text run, or child elements.
#[derive(Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Children(c) => write!(f, "Children({} elements)", c.len()),
        }
    }
}

impl Content {
    /// Child elements, or an empty slice for text/empty content.
    pub fn children(&self) -> &[Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }
}
