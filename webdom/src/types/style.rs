use indexmap::IndexMap;

/// An ordered set of CSS declarations.
///
/// Declaration order is insertion order; setting an existing property
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleProps {
    props: IndexMap<String, String>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing an existing declaration of the same name.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialize as inline CSS: `color: red;` for a single declaration,
    /// declarations joined by single spaces otherwise.
    pub fn css(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.props.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }
}
