//! Root-element styling resolution.

use std::sync::Arc;

use webdom::StyleProps;

/// What a computed styling value gets to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylingArgs {
    pub narrow: bool,
}

/// A caller-supplied styling value for the root table element.
///
/// Deliberately permissive: a class name, a style mapping, or a function of
/// the current layout that yields another styling value.
#[derive(Clone)]
pub enum TableStyling {
    /// A class-name string.
    ClassName(String),
    /// An inline style mapping.
    Props(StyleProps),
    /// Computed from the current layout; the result is resolved again.
    Computed(Arc<dyn Fn(&StylingArgs) -> TableStyling + Send + Sync>),
}

impl TableStyling {
    pub fn class_name(class: impl Into<String>) -> Self {
        Self::ClassName(class.into())
    }

    pub fn props(props: StyleProps) -> Self {
        Self::Props(props)
    }

    pub fn computed(f: impl Fn(&StylingArgs) -> TableStyling + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }
}

impl std::fmt::Debug for TableStyling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClassName(class) => write!(f, "ClassName({class:?})"),
            Self::Props(props) => write!(f, "Props({props:?})"),
            Self::Computed(_) => write!(f, "Computed(..)"),
        }
    }
}

/// Resolved root-element attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableAttrs {
    pub class: Option<String>,
    pub style: Option<StyleProps>,
}

/// Computed chains deeper than this resolve to no attributes.
const MAX_COMPUTED_DEPTH: usize = 8;

/// Resolve a styling value for the current layout.
///
/// Absent values and anything unresolvable yield no attributes; styling
/// failures never take the table down with them.
pub fn resolve(styling: Option<&TableStyling>, narrow: bool) -> TableAttrs {
    let Some(styling) = styling else {
        return TableAttrs::default();
    };
    resolve_value(styling.clone(), narrow, 0)
}

fn resolve_value(styling: TableStyling, narrow: bool, depth: usize) -> TableAttrs {
    match styling {
        TableStyling::ClassName(class) => TableAttrs {
            class: Some(class),
            style: None,
        },
        TableStyling::Props(props) => TableAttrs {
            class: None,
            style: Some(props),
        },
        TableStyling::Computed(f) => {
            if depth >= MAX_COMPUTED_DEPTH {
                log::warn!("table styling did not resolve after {MAX_COMPUTED_DEPTH} steps");
                return TableAttrs::default();
            }
            resolve_value(f(&StylingArgs { narrow }), narrow, depth + 1)
        }
    }
}
