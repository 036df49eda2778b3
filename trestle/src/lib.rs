pub mod breakpoint;
pub mod matcher;
pub mod query;
pub mod source;
pub mod styling;
pub mod table;
pub mod viewport;

pub use breakpoint::Breakpoint;
pub use matcher::BreakpointMatcher;

pub mod prelude {
    pub use crate::breakpoint::Breakpoint;
    pub use crate::matcher::BreakpointMatcher;
    pub use crate::query::{MediaQuery, MediaType, QueryError, Viewport};
    pub use crate::source::{Listener, MatchSource, Subscription};
    pub use crate::styling::{StylingArgs, TableAttrs, TableStyling};
    pub use crate::table::{Column, Record, ResponsiveTable, TableRow};
    pub use crate::viewport::ViewportSource;
}
