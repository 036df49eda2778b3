mod style;

pub use style::StyleProps;
