pub mod frame;
pub mod span;
pub mod style;

pub use frame::{Frame, Line};
pub use span::Span;
pub use style::{Color, Style};
