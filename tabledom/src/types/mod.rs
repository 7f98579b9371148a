mod classes;
mod color;
mod enums;
mod style;

pub use classes::ClassList;
pub use color::{Color, Rgb};
pub use enums::{TextAlign, TextStyle};
pub use style::Style;
