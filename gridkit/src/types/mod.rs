mod color;
mod decoration;
mod edges;
mod enums;
mod style;

pub use color::{Color, ParseColorError, Rgb};
pub use decoration::{BorderSide, Borders, Decoration};
pub use edges::Edges;
pub use enums::{Align, Direction, Overflow, Point, Size, TextAlign};
pub use style::{Style, TextStyle};
