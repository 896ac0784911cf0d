use crate::geom::Point;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum TreeError {
    /// The position lies outside the bounds of the tree.
    OutOfBounds(Point),
    /// No matching item was stored along the path of the given position.
    NotFound,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::OutOfBounds(p) => {
                write!(f, "position {} is outside the bounds of the tree", p)
            }
            TreeError::NotFound => write!(f, "item not found at the given position"),
        }
    }
}

impl std::error::Error for TreeError {}
