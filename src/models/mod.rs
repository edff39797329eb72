pub mod center;
pub mod coordinate;

pub use center::{Center, DocumentCategory, RankedCenter, SearchState, Searchable};
pub use coordinate::{Coordinate, CoordinateError};
