//! Relationships between axis-aligned rectangles on an integer grid:
//! containment, intersection, adjacency and edge crossing points.
//!
//! ```
//! use gridrect::{intersection_points, is_intersection, Point, Rectangle};
//!
//! let a = Rectangle::new(1, 4, 3, 3)?;
//! let b = Rectangle::new(0, 3, 5, 1)?;
//! assert!(is_intersection(&a, &b));
//! assert!(intersection_points(&a, &b).contains(&Point::new(4, 2)));
//! # Ok::<(), gridrect::GeometryError>(())
//! ```

mod error;
mod geom;
mod point_set;
pub mod shapes;

#[cfg(feature = "python")]
mod python;

pub use error::{Dimension, GeometryError, GeometryResult};
pub use geom::{Coord, Point, Rectangle};
pub use point_set::PointSet;
pub use shapes::{
    intersection_points, intersection_rectangle, is_adjacency, is_containment, is_intersection,
    is_overlap, relationship, Relationship,
};
