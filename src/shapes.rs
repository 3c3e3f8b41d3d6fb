//! Spatial relationships between pairs of rectangles.
//!
//! All comparisons assume the y-up convention documented on [`Rectangle`]:
//! "up" edges have the larger `y`, "right" edges the larger `x`.

use crate::geom::{Coord, Point, Rectangle};
use crate::point_set::PointSet;

/// Coarse classification of how two rectangles relate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// One encloses the other (inclusive of identical rectangles).
    Containment,
    /// Overlap with nonzero area, neither enclosing the other.
    Intersection,
    /// Touching along an edge or at a corner without overlapping area.
    Adjacency,
    Disjoint,
}

impl Relationship {
    /// Lowercase name, as exposed to Python.
    pub fn name(&self) -> &'static str {
        match self {
            Relationship::Containment => "containment",
            Relationship::Intersection => "intersection",
            Relationship::Adjacency => "adjacency",
            Relationship::Disjoint => "disjoint",
        }
    }
}

/// True if one rectangle lies entirely inside the other, edges inclusive.
///
/// A missing rectangle is never contained and never contains.
pub fn is_containment<T: Coord>(a: Option<&Rectangle<T>>, b: Option<&Rectangle<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => contains(a, b),
        _ => false,
    }
}

fn contains<T: Coord>(a: &Rectangle<T>, b: &Rectangle<T>) -> bool {
    if a == b {
        return true;
    }

    // Equal areas resolve to `b` as the bigger one.
    let (bigger, smaller) = if a.area() > b.area() { (a, b) } else { (b, a) };

    let (s_ul, s_dr) = (smaller.up_left(), smaller.down_right());
    let (b_ul, b_dr) = (bigger.up_left(), bigger.down_right());
    s_ul.x >= b_ul.x && s_ul.y <= b_ul.y && s_dr.x <= b_dr.x && s_dr.y >= b_dr.y
}

/// True if the rectangles share a region of nonzero area.
///
/// Rectangles that only touch along an edge or at a corner do not intersect.
pub fn is_intersection<T: Coord>(a: &Rectangle<T>, b: &Rectangle<T>) -> bool {
    let below = a.up_left().y <= b.down_left().y;
    let left_of = a.up_right().x <= b.up_left().x;
    let above = a.down_right().y >= b.up_right().y;
    let right_of = a.down_left().x >= b.down_right().x;
    !(below || left_of || above || right_of)
}

/// True if an edge of `a` lies on an edge of `b` with overlapping extent.
///
/// A single shared corner counts. Intersecting rectangles are never adjacent.
pub fn is_adjacency<T: Coord>(a: &Rectangle<T>, b: &Rectangle<T>) -> bool {
    let (a_ul, a_ur, a_dr, a_dl) = (a.up_left(), a.up_right(), a.down_right(), a.down_left());
    let (b_ul, b_ur, b_dr, b_dl) = (b.up_left(), b.up_right(), b.down_right(), b.down_left());

    let top = a_ul.y == b_dl.y && is_overlap(a_ul.x, a_ur.x, b_dl.x, b_dr.x);
    let right = a_ur.x == b_dl.x && is_overlap(a_dr.y, a_ur.y, b_dl.y, b_ul.y);
    let bottom = a_dr.y == b_ur.y && is_overlap(a_dl.x, a_dr.x, b_dl.x, b_dr.x);
    let left = a_dl.x == b_ur.x && is_overlap(a_dl.y, a_ul.y, b_dr.y, b_ur.y);

    top || right || bottom || left
}

/// Closed-interval overlap of `[s1, e1]` and `[s2, e2]`; requires `s <= e`.
///
/// Intervals touching at a single value overlap.
#[inline]
pub fn is_overlap<T: Coord>(s1: T, e1: T, s2: T, e2: T) -> bool {
    s2 <= e1 && s1 <= e2
}

/// The rectangle covering exactly the overlapping region, if any.
pub fn intersection_rectangle<T: Coord>(a: &Rectangle<T>, b: &Rectangle<T>) -> Option<Rectangle<T>> {
    if !is_intersection(a, b) {
        return None;
    }

    let (a_ul, a_dr) = (a.up_left(), a.down_right());
    let (b_ul, b_dr) = (b.up_left(), b.down_right());
    let up_left = Point::new(a_ul.x.max(b_ul.x), a_ul.y.min(b_ul.y));
    let down_right = Point::new(a_dr.x.min(b_dr.x), a_dr.y.max(b_dr.y));

    Some(Rectangle::from_corners_unchecked(up_left, down_right))
}

/// Points where the edges of `a` and `b` cross.
///
/// These are the corners of the intersection rectangle that are not corners of
/// either input. Collinear edges can leave a single point. Empty when the
/// rectangles do not intersect, and also when every corner of the overlap
/// coincides with an input corner.
pub fn intersection_points<T: Coord>(a: &Rectangle<T>, b: &Rectangle<T>) -> PointSet<T> {
    let Some(overlap) = intersection_rectangle(a, b) else {
        return PointSet::new();
    };
    log::trace!("intersection of {a} and {b} is {overlap}");

    let (a_vertices, b_vertices) = (a.vertices(), b.vertices());
    overlap
        .vertices()
        .into_iter()
        .filter(|p| !a_vertices.contains(p) && !b_vertices.contains(p))
        .collect()
}

/// Classifies the pair, checking containment, intersection, then adjacency.
pub fn relationship<T: Coord>(a: &Rectangle<T>, b: &Rectangle<T>) -> Relationship {
    if contains(a, b) {
        Relationship::Containment
    } else if is_intersection(a, b) {
        Relationship::Intersection
    } else if is_adjacency(a, b) {
        Relationship::Adjacency
    } else {
        Relationship::Disjoint
    }
}

impl<T: Coord> Rectangle<T> {
    /// See [`is_containment`].
    pub fn is_containment(&self, other: &Rectangle<T>) -> bool {
        contains(self, other)
    }

    /// See [`is_intersection`].
    pub fn intersects(&self, other: &Rectangle<T>) -> bool {
        is_intersection(self, other)
    }

    /// See [`is_adjacency`].
    pub fn is_adjacent(&self, other: &Rectangle<T>) -> bool {
        is_adjacency(self, other)
    }

    /// See [`intersection_rectangle`].
    pub fn intersection(&self, other: &Rectangle<T>) -> Option<Rectangle<T>> {
        intersection_rectangle(self, other)
    }

    /// See [`intersection_points`].
    pub fn intersection_points(&self, other: &Rectangle<T>) -> PointSet<T> {
        intersection_points(self, other)
    }

    /// See [`relationship`].
    pub fn relationship(&self, other: &Rectangle<T>) -> Relationship {
        relationship(self, other)
    }
}
