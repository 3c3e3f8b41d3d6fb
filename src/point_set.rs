use smallvec::SmallVec;

use crate::geom::{Coord, Point};

/// Unordered set of points with structural equality.
///
/// Rectangle-derived sets hold at most four points, so storage stays inline.
#[derive(Clone, Debug, Default)]
pub struct PointSet<T = i32> {
    points: SmallVec<[Point<T>; 4]>,
}

impl<T: Coord> PointSet<T> {
    pub fn new() -> Self {
        PointSet { points: SmallVec::new() }
    }

    /// Returns false if the point was already present.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        if self.contains(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    #[inline]
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.points.contains(point)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iteration order is insertion order and carries no meaning.
    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// Points in ascending `(x, y)` order, for stable output.
    pub fn to_sorted_vec(&self) -> Vec<Point<T>> {
        let mut out = self.points.to_vec();
        out.sort_unstable();
        out
    }
}

impl<T: Coord> PartialEq for PointSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|p| other.contains(p))
    }
}

impl<T: Coord> Eq for PointSet<T> {}

impl<T: Coord> Extend<Point<T>> for PointSet<T> {
    fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl<T: Coord> FromIterator<Point<T>> for PointSet<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        let mut set = PointSet::new();
        set.extend(iter);
        set
    }
}

impl<T> IntoIterator for PointSet<T> {
    type Item = Point<T>;
    type IntoIter = smallvec::IntoIter<[Point<T>; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PointSet<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
