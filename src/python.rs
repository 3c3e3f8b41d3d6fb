// PyO3 boundary. The geometry core stays pure Rust; conversions to Python
// types and exceptions happen only here.

use std::collections::HashSet;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::shapes;
use crate::{GeometryError, Point, PointSet, Rectangle};

impl From<GeometryError> for PyErr {
    fn from(err: GeometryError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

#[pyclass(name = "Point", module = "gridrect", frozen, eq, hash)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PyPoint(Point<i64>);

#[pymethods]
impl PyPoint {
    #[new]
    fn new(x: i64, y: i64) -> Self {
        PyPoint(Point::new(x, y))
    }

    #[getter]
    fn x(&self) -> i64 {
        self.0.x
    }

    #[getter]
    fn y(&self) -> i64 {
        self.0.y
    }

    fn __repr__(&self) -> String {
        format!("Point({}, {})", self.0.x, self.0.y)
    }
}

#[pyclass(name = "Rectangle", module = "gridrect", frozen, eq, hash)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PyRectangle(Rectangle<i64>);

#[pymethods]
impl PyRectangle {
    /// Raises ValueError when width or height is not positive, or the
    /// rectangle overflows 64-bit coordinates.
    #[new]
    fn new(x: i64, y: i64, width: i64, height: i64) -> PyResult<Self> {
        Ok(PyRectangle(Rectangle::new(x, y, width, height)?))
    }

    #[getter]
    fn x(&self) -> i64 {
        self.0.x()
    }

    #[getter]
    fn y(&self) -> i64 {
        self.0.y()
    }

    #[getter]
    fn width(&self) -> i64 {
        self.0.width()
    }

    #[getter]
    fn height(&self) -> i64 {
        self.0.height()
    }

    fn up_left(&self) -> PyPoint {
        PyPoint(self.0.up_left())
    }

    fn up_right(&self) -> PyPoint {
        PyPoint(self.0.up_right())
    }

    fn down_right(&self) -> PyPoint {
        PyPoint(self.0.down_right())
    }

    fn down_left(&self) -> PyPoint {
        PyPoint(self.0.down_left())
    }

    fn vertices(&self) -> HashSet<PyPoint> {
        to_py_set(self.0.vertices())
    }

    fn area(&self) -> i64 {
        self.0.area()
    }

    fn __repr__(&self) -> String {
        format!(
            "Rectangle({}, {}, {}, {})",
            self.0.x(),
            self.0.y(),
            self.0.width(),
            self.0.height()
        )
    }
}

fn to_py_set(points: PointSet<i64>) -> HashSet<PyPoint> {
    points.into_iter().map(PyPoint).collect()
}

/// Accepts None for either argument, which yields False.
#[pyfunction]
#[pyo3(signature = (a, b))]
fn is_containment(a: Option<PyRectangle>, b: Option<PyRectangle>) -> bool {
    shapes::is_containment(a.as_ref().map(|r| &r.0), b.as_ref().map(|r| &r.0))
}

#[pyfunction]
fn is_intersection(a: PyRectangle, b: PyRectangle) -> bool {
    shapes::is_intersection(&a.0, &b.0)
}

#[pyfunction]
fn is_adjacency(a: PyRectangle, b: PyRectangle) -> bool {
    shapes::is_adjacency(&a.0, &b.0)
}

#[pyfunction]
fn is_overlap(s1: i64, e1: i64, s2: i64, e2: i64) -> bool {
    shapes::is_overlap(s1, e1, s2, e2)
}

#[pyfunction]
fn intersection_rectangle(a: PyRectangle, b: PyRectangle) -> Option<PyRectangle> {
    shapes::intersection_rectangle(&a.0, &b.0).map(PyRectangle)
}

#[pyfunction]
fn intersection_points(a: PyRectangle, b: PyRectangle) -> HashSet<PyPoint> {
    to_py_set(shapes::intersection_points(&a.0, &b.0))
}

/// One of "containment", "intersection", "adjacency", "disjoint".
#[pyfunction]
fn relationship(a: PyRectangle, b: PyRectangle) -> &'static str {
    shapes::relationship(&a.0, &b.0).name()
}

#[pymodule]
fn gridrect(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPoint>()?;
    m.add_class::<PyRectangle>()?;
    m.add_function(wrap_pyfunction!(is_containment, m)?)?;
    m.add_function(wrap_pyfunction!(is_intersection, m)?)?;
    m.add_function(wrap_pyfunction!(is_adjacency, m)?)?;
    m.add_function(wrap_pyfunction!(is_overlap, m)?)?;
    m.add_function(wrap_pyfunction!(intersection_rectangle, m)?)?;
    m.add_function(wrap_pyfunction!(intersection_points, m)?)?;
    m.add_function(wrap_pyfunction!(relationship, m)?)?;
    Ok(())
}
