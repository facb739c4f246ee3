// File: crates/svgslice-core/src/geometry.rs
// Summary: Lightweight geometry value types (point, size, rect) for slice math.

use std::ops::{Add, Div, Mul, Sub};

/// Position in a top-left origin space; y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero (or negative), i.e. nothing can be drawn into it.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn area(&self) -> f64 { self.width * self.height }

    /// Component-wise division: `(self.width / rhs.width, self.height / rhs.height)`.
    pub fn div_size(self, rhs: Size) -> Size {
        Size::new(self.width / rhs.width, self.height / rhs.height)
    }

    /// Component-wise multiplication.
    pub fn mul_size(self, rhs: Size) -> Size {
        Size::new(self.width * rhs.width, self.height * rhs.height)
    }
}

impl Mul<f64> for Size {
    type Output = Size;
    fn mul(self, k: f64) -> Size { Size::new(self.width * k, self.height * k) }
}

impl Div<f64> for Size {
    type Output = Size;
    fn div(self, k: f64) -> Size { Size::new(self.width / k, self.height / k) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    pub const fn from_size(size: Size) -> Self {
        Self { origin: Point::ZERO, size }
    }

    pub fn x(&self) -> f64 { self.origin.x }
    pub fn y(&self) -> f64 { self.origin.y }
    pub fn width(&self) -> f64 { self.size.width }
    pub fn height(&self) -> f64 { self.size.height }
    pub fn right(&self) -> f64 { self.origin.x + self.size.width }
    pub fn bottom(&self) -> f64 { self.origin.y + self.size.height }

    pub fn is_empty(&self) -> bool { self.size.is_empty() }

    /// Area shared with `other`; zero when they only touch along an edge.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = (self.right().min(other.right()) - self.x().max(other.x())).max(0.0);
        let h = (self.bottom().min(other.bottom()) - self.y().max(other.y())).max(0.0);
        w * h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert!(!r.is_empty());
        assert!(Rect::from_xywh(5.0, 5.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn intersection_of_adjacent_rects_is_zero() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&b), 0.0);
        let c = Rect::from_xywh(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&c), 25.0);
    }

    #[test]
    fn size_component_ops() {
        let s = Size::new(100.0, 50.0);
        assert_eq!(s / 2.0, Size::new(50.0, 25.0));
        assert_eq!(s.div_size(Size::new(10.0, 5.0)), Size::new(10.0, 10.0));
        assert_eq!(Point::new(3.0, 4.0) - Point::new(1.0, 1.0), Point::new(2.0, 3.0));
    }
}
