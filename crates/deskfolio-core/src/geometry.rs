//! Desktop-space geometry.
//!
//! Same convention as the renderer: logical pixels, origin top-left, +Y down.
//! Kept separate from the engine's `coords` so this crate stays GPU-free.

use core::ops::{Add, Sub};

/// A position on the desktop in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum, used to apply minimum-size floors.
    #[inline]
    pub fn max(self, floor: Size) -> Size {
        Size::new(self.width.max(floor.width), self.height.max(floor.height))
    }
}

/// Axis-aligned rectangle: origin plus size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < self.right() && p.y < self.bottom()
    }

    /// Translates `p` into this rectangle's local space.
    #[inline]
    pub fn to_local(self, p: Point) -> Point {
        p - self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(a - b, Point::new(7.0, 15.0));
        assert_eq!(a + b, Point::new(13.0, 25.0));
    }

    #[test]
    fn size_max_applies_floor_per_axis() {
        let s = Size::new(300.0, 900.0).max(Size::new(600.0, 400.0));
        assert_eq!(s, Size::new(600.0, 900.0));
    }

    #[test]
    fn contains_top_left_inclusive_bottom_right_exclusive() {
        let b = Bounds::new(10.0, 10.0, 20.0, 20.0);
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(b.contains(Point::new(29.9, 29.9)));
        assert!(!b.contains(Point::new(30.0, 30.0)));
        assert!(!b.contains(Point::new(9.0, 15.0)));
    }

    #[test]
    fn to_local_subtracts_origin() {
        let b = Bounds::new(100.0, 50.0, 10.0, 10.0);
        assert_eq!(b.to_local(Point::new(105.0, 52.0)), Point::new(5.0, 2.0));
    }
}
