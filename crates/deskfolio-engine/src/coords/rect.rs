use super::Vec2;

/// Axis-aligned rectangle in logical pixels, origin at the top left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    /// Rectangle spanning two opposite corners, in either order.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = Vec2::new(a.x.min(b.x), a.y.min(b.y));
        let max = Vec2::new(a.x.max(b.x), a.y.max(b.y));
        Self { origin: min, size: max - min }
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Same area with a non-negative size.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::from_corners(self.origin, self.max())
    }

    /// Half-open: the top and left edges are inside, the bottom and right are not.
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let end = r.max();
        (r.origin.x..end.x).contains(&p.x) && (r.origin.y..end.y).contains(&p.y)
    }

    /// Overlap of two rectangles; `None` when they only touch or are apart.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (a, b) = (self.normalized(), other.normalized());
        let (a_end, b_end) = (a.max(), b.max());
        let lo = Vec2::new(a.origin.x.max(b.origin.x), a.origin.y.max(b.origin.y));
        let hi = Vec2::new(a_end.x.min(b_end.x), a_end.y.min(b_end.y));
        (hi.x > lo.x && hi.y > lo.y).then(|| Rect::from_corners(lo, hi))
    }
}
