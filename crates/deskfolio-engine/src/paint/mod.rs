//! Paint model shared between the shell and the renderer.
//!
//! Colors are linear with premultiplied alpha. Geometry types live in `coords`.

mod color;
mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Fill colors and gradient axis the quad shader consumes.
    ///
    /// Solid fills produce identical colors and a zero-length axis, which the
    /// shader treats as a uniform fill. Gradients with more than two stops
    /// use the first and last.
    pub(crate) fn resolve(&self) -> ([f32; 4], [f32; 4], [f32; 2], [f32; 2]) {
        match self {
            Paint::Solid(c) => {
                let col = c.to_array();
                (col, col, [0.0, 0.0], [0.0, 0.0])
            }
            Paint::LinearGradient(g) => match (g.stops.first(), g.stops.last()) {
                (Some(first), Some(last)) if g.is_valid() => (
                    first.color.to_array(),
                    last.color.to_array(),
                    [g.start.x, g.start.y],
                    [g.end.x, g.end.y],
                ),
                // Unusable gradient: fill with the first stop.
                (Some(first), _) => {
                    let col = first.color.to_array();
                    (col, col, [0.0, 0.0], [0.0, 0.0])
                }
                _ => ([0.0; 4], [0.0; 4], [0.0, 0.0], [0.0, 0.0]),
            },
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn solid_resolves_to_degenerate_axis() {
        let c = Color::from_premul(0.5, 0.25, 0.0, 0.5);
        let (c0, c1, p0, p1) = Paint::solid(c).resolve();
        assert_eq!(c0, c1);
        assert_eq!(p0, p1);
    }

    #[test]
    fn gradient_uses_first_and_last_stop() {
        let red = Color::from_premul(1.0, 0.0, 0.0, 1.0);
        let green = Color::from_premul(0.0, 1.0, 0.0, 1.0);
        let blue = Color::from_premul(0.0, 0.0, 1.0, 1.0);
        let g = LinearGradient::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            vec![ColorStop::new(0.0, red), ColorStop::new(0.5, green), ColorStop::new(1.0, blue)],
        );
        let (c0, c1, p0, p1) = Paint::LinearGradient(g).resolve();
        assert_eq!(c0, red.to_array());
        assert_eq!(c1, blue.to_array());
        assert_eq!(p0, [0.0, 0.0]);
        assert_eq!(p1, [0.0, 100.0]);
    }

    #[test]
    fn single_stop_gradient_is_solid() {
        let c = Color::from_premul(0.2, 0.2, 0.2, 1.0);
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(1.0, 0.0), vec![ColorStop::new(0.0, c)]);
        let (c0, c1, p0, p1) = Paint::LinearGradient(g).resolve();
        assert_eq!((c0, c1), (c.to_array(), c.to_array()));
        assert_eq!(p0, p1);
    }
}
