use crate::scene::shapes::{CircleCmd, QuadShape, RectCmd, RoundedRectCmd, TextCmd};

/// Renderer-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Every shape ends up as one SDF quad; text does not.
    pub(crate) fn as_quad(&self) -> Option<QuadShape<'_>> {
        match self {
            DrawCmd::Rect(c) => Some(c.quad()),
            DrawCmd::RoundedRect(c) => Some(c.quad()),
            DrawCmd::Circle(c) => Some(c.quad()),
            DrawCmd::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect, Vec2};
    use crate::paint::{Color, Paint};

    #[test]
    fn circles_become_fully_rounded_squares() {
        let cmd = DrawCmd::Circle(CircleCmd {
            center: Vec2::new(10.0, 20.0),
            radius: 5.0,
            paint: Paint::Solid(Color::white()),
            border: None,
        });
        let q = cmd.as_quad().expect("shape");
        assert_eq!(q.rect, Rect::new(5.0, 15.0, 10.0, 10.0));
        assert_eq!(q.radii, CornerRadii::all(5.0));
    }

    #[test]
    fn plain_rects_have_square_corners() {
        let cmd = DrawCmd::Rect(RectCmd {
            rect: Rect::new(0.0, 0.0, 4.0, 4.0),
            paint: Paint::Solid(Color::black()),
        });
        let q = cmd.as_quad().expect("shape");
        assert_eq!(q.radii, CornerRadii::zero());
        assert!(q.border.is_none());
    }
}
