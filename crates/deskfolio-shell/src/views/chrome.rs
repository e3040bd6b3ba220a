//! Window decorations: shadow, frame, title bar, traffic lights, grip.

use deskfolio_core::wm::{WindowRecord, CONTROL_DIAMETER};
use deskfolio_core::WindowBody;
use deskfolio_engine::coords::{CornerRadii, Rect, Vec2};
use deskfolio_engine::scene::Border;

use crate::painter::{rect, Painter};
use crate::theme::{Theme, SIZE_TITLE};

const CORNER: f32 = 10.0;
const SHADOW_SPREAD: f32 = 14.0;
const SHADOW_DROP: f32 = 10.0;
/// Horizontal room the title keeps clear of the traffic lights.
const TITLE_INSET: f32 = 84.0;

/// Ease-out fade while a window is opening.
pub fn open_opacity(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

pub fn paint_frame(
    p: &mut Painter<'_>,
    theme: &Theme,
    window: &WindowRecord<WindowBody>,
    focused: bool,
) {
    let frame = window.frame();
    let outer = rect(frame.bounds());

    // Two soft layers stand in for a blurred shadow.
    let spread = if focused { SHADOW_SPREAD } else { SHADOW_SPREAD * 0.5 };
    for (grow, drop) in [(spread, SHADOW_DROP), (spread * 0.4, SHADOW_DROP * 0.5)] {
        let s = Rect::new(
            outer.origin.x - grow,
            outer.origin.y - grow + drop,
            outer.size.x + grow * 2.0,
            outer.size.y + grow * 2.0,
        );
        p.fill_rounded(s, CORNER + grow, theme.shadow, None);
    }

    p.fill_rounded(outer, CORNER, theme.window_bg, Some(Border::new(1.0, theme.window_border)));

    let bar = rect(frame.title_bar());
    p.fill_rounded_corners(bar, CornerRadii::top(CORNER), theme.title_bar, None);
    p.fill_rect(Rect::new(bar.origin.x, bar.max().y - 1.0, bar.size.x, 1.0), theme.divider);

    let lights = [theme.close, theme.minimize, theme.zoom];
    for (i, color) in lights.into_iter().enumerate() {
        let c = rect(frame.control(i)).center();
        let color = if focused { color } else { theme.grip };
        p.fill_circle(c, CONTROL_DIAMETER * 0.5, color, None);
    }

    let font = p.faces.ui;
    let room = (bar.size.x - TITLE_INSET * 2.0).max(0.0);
    let title = p.fit(window.title(), font, SIZE_TITLE, room);
    let size = p.measure(&title, font, SIZE_TITLE, None);
    let color = if focused { theme.title_text } else { theme.text_muted };
    p.text(
        title,
        font,
        SIZE_TITLE,
        color,
        Vec2::new(bar.center().x - size.x * 0.5, bar.center().y - size.y * 0.5),
        None,
    );
}

/// Diagonal dots in the resize handle, drawn over the body.
pub fn paint_grip(p: &mut Painter<'_>, theme: &Theme, window: &WindowRecord<WindowBody>) {
    let h = rect(window.frame().resize_handle());
    let (right, bottom) = (h.max().x - 4.0, h.max().y - 4.0);
    for step in 0..3 {
        for k in 0..=step {
            let x = right - (step - k) as f32 * 4.0;
            let y = bottom - k as f32 * 4.0;
            p.fill_circle(Vec2::new(x, y), 1.0, theme.grip, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_eases_out_and_clamps() {
        assert_eq!(open_opacity(0.0), 0.0);
        assert_eq!(open_opacity(1.0), 1.0);
        assert_eq!(open_opacity(2.0), 1.0);
        assert!(open_opacity(0.5) > 0.5);
    }
}
