use deskfolio_core::Size;
use deskfolio_engine::coords::{Rect, Vec2};
use deskfolio_engine::paint::{LinearGradient, Paint};

use crate::painter::Painter;
use crate::theme::Theme;

pub fn paint(p: &mut Painter<'_>, theme: &Theme, screen: Size) {
    let r = Rect::new(0.0, 0.0, screen.width, screen.height);
    let g = LinearGradient::between(
        Vec2::zero(),
        Vec2::new(screen.width * 0.35, screen.height),
        theme.wallpaper_top,
        theme.wallpaper_bottom,
    );
    p.fill_rounded(r, 0.0, Paint::LinearGradient(g), None);
}
