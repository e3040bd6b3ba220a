use deskfolio_core::clock::{self, Clock};
use deskfolio_core::Size;
use deskfolio_engine::coords::{Rect, Vec2};

use crate::painter::Painter;
use crate::theme::{Theme, SIZE_BODY};

const TIME_SIZE: f32 = 84.0;
const DATE_SIZE: f32 = 22.0;
const AVATAR_RADIUS: f32 = 36.0;

/// Lock overlay faded to `opacity`.
pub fn paint(p: &mut Painter<'_>, theme: &Theme, time_source: &impl Clock, opacity: f32, screen: Size) {
    let previous = p.set_opacity(opacity);
    let font = p.faces.ui;
    let cx = screen.width * 0.5;

    p.fill_rect(Rect::new(0.0, 0.0, screen.width, screen.height), theme.lock_veil);

    let now = time_source.now();
    let date = clock::lock_date(now);
    let time = clock::lock_time(now);

    let mut y = screen.height * 0.12;
    let dw = p.measure(&date, font, DATE_SIZE, None);
    p.text(date, font, DATE_SIZE, theme.lock_text, Vec2::new(cx - dw.x * 0.5, y), None);
    y += dw.y + 4.0;
    let tw = p.measure(&time, font, TIME_SIZE, None);
    p.text(time, font, TIME_SIZE, theme.lock_text, Vec2::new(cx - tw.x * 0.5, y), None);

    let avatar = Vec2::new(cx, screen.height * 0.78);
    p.fill_circle(avatar, AVATAR_RADIUS, theme.field_bg, None);
    let hint = "Click to unlock";
    let hw = p.measure(hint, font, SIZE_BODY, None).x;
    p.text(hint, font, SIZE_BODY, theme.lock_text, Vec2::new(cx - hw * 0.5, avatar.y + AVATAR_RADIUS + 14.0), None);

    p.set_opacity(previous);
}
