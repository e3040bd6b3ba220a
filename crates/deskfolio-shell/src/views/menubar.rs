use deskfolio_core::clock::{self, Clock};
use deskfolio_core::menubar::{MenuBar, MenuEntry, MENUS};
use deskfolio_core::Desktop;
use deskfolio_engine::coords::{Rect, Vec2};
use deskfolio_engine::scene::Border;

use crate::painter::{rect, Painter};
use crate::theme::{Theme, SIZE_BODY};

const CLOCK_MARGIN: f32 = 14.0;

pub fn paint<C: Clock>(p: &mut Painter<'_>, theme: &Theme, desktop: &Desktop<C>) {
    let screen = desktop.screen();
    let bar = rect(MenuBar::bounds(screen.width));
    p.fill_rect(bar, theme.menubar_bg);

    let font = p.faces.ui;
    let line = p.line_height(font, SIZE_BODY);
    let text_y = bar.center().y - line * 0.5;
    let open = desktop.menubar().open_menu();

    for (i, (menu, title)) in MENUS.iter().zip(MenuBar::titles()).enumerate() {
        let r = rect(title);
        if open == Some(i) {
            p.fill_rounded(Rect::new(r.origin.x, r.origin.y + 3.0, r.size.x, r.size.y - 6.0), 4.0, theme.hover, None);
        }
        if menu.is_apple() {
            p.fill_circle(r.center(), 6.0, theme.menubar_text, None);
            continue;
        }
        let w = p.measure(menu.title, font, SIZE_BODY, None).x;
        p.text(menu.title, font, SIZE_BODY, theme.menubar_text, Vec2::new(r.center().x - w * 0.5, text_y), None);
    }

    let now = desktop.clock().now();
    let stamp = format!("{}  {}", clock::menubar_date(now), clock::menubar_time(now));
    let w = p.measure(&stamp, font, SIZE_BODY, None).x;
    p.text(stamp, font, SIZE_BODY, theme.menubar_text, Vec2::new(bar.max().x - CLOCK_MARGIN - w, text_y), None);

    if let Some(i) = open {
        dropdown(p, theme, i);
    }
}

fn dropdown(p: &mut Painter<'_>, theme: &Theme, index: usize) {
    let Some(panel) = MenuBar::dropdown(index) else {
        return;
    };
    p.fill_rounded(rect(panel), 8.0, theme.dropdown_bg, Some(Border::new(1.0, theme.window_border)));

    let font = p.faces.ui;
    let line = p.line_height(font, SIZE_BODY);
    for (entry, row) in MenuBar::rows(index) {
        let r = rect(row);
        match entry {
            MenuEntry::Separator => {
                p.fill_rect(Rect::new(r.origin.x + 10.0, r.center().y, r.size.x - 20.0, 1.0), theme.divider);
            }
            MenuEntry::Item { label, command } => {
                let hi = Rect::new(r.origin.x + 4.0, r.origin.y, r.size.x - 8.0, r.size.y);
                let hovered = p.is_hovered(hi);
                if hovered {
                    p.fill_rounded(hi, 4.0, theme.selection, None);
                }
                let color = match (hovered, command.is_some()) {
                    (true, _) => theme.selection_text,
                    (false, true) => theme.text,
                    (false, false) => theme.text_muted,
                };
                p.text(label, font, SIZE_BODY, color, Vec2::new(r.origin.x + 14.0, r.center().y - line * 0.5), None);
            }
        }
    }
}
