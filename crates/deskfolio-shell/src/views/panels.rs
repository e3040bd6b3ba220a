//! Static panels hosted by Finder windows.

use deskfolio_core::panels::{ActivityKind, Panel, ABOUT, ACTIVITIES, CAREER, CONTACT};
use deskfolio_engine::coords::{Rect, Vec2};
use deskfolio_engine::paint::Color;
use deskfolio_engine::scene::Border;

use super::{chips, wrapped, BodyOut};
use crate::hit::BodyAction;
use crate::painter::Painter;
use crate::theme::{Theme, SIZE_BODY, SIZE_HEADING, SIZE_SMALL};

const PAD: f32 = 28.0;
const SUBHEADING: f32 = 16.0;
const TARGET_ROW: f32 = 44.0;

/// Paints `panel` scrolled by `scroll`; returns its maximum scroll.
pub fn paint(
    p: &mut Painter<'_>,
    theme: &Theme,
    panel: Panel,
    scroll: f32,
    body: Rect,
    out: &mut BodyOut<'_>,
) -> f32 {
    let width = (body.size.x - PAD * 2.0).max(1.0);
    let origin = Vec2::new(body.origin.x + PAD, body.origin.y + PAD - scroll);
    let font = p.faces.ui;

    let mut y = origin.y;
    y += wrapped(p, panel.heading(), font, SIZE_HEADING, theme.text, Vec2::new(origin.x, y), width);
    y += 16.0;

    let at = Vec2::new(origin.x, y);
    y += match panel {
        Panel::About => about(p, theme, at, width),
        Panel::Activities => activities(p, theme, at, width),
        Panel::Career => career(p, theme, at, width),
        Panel::Links | Panel::Contact => targets(p, theme, panel, at, width, out),
    };

    if panel == Panel::Contact {
        let line = p.line_height(font, SIZE_BODY);
        p.text(CONTACT.location, font, SIZE_BODY, theme.text_muted, Vec2::new(origin.x, y + 8.0), None);
        y += line + 8.0;
    }

    let content = y - origin.y + PAD * 2.0;
    (content - body.size.y).max(0.0)
}

fn subheading(p: &mut Painter<'_>, theme: &Theme, text: &str, at: Vec2) -> f32 {
    let font = p.faces.ui;
    p.text(text, font, SUBHEADING, theme.text, at, None);
    p.line_height(font, SUBHEADING) + 6.0
}

// ── panels ────────────────────────────────────────────────────────────────

fn about(p: &mut Painter<'_>, theme: &Theme, at: Vec2, width: f32) -> f32 {
    let font = p.faces.ui;
    let x = at.x;
    let mut y = at.y;

    y += wrapped(p, ABOUT.name, font, 18.0, theme.text, Vec2::new(x, y), width);
    y += wrapped(p, ABOUT.role, font, SIZE_BODY, theme.text_muted, Vec2::new(x, y), width) + 12.0;

    for para in ABOUT.intro {
        y += wrapped(p, para, font, SIZE_BODY, theme.text, Vec2::new(x, y), width) + 8.0;
    }

    y += 8.0;
    y += subheading(p, theme, "Tech", Vec2::new(x, y));
    y += chips(p, theme, ABOUT.tech, Vec2::new(x, y), width) + 16.0;

    y += subheading(p, theme, "Strengths", Vec2::new(x, y));
    let line = p.line_height(font, SIZE_BODY);
    for s in ABOUT.strengths {
        p.fill_circle(Vec2::new(x + 4.0, y + line * 0.5), 2.0, theme.text_muted, None);
        y += wrapped(p, s, font, SIZE_BODY, theme.text, Vec2::new(x + 14.0, y), width - 14.0) + 4.0;
    }

    y - at.y
}

fn badge_color(theme: &Theme, kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::Event => theme.link,
        ActivityKind::Work => theme.zoom,
        ActivityKind::Award => theme.minimize,
    }
}

fn activities(p: &mut Painter<'_>, theme: &Theme, at: Vec2, width: f32) -> f32 {
    let font = p.faces.ui;
    let x = at.x;
    let mut y = at.y;

    for year in ACTIVITIES {
        y += subheading(p, theme, year.year, Vec2::new(x, y));
        for item in year.items {
            let line = p.line_height(font, SIZE_BODY);
            p.fill_circle(Vec2::new(x + 5.0, y + line * 0.5), 4.0, badge_color(theme, item.kind), None);
            y += wrapped(p, item.title, font, SIZE_BODY, theme.text, Vec2::new(x + 18.0, y), width - 18.0);
            y += wrapped(
                p,
                item.description,
                font,
                SIZE_SMALL,
                theme.text_muted,
                Vec2::new(x + 18.0, y + 2.0),
                width - 18.0,
            ) + 10.0;
        }
        y += 8.0;
    }

    y - at.y
}

fn career(p: &mut Painter<'_>, theme: &Theme, at: Vec2, width: f32) -> f32 {
    let font = p.faces.ui;
    let x = at.x;
    let mut y = at.y;

    for entry in CAREER {
        y += subheading(p, theme, entry.company, Vec2::new(x, y));
        let meta = format!("{} · {}", entry.position, entry.period);
        y += wrapped(p, &meta, font, SIZE_SMALL, theme.text_muted, Vec2::new(x, y), width) + 6.0;
        y += wrapped(p, entry.description, font, SIZE_BODY, theme.text, Vec2::new(x, y), width) + 8.0;
        y += chips(p, theme, entry.tech, Vec2::new(x, y), width) + 20.0;
    }

    y - at.y
}

fn targets(
    p: &mut Painter<'_>,
    theme: &Theme,
    panel: Panel,
    at: Vec2,
    width: f32,
    out: &mut BodyOut<'_>,
) -> f32 {
    let font = p.faces.ui;
    let mut y = at.y;

    for target in panel.targets() {
        let row = Rect::new(at.x, y, width, TARGET_ROW - 8.0);
        let fill = if p.is_hovered(row) { theme.chip_bg } else { theme.sidebar_bg };
        p.fill_rounded(row, 8.0, fill, Some(Border::new(1.0, theme.divider)));

        let label = p.fit(target.label, font, SIZE_BODY, width * 0.5);
        p.text(label, font, SIZE_BODY, theme.text, Vec2::new(row.origin.x + 12.0, y + 10.0), None);
        let url = p.fit(&target.url, font, SIZE_SMALL, width * 0.45 - 12.0);
        let uw = p.measure(&url, font, SIZE_SMALL, None).x;
        p.text(url, font, SIZE_SMALL, theme.link, Vec2::new(row.max().x - 12.0 - uw, y + 12.0), None);

        out.click(row, BodyAction::OpenUrl(target.url));
        y += TARGET_ROW;
    }

    y - at.y
}
