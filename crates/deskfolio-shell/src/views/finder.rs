//! Finder body: sidebar, three columns and the detail pane.

use deskfolio_core::content::{ContentTree, Detail, FileItem, ItemKind};
use deskfolio_core::finder::{Column, FinderState};
use deskfolio_core::markdown;
use deskfolio_engine::coords::{Rect, Vec2};

use super::{chips, markdown as blocks, BodyOut};
use crate::hit::BodyAction;
use crate::painter::Painter;
use crate::theme::{Theme, SIZE_BODY, SIZE_HEADING, SIZE_SMALL};

const SIDEBAR_WIDTH: f32 = 180.0;
const COLUMN_WIDTH: f32 = 190.0;
const ROW_HEIGHT: f32 = 24.0;
const PAD: f32 = 10.0;
const DETAIL_PAD: f32 = 20.0;

/// Paints a Finder body; returns the detail pane's maximum scroll.
pub fn paint(
    p: &mut Painter<'_>,
    theme: &Theme,
    tree: &ContentTree,
    state: &FinderState,
    body: Rect,
    out: &mut BodyOut<'_>,
) -> f32 {
    sidebar(p, theme, tree, state, body, out);

    let mut x = body.origin.x + SIDEBAR_WIDTH;
    for column in Column::ALL {
        let r = Rect::new(x, body.origin.y, COLUMN_WIDTH, body.size.y);
        entries(p, theme, column, state.entries(tree, column), state.selected(column), r, out);
        p.fill_rect(Rect::new(r.max().x - 1.0, r.origin.y, 1.0, r.size.y), theme.divider);
        x += COLUMN_WIDTH;
    }

    let pane = Rect::new(x, body.origin.y, body.max().x - x, body.size.y);
    match state.detail(tree) {
        Some(d) if pane.size.x > DETAIL_PAD * 2.0 => detail(p, theme, d, state.detail_scroll, pane, out),
        _ => 0.0,
    }
}

// ── sidebar ───────────────────────────────────────────────────────────────

fn sidebar(
    p: &mut Painter<'_>,
    theme: &Theme,
    tree: &ContentTree,
    state: &FinderState,
    body: Rect,
    out: &mut BodyOut<'_>,
) {
    let r = Rect::new(body.origin.x, body.origin.y, SIDEBAR_WIDTH, body.size.y);
    p.fill_rect(r, theme.sidebar_bg);
    p.fill_rect(Rect::new(r.max().x - 1.0, r.origin.y, 1.0, r.size.y), theme.divider);

    let font = p.faces.ui;
    let mut y = r.origin.y + PAD;
    for section in tree.sidebar() {
        p.text(section.title, font, SIZE_SMALL, theme.sidebar_heading, Vec2::new(r.origin.x + PAD + 4.0, y), None);
        y += p.line_height(font, SIZE_SMALL) + 4.0;

        for &label in section.labels {
            let row = Rect::new(r.origin.x + 6.0, y, SIDEBAR_WIDTH - 12.0, ROW_HEIGHT);
            let current = state.is_current(label);
            if current {
                p.fill_rounded(row, 5.0, theme.chip_bg, None);
            } else if p.is_hovered(row) {
                p.fill_rounded(row, 5.0, theme.hover, None);
            }
            let text = p.fit(label, font, SIZE_BODY, row.size.x - 16.0);
            p.text(text, font, SIZE_BODY, theme.text, Vec2::new(row.origin.x + 8.0, y + 4.0), None);
            out.click(row, BodyAction::SelectCategory(label));
            y += ROW_HEIGHT;
        }
        y += PAD;
    }
}

// ── columns ───────────────────────────────────────────────────────────────

fn marker(kind: ItemKind) -> Option<&'static str> {
    match kind {
        ItemKind::Folder => Some("›"),
        ItemKind::Link => Some("↗"),
        ItemKind::File => None,
    }
}

fn entries(
    p: &mut Painter<'_>,
    theme: &Theme,
    column: Column,
    items: &'static [FileItem],
    selected: Option<&str>,
    r: Rect,
    out: &mut BodyOut<'_>,
) {
    let font = p.faces.ui;
    let mut y = r.origin.y + 6.0;
    for item in items {
        let row = Rect::new(r.origin.x + 4.0, y, r.size.x - 8.0, ROW_HEIGHT);
        let is_selected = selected == Some(item.id);
        if is_selected {
            p.fill_rounded(row, 5.0, theme.selection, None);
        } else if p.is_hovered(row) {
            p.fill_rounded(row, 5.0, theme.hover, None);
        }

        let color = match (is_selected, item.kind) {
            (true, _) => theme.selection_text,
            (false, ItemKind::Link) => theme.link,
            (false, _) => theme.text,
        };
        let name = p.fit(item.name, font, SIZE_BODY, row.size.x - 30.0);
        p.text(name, font, SIZE_BODY, color, Vec2::new(row.origin.x + 8.0, y + 4.0), None);
        if let Some(m) = marker(item.kind) {
            let mc = if is_selected { theme.selection_text } else { theme.text_muted };
            p.text(m, font, SIZE_BODY, mc, Vec2::new(row.max().x - 16.0, y + 4.0), None);
        }

        out.click(row, BodyAction::ActivateEntry(column, item.id));
        y += ROW_HEIGHT;
    }
}

// ── detail ────────────────────────────────────────────────────────────────

fn detail(
    p: &mut Painter<'_>,
    theme: &Theme,
    d: &'static Detail,
    scroll: f32,
    pane: Rect,
    out: &mut BodyOut<'_>,
) -> f32 {
    p.push_clip(pane);
    let outer = out.narrow(pane);

    let font = p.faces.ui;
    let width = pane.size.x - DETAIL_PAD * 2.0;
    let x = pane.origin.x + DETAIL_PAD;
    let top = pane.origin.y + DETAIL_PAD - scroll;
    let mut y = top;

    y += super::wrapped(p, d.title, font, SIZE_HEADING, theme.text, Vec2::new(x, y), width);
    y += 10.0;
    if !d.tech_stack.is_empty() {
        y += chips(p, theme, d.tech_stack, Vec2::new(x, y), width) + 14.0;
    }
    p.fill_rect(Rect::new(x, y, width, 1.0), theme.divider);
    y += 12.0;
    y += blocks::paint(p, theme, &markdown::parse(d.body), Vec2::new(x, y), width, out);

    out.restore(outer);
    p.pop_clip();

    let content = y - top + DETAIL_PAD * 2.0;
    (content - pane.size.y).max(0.0)
}
