//! Terminal body: scrollback, live prompt and cursor.

use std::ops::Range;

use deskfolio_core::terminal::TerminalSession;
use deskfolio_engine::coords::{CornerRadii, Rect, Vec2};

use crate::painter::Painter;
use crate::theme::{Theme, SIZE_MONO};

const PAD: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Echo(String),
    Output(String),
    Prompt(String),
}

/// Every rendered line, oldest first, ending with the live prompt.
fn lines(session: &TerminalSession) -> Vec<Line> {
    let mut out = Vec::with_capacity(session.total_lines() + 1);
    for entry in session.history() {
        if !entry.command.is_empty() {
            out.push(Line::Echo(format!("{} % {}", entry.cwd, entry.command)));
        }
        out.extend(entry.output.iter().cloned().map(Line::Output));
    }
    out.push(Line::Prompt(session.prompt()));
    out
}

/// Lines that fit, ending `scroll_back` lines above the tail.
fn visible(len: usize, scroll_back: usize, rows: usize) -> Range<usize> {
    let end = len.saturating_sub(scroll_back).max(1).min(len);
    end.saturating_sub(rows.max(1))..end
}

pub fn paint(p: &mut Painter<'_>, theme: &Theme, session: &TerminalSession, body: Rect, focused: bool) {
    p.fill_rounded_corners(body, CornerRadii::bottom(10.0), theme.terminal_bg, None);

    let font = p.faces.mono;
    let lh = p.line_height(font, SIZE_MONO);
    let rows = ((body.size.y - PAD * 2.0) / lh).floor().max(1.0) as usize;

    let all = lines(session);
    let range = visible(all.len(), session.scroll_back(), rows);
    let x = body.origin.x + PAD;
    let mut y = body.origin.y + PAD;

    for line in &all[range] {
        match line {
            Line::Echo(text) => p.text(text.as_str(), font, SIZE_MONO, theme.terminal_prompt, Vec2::new(x, y), None),
            Line::Output(text) => p.text(text.as_str(), font, SIZE_MONO, theme.terminal_text, Vec2::new(x, y), None),
            Line::Prompt(text) => {
                p.text(text.as_str(), font, SIZE_MONO, theme.terminal_prompt, Vec2::new(x, y), None);
                if focused {
                    let w = p.measure(text, font, SIZE_MONO, None).x;
                    let cell = p.measure("M", font, SIZE_MONO, None).x.max(1.0);
                    p.fill_rect(Rect::new(x + w + 1.0, y, cell, lh), theme.cursor);
                }
            }
        }
        y += lh;
    }
}
