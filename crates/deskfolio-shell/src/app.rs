use anyhow::{Context, Result};

use deskfolio_core::desktop::SCROLL_STEP;
use deskfolio_core::finder::Activation;
use deskfolio_core::lock::LockScreen;
use deskfolio_core::{Desktop, Effect, Point, PointerOutcome, Size, SystemClock};
use deskfolio_engine::core::{App, AppControl, FrameCtx};
use deskfolio_engine::input::{
    InputEvent, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};
use deskfolio_engine::render::SceneRenderer;
use deskfolio_engine::scene::DrawList;
use deskfolio_engine::text::FontSystem;

use crate::config::{read_first, ShellConfig};
use crate::hit::{BodyAction, HitMap};
use crate::input::{accepts_text, cursor_icon, desk_key};
use crate::painter::{Faces, Painter};
use crate::theme::Theme;
use crate::views;

/// The desktop wired to the engine: input in, effects out, one paint per frame.
pub struct ShellApp {
    desktop: Desktop<SystemClock>,
    theme: Theme,
    fonts: FontSystem,
    faces: Faces,
    draw_list: DrawList,
    renderer: SceneRenderer,
    hits: HitMap,
    pointer: Option<Point>,
    modifiers: Modifiers,
}

impl ShellApp {
    pub fn new(config: &ShellConfig, initial: Size) -> Result<Self> {
        let (fonts, faces) = load_faces(config)?;

        let mut desktop = Desktop::new(SystemClock, initial)
            .with_spotlight_overlay(config.spotlight_overlay);
        if !config.lock_on_start {
            desktop = desktop.with_lock(LockScreen::Unlocked);
        }
        log::info!("desktop ready with {} windows", desktop.windows().len());

        Ok(Self {
            desktop,
            theme: Theme::default(),
            fonts,
            faces,
            draw_list: DrawList::new(),
            renderer: SceneRenderer::new(),
            hits: HitMap::default(),
            pointer: None,
            modifiers: Modifiers::default(),
        })
    }

    // ── input ─────────────────────────────────────────────────────────────

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                let p = Point::new(*x, *y);
                self.pointer = Some(p);
                self.desktop.pointer_move(p);
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                x,
                y,
                ..
            }) => {
                let p = Point::new(*x, *y);
                self.pointer = Some(p);
                match state {
                    MouseButtonState::Pressed => {
                        let outcome = self.desktop.pointer_down(p);
                        self.on_pointer_down(outcome, p);
                    }
                    MouseButtonState::Released => self.desktop.pointer_up(),
                }
            }

            InputEvent::MouseWheel { delta, .. } => {
                if let Some(p) = self.pointer {
                    self.desktop.wheel(p, delta.lines_y(SCROLL_STEP));
                }
            }

            InputEvent::Key { key, state: KeyState::Pressed, modifiers, .. } => {
                self.modifiers = *modifiers;
                if let Some(k) = desk_key(*key) {
                    self.desktop.key(k, modifiers.meta);
                }
            }

            InputEvent::Text(t) => {
                if accepts_text(self.modifiers) {
                    self.desktop.text(&t.text);
                }
            }

            InputEvent::PointerLeft => {
                self.pointer = None;
                self.desktop.pointer_left();
            }

            // A release outside the window never arrives.
            InputEvent::Focused(false) => self.desktop.pointer_up(),

            _ => {}
        }
    }

    /// Clicks inside a body go to whatever region was painted under them.
    fn on_pointer_down(&mut self, outcome: PointerOutcome, p: Point) {
        let PointerOutcome::Body { id, .. } = outcome else {
            log::trace!("pointer down: {outcome:?}");
            return;
        };
        let Some(action) = self.hits.at(id, p) else {
            return;
        };
        match action {
            BodyAction::SelectCategory(label) => self.desktop.select_category(id, label),
            BodyAction::ActivateEntry(column, item) => {
                if self.desktop.activate_entry(id, *column, item) == Activation::Ignored {
                    log::debug!("stale entry {item} in {column:?}");
                }
            }
            BodyAction::OpenUrl(url) => self.desktop.open_external(url.as_str()),
        }
    }

    /// Carries out queued effects; `Exit` stops the loop.
    fn run_effects(&mut self) -> AppControl {
        for effect in self.desktop.take_effects() {
            match effect {
                Effect::OpenUrl(url) => {
                    if let Err(e) = open::that_detached(&url) {
                        log::warn!("could not open {url}: {e}");
                    }
                }
                Effect::Exit => {
                    log::info!("shut down requested");
                    return AppControl::Exit;
                }
            }
        }
        AppControl::Continue
    }
}

impl App for ShellApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        self.desktop.set_screen(Size::new(w, h));

        for event in &ctx.input_frame.events {
            self.handle_event(event);
        }
        self.desktop.tick(ctx.time.dt);

        if self.run_effects() == AppControl::Exit {
            return AppControl::Exit;
        }

        // ── paint ─────────────────────────────────────────────────────────
        self.draw_list.clear();
        self.hits.clear();
        let limits = {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.fonts,
                self.faces,
                ctx.window.scale_factor(),
                self.pointer,
            );
            views::paint_desktop(&mut painter, &self.theme, &self.desktop, &mut self.hits)
        };
        for (id, max) in limits {
            self.desktop.clamp_scroll(id, max);
        }

        let hint = self.pointer.map(|p| self.desktop.cursor_at(p)).unwrap_or_default();
        ctx.window.set_cursor(cursor_icon(hint));

        let (draw_list, fonts, renderer) = (&mut self.draw_list, &self.fonts, &mut self.renderer);
        ctx.render(self.theme.clear, |rctx, target| {
            renderer.render(rctx, target, draw_list, fonts);
        })
    }
}

/// Loads the UI face and the terminal face. Without a mono face the UI face
/// stands in; without a UI face there is nothing to draw with.
fn load_faces(config: &ShellConfig) -> Result<(FontSystem, Faces)> {
    let mut fonts = FontSystem::new();

    let (path, bytes) = read_first(&config.ui_font_paths)
        .context("no UI font found; install DejaVu Sans or Noto Sans")?;
    let ui = fonts
        .load_font(&bytes)
        .with_context(|| format!("failed to load {}", path.display()))?;
    log::info!("ui font: {}", path.display());

    let mono = match read_first(&config.mono_font_paths) {
        Some((path, bytes)) => match fonts.load_font(&bytes) {
            Ok(id) => {
                log::info!("mono font: {}", path.display());
                id
            }
            Err(e) => {
                log::warn!("{}: {e}; terminal uses the UI font", path.display());
                ui
            }
        },
        None => {
            log::warn!("no monospace font found; terminal uses the UI font");
            ui
        }
    };

    Ok((fonts, Faces { ui, mono }))
}
