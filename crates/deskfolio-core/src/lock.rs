//! Cosmetic lock screen.

use std::time::Duration;

/// Fade-out after the unlocking click.
pub const UNLOCK_FADE: Duration = Duration::from_millis(600);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LockScreen {
    Locked,
    /// Fading out. The desktop already receives input.
    Unlocking { elapsed: Duration },
    Unlocked,
}

impl LockScreen {
    /// Starts the fade. Only meaningful while locked.
    pub fn unlock(&mut self) {
        if *self == LockScreen::Locked {
            log::debug!("unlocking");
            *self = LockScreen::Unlocking { elapsed: Duration::ZERO };
        }
    }

    pub fn lock(&mut self) {
        log::debug!("locking");
        *self = LockScreen::Locked;
    }

    pub fn tick(&mut self, dt: Duration) {
        if let LockScreen::Unlocking { elapsed } = self {
            *elapsed += dt;
            if *elapsed >= UNLOCK_FADE {
                *self = LockScreen::Unlocked;
            }
        }
    }

    /// True while the screen swallows pointer and keyboard input.
    #[inline]
    pub fn blocks_input(&self) -> bool {
        matches!(self, LockScreen::Locked)
    }

    /// True while anything of the lock screen is drawn.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !matches!(self, LockScreen::Unlocked)
    }

    /// Overlay opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        match *self {
            LockScreen::Locked => 1.0,
            LockScreen::Unlocking { elapsed } => {
                1.0 - (elapsed.as_secs_f32() / UNLOCK_FADE.as_secs_f32()).min(1.0)
            }
            LockScreen::Unlocked => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_starts_fade_then_unlocks() {
        let mut lock = LockScreen::Locked;
        assert!(lock.blocks_input());

        lock.unlock();
        assert!(!lock.blocks_input());
        assert!(lock.is_visible());
        assert_eq!(lock.opacity(), 1.0);

        lock.tick(Duration::from_millis(300));
        assert!((lock.opacity() - 0.5).abs() < 1e-4);

        lock.tick(Duration::from_millis(300));
        assert_eq!(lock, LockScreen::Unlocked);
        assert!(!lock.is_visible());
    }

    #[test]
    fn unlock_is_ignored_while_fading() {
        let mut lock = LockScreen::Locked;
        lock.unlock();
        lock.tick(Duration::from_millis(200));
        lock.unlock();
        assert_eq!(lock, LockScreen::Unlocking { elapsed: Duration::from_millis(200) });
    }

    #[test]
    fn relock() {
        let mut lock = LockScreen::Unlocked;
        lock.unlock();
        assert_eq!(lock, LockScreen::Unlocked);
        lock.lock();
        assert_eq!(lock.opacity(), 1.0);
    }
}
