//! Compiled-in shell settings.

use std::path::PathBuf;

/// Shell settings. There are no config files; edit the defaults.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Candidates for the proportional UI face, tried in order.
    pub ui_font_paths: Vec<PathBuf>,
    /// Candidates for the terminal face, tried in order.
    pub mono_font_paths: Vec<PathBuf>,
    /// Draw the search overlay and let it take input while open.
    pub spotlight_overlay: bool,
    /// Start behind the lock screen.
    pub lock_on_start: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            ui_font_paths: paths(&[
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/noto/NotoSans-Regular.ttf",
                "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "C:\\Windows\\Fonts\\segoeui.ttf",
            ]),
            mono_font_paths: paths(&[
                "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
                "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
                "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
                "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
                "/System/Library/Fonts/Supplemental/Courier New.ttf",
                "C:\\Windows\\Fonts\\consola.ttf",
            ]),
            spotlight_overlay: false,
            lock_on_start: true,
        }
    }
}

fn paths(list: &[&str]) -> Vec<PathBuf> {
    list.iter().map(PathBuf::from).collect()
}

/// Bytes of the first readable file in `candidates`.
pub fn read_first(candidates: &[PathBuf]) -> Option<(PathBuf, Vec<u8>)> {
    candidates
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|bytes| (p.clone(), bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_web_desktop() {
        let config = ShellConfig::default();
        assert!(!config.spotlight_overlay);
        assert!(config.lock_on_start);
        assert!(!config.ui_font_paths.is_empty());
        assert!(!config.mono_font_paths.is_empty());
    }

    #[test]
    fn read_first_skips_missing_files() {
        let missing = PathBuf::from("/definitely/not/here.ttf");
        assert!(read_first(&[missing.clone()]).is_none());

        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let (found, bytes) = read_first(&[missing, manifest.clone()]).expect("manifest readable");
        assert_eq!(found, manifest);
        assert!(!bytes.is_empty());
    }
}
