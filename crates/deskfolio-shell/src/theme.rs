//! Colors and type sizes.

use deskfolio_engine::paint::Color;

/// Palette, decoded once at start-up.
#[derive(Debug, Clone)]
pub struct Theme {
    pub clear: Color,
    pub wallpaper_top: Color,
    pub wallpaper_bottom: Color,

    pub window_bg: Color,
    pub window_border: Color,
    pub shadow: Color,
    pub title_bar: Color,
    pub title_text: Color,
    pub close: Color,
    pub minimize: Color,
    pub zoom: Color,
    pub grip: Color,

    pub sidebar_bg: Color,
    pub sidebar_heading: Color,
    pub divider: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub selection_text: Color,
    pub hover: Color,
    pub link: Color,
    pub chip_bg: Color,
    pub quote_bar: Color,
    pub placeholder: Color,

    pub terminal_bg: Color,
    pub terminal_text: Color,
    pub terminal_prompt: Color,
    pub cursor: Color,

    pub menubar_bg: Color,
    pub menubar_text: Color,
    pub dropdown_bg: Color,

    pub dock_bg: Color,
    pub dock_border: Color,
    pub tooltip_bg: Color,

    pub lock_veil: Color,
    pub lock_text: Color,

    pub overlay_bg: Color,
    pub field_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            clear: Color::from_hex(0x1c1c28),
            wallpaper_top: Color::from_hex(0x3a4f8c),
            wallpaper_bottom: Color::from_hex(0xc56b8a),

            window_bg: Color::from_hex(0xffffff),
            window_border: Color::from_srgb_u8(0, 0, 0, 40),
            shadow: Color::from_srgb_u8(0, 0, 0, 50),
            title_bar: Color::from_hex(0xececec),
            title_text: Color::from_hex(0x4d4d4d),
            close: Color::from_hex(0xff5f57),
            minimize: Color::from_hex(0xfebc2e),
            zoom: Color::from_hex(0x28c840),
            grip: Color::from_hex(0xb0b0b0),

            sidebar_bg: Color::from_hex(0xf2f1f6),
            sidebar_heading: Color::from_hex(0x9a9aa0),
            divider: Color::from_hex(0xdedede),
            text: Color::from_hex(0x1d1d1f),
            text_muted: Color::from_hex(0x6e6e73),
            selection: Color::from_hex(0x2f7cf6),
            selection_text: Color::from_hex(0xffffff),
            hover: Color::from_srgb_u8(0, 0, 0, 18),
            link: Color::from_hex(0x0a64d8),
            chip_bg: Color::from_hex(0xe8eefc),
            quote_bar: Color::from_hex(0xc7c7cc),
            placeholder: Color::from_hex(0xe5e5ea),

            terminal_bg: Color::from_srgb_u8(30, 30, 30, 245),
            terminal_text: Color::from_hex(0xe6e6e6),
            terminal_prompt: Color::from_hex(0x7ee787),
            cursor: Color::from_srgb_u8(230, 230, 230, 200),

            menubar_bg: Color::from_srgb_u8(255, 255, 255, 170),
            menubar_text: Color::from_hex(0x111111),
            dropdown_bg: Color::from_srgb_u8(246, 246, 246, 240),

            dock_bg: Color::from_srgb_u8(255, 255, 255, 90),
            dock_border: Color::from_srgb_u8(255, 255, 255, 120),
            tooltip_bg: Color::from_srgb_u8(40, 40, 40, 220),

            lock_veil: Color::from_srgb_u8(20, 24, 40, 235),
            lock_text: Color::from_hex(0xffffff),

            overlay_bg: Color::from_srgb_u8(250, 250, 250, 245),
            field_bg: Color::from_hex(0xffffff),
        }
    }
}

// ── type scale ────────────────────────────────────────────────────────────

pub const SIZE_SMALL: f32 = 11.0;
pub const SIZE_BODY: f32 = 13.0;
pub const SIZE_TITLE: f32 = 13.0;
pub const SIZE_HEADING: f32 = 22.0;
pub const SIZE_MONO: f32 = 13.0;
