//! Platform event translation.

mod winit;

pub(crate) use self::winit::{key_text, translate_window_event};
