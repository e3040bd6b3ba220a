//! deskfolio: a portfolio presented as a small desktop.

mod app;
mod config;
mod hit;
mod input;
mod painter;
mod theme;
mod views;

use anyhow::Result;
use winit::dpi::LogicalSize;

use deskfolio_core::Size;
use deskfolio_engine::device::GpuInit;
use deskfolio_engine::logging::{init_logging, LoggingConfig};
use deskfolio_engine::window::{Runtime, RuntimeConfig};

use crate::app::ShellApp;
use crate::config::ShellConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ShellConfig::default();
    let runtime = RuntimeConfig {
        maximized: true,
        min_size: Some(LogicalSize::new(800.0, 600.0)),
        ..RuntimeConfig::default()
    };
    let initial = Size::new(runtime.initial_size.width as f32, runtime.initial_size.height as f32);

    let app = ShellApp::new(&config, initial)?;
    log::info!("starting {}", runtime.title);
    Runtime::run(runtime, GpuInit::default(), app)
}
