#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global demo-unlock flag, set from command line
static DEMO_UNLOCKS: OnceLock<bool> = OnceLock::new();

/// Whether every achievement should render as unlocked (visual review mode)
pub fn demo_unlocks() -> bool {
    DEMO_UNLOCKS.get().copied().unwrap_or(false)
}

/// Stride - Running Companion
#[derive(Parser, Debug)]
#[command(name = "stride-desktop")]
#[command(about = "Stride - achievements for your running practice")]
struct Args {
    /// Render every achievement as unlocked (for reviewing badge styling)
    #[arg(long)]
    demo_unlocks: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stride=info,stride_core=info")),
        )
        .init();

    let args = Args::parse();
    let _ = DEMO_UNLOCKS.set(args.demo_unlocks);

    tracing::info!("Starting Stride (demo_unlocks: {})", args.demo_unlocks);

    // Phone-ish portrait window
    let window_width = 480.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Stride")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
