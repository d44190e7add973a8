use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use swatch::config::MAX_EDGE;
use swatch::{ColorRgb, Config, SampleWidget};

#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SWATCH_GIT_HASH"), ")"),
    about = "Render a solid color sample swatch"
)]
struct Cli {
    /// Color to show: a name, #rrggbb, or r,g,b floats (applied with a redraw request)
    #[arg(long, short = 'c', value_name = "COLOR")]
    color: Option<String>,

    /// Set a widget property by name, e.g. color=#336699 (applied with a hide/show cycle)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    properties: Vec<String>,

    /// Allocation width in pixels (defaults to the config value)
    #[arg(long, short = 'W')]
    width: Option<i32>,

    /// Allocation height in pixels (defaults to the config value)
    #[arg(long, short = 'H')]
    height: Option<i32>,

    /// Write the rendered swatch to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let width = clamp_edge("width", cli.width.unwrap_or(config.swatch.width));
    let height = clamp_edge("height", cli.height.unwrap_or(config.swatch.height));

    let mut widget = SampleWidget::offscreen(width, height)
        .with_context(|| format!("Failed to create {width}x{height} surface"))?;
    widget.set_color(config.swatch.default_color.to_color());

    if let Some(text) = &cli.color {
        let color: ColorRgb = text
            .parse()
            .with_context(|| format!("Invalid --color value '{text}'"))?;
        widget.set_color(color);
    }

    for assignment in &cli.properties {
        match assignment.split_once('=') {
            Some((name, value)) => widget.set_property(name.trim(), Some(value)),
            None => widget.set_property(assignment.trim(), None),
        }
    }

    let color = widget.color();
    log::info!("Swatch color {} ({})", color, color.to_hex());

    match &cli.output {
        Some(path) => {
            widget.dispatch().context("Failed to paint swatch")?;
            widget
                .host()
                .write_png(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Rendered {}x{} swatch {} to {}",
                width,
                height,
                color.to_hex(),
                path.display()
            );
        }
        None => {
            println!("color: {} {}", color.to_hex(), color);
            println!("allocation: {}x{}", width, height);
        }
    }

    Ok(())
}

/// Keeps command-line sizes within the same range the config file allows.
fn clamp_edge(name: &str, value: i32) -> i32 {
    if (1..=MAX_EDGE).contains(&value) {
        return value;
    }
    let clamped = value.clamp(1, MAX_EDGE);
    log::warn!("Invalid {name} {value}, clamping to {clamped}");
    clamped
}
