//! glint: render a built-in scene with the recursive Phong ray tracer
//! and save it as a PNG.

mod scenes;

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{render, Camera, Color, RenderConfig};
use scenes::Preset;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(version)]
#[command(about = "Minimal recursive ray tracer with Phong shading, hard shadows and mirror reflection")]
struct Cli {
    /// Output PNG path
    #[arg(short, long, default_value = "image.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Built-in scene to render
    #[arg(long, value_enum, default_value_t = Preset::Mixed)]
    scene: Preset,

    /// Maximum number of mirror bounces
    #[arg(long, default_value_t = 1)]
    max_depth: u32,

    /// Ambient light added to every hit, per channel (0-255 scale)
    #[arg(long, default_value_t = 0.1)]
    ambient: f32,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let scene = cli.scene.build();
    log::info!("Built {:?} scene", cli.scene);

    let mut camera = Camera::new().with_resolution(cli.width, cli.height);
    camera.initialize().context("Failed to set up camera")?;
    log::debug!(
        "Camera at {:?} looking along {:?}, focal length {}",
        camera.position(),
        camera.direction(),
        camera.focal_length()
    );

    let config = RenderConfig {
        max_depth: cli.max_depth,
        ambient: Color::splat(cli.ambient),
        ..RenderConfig::default()
    };

    let (image, _stats) = render(&camera, &scene, &config);

    image
        .save_png(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["glint"]).unwrap();

        assert_eq!(cli.output, PathBuf::from("image.png"));
        assert_eq!((cli.width, cli.height), (500, 500));
        assert_eq!(cli.scene, Preset::Mixed);
        assert_eq!(cli.max_depth, 1);
        assert_eq!(cli.ambient, 0.1);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "glint", "-o", "out.png", "--width", "64", "--height", "32", "--scene", "triangles",
            "--max-depth", "3", "-v",
        ])
        .unwrap();

        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!((cli.width, cli.height), (64, 32));
        assert_eq!(cli.scene, Preset::Triangles);
        assert_eq!(cli.max_depth, 3);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_unknown_scene() {
        assert!(Cli::try_parse_from(["glint", "--scene", "teapot"]).is_err());
    }
}
