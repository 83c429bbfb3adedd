//! Layout Inspector - run plot layouts from the command line
//!
//! Loads a scene description and an optional layout configuration, runs a
//! layout pass or the minimum size estimation and prints the result as JSON.

use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use plot_layout::scene::PlotScene;
use plot_layout::{LayoutConfig, LayoutOptions, LayoutRect, LayoutResult, LayoutSize, PlotLayout};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Inspect the layout of plot scenes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay out a scene and print the rectangles of all components
    Activate {
        /// Path to the scene description (.json)
        scene: PathBuf,

        /// Width of the plot rectangle
        #[arg(long, default_value_t = 800.0)]
        width: f64,

        /// Height of the plot rectangle
        #[arg(long, default_value_t = 600.0)]
        height: f64,

        /// Path to a layout configuration (.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        ignore: IgnoreFlags,
    },

    /// Print the minimum size a scene needs
    SizeHint {
        /// Path to the scene description (.json)
        scene: PathBuf,

        /// Path to a layout configuration (.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Components left out of the layout pass
#[derive(Args, Debug, Default, Clone, Copy)]
struct IgnoreFlags {
    #[arg(long)]
    ignore_legend: bool,
    #[arg(long)]
    ignore_scrollbars: bool,
    #[arg(long)]
    ignore_frames: bool,
    #[arg(long)]
    ignore_title: bool,
    #[arg(long)]
    ignore_footer: bool,
}

impl IgnoreFlags {
    fn options(&self) -> LayoutOptions {
        let mut options = LayoutOptions::NONE;
        for (set, flag) in [
            (self.ignore_legend, LayoutOptions::IGNORE_LEGEND),
            (self.ignore_scrollbars, LayoutOptions::IGNORE_SCROLLBARS),
            (self.ignore_frames, LayoutOptions::IGNORE_FRAMES),
            (self.ignore_title, LayoutOptions::IGNORE_TITLE),
            (self.ignore_footer, LayoutOptions::IGNORE_FOOTER),
        ] {
            if set {
                options |= flag;
            }
        }
        options
    }
}

#[derive(Serialize)]
struct ActivateReport<'a> {
    plot_rect: LayoutRect,
    #[serde(flatten)]
    result: &'a LayoutResult,
}

#[derive(Serialize)]
struct SizeHintReport {
    minimum_size: LayoutSize,
}

fn load_layout(config: Option<&Path>) -> Result<PlotLayout> {
    let config = match config {
        Some(path) => LayoutConfig::load_or_default(path)
            .with_context(|| format!("Failed to read layout configuration {:?}", path))?,
        None => LayoutConfig::default(),
    };
    Ok(PlotLayout::with_config(config))
}

fn load_scene(path: &Path) -> Result<PlotScene> {
    PlotScene::load(path).with_context(|| format!("Failed to load scene {:?}", path))
}

fn activate(
    scene: &Path,
    width: f64,
    height: f64,
    config: Option<&Path>,
    options: LayoutOptions,
) -> Result<String> {
    ensure!(
        width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0,
        "plot size must be finite and non-negative, got {}x{}",
        width,
        height
    );

    let scene = load_scene(scene)?;
    let mut layout = load_layout(config)?;

    let plot_rect = LayoutRect::new(0.0, 0.0, width, height);
    layout.activate(&scene, &plot_rect, options);
    tracing::info!(?plot_rect, ?options, "Layout pass finished");

    let report = ActivateReport {
        plot_rect,
        result: layout.result(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn size_hint(scene: &Path, config: Option<&Path>) -> Result<String> {
    let scene = load_scene(scene)?;
    let layout = load_layout(config)?;

    let report = SizeHintReport {
        minimum_size: layout.minimum_size_hint(&scene),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Activate {
            scene,
            width,
            height,
            config,
            ignore,
        } => activate(&scene, width, height, config.as_deref(), ignore.options()),
        Commands::SizeHint { scene, config } => size_hint(&scene, config.as_deref()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let output = run(Cli::parse())?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCENE: &str = r#"{
        "title": { "text": { "text": "Throughput" } },
        "legend": { "item_count": 3 },
        "scales": { "y_left": {}, "x_bottom": {} }
    }"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_activate_flags() {
        let cli = Cli::try_parse_from([
            "layout_inspect",
            "activate",
            "scene.json",
            "--width",
            "640",
            "--ignore-legend",
            "--ignore-frames",
        ])
        .unwrap();

        match cli.command {
            Commands::Activate {
                width,
                height,
                ignore,
                config,
                ..
            } => {
                assert_eq!(width, 640.0);
                assert_eq!(height, 600.0);
                assert!(config.is_none());
                assert_eq!(
                    ignore.options(),
                    LayoutOptions::IGNORE_LEGEND | LayoutOptions::IGNORE_FRAMES
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_no_flags_means_no_options() {
        assert_eq!(IgnoreFlags::default().options(), LayoutOptions::NONE);
    }

    #[test]
    fn test_activate_prints_rectangles() {
        let dir = TempDir::new().unwrap();
        let scene = write(&dir, "scene.json", SCENE);

        let output = activate(&scene, 800.0, 600.0, None, LayoutOptions::NONE).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["plot_rect"]["width"], 800.0);
        assert!(value["canvas_rect"]["width"].as_f64().unwrap() > 0.0);
        assert!(value["title_rect"]["height"].as_f64().unwrap() > 0.0);
        assert!(value["legend_rect"]["height"].as_f64().unwrap() > 0.0);
        assert!(value["scale_rects"]["y_left"]["width"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_activate_with_config() {
        let dir = TempDir::new().unwrap();
        let scene = write(&dir, "scene.json", SCENE);
        let config = write(&dir, "layout.json", r#"{ "legend_position": "right" }"#);

        let output = activate(&scene, 800.0, 600.0, Some(&config), LayoutOptions::NONE).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["legend_rect"]["x"].as_f64().unwrap() + 240.0, 800.0);
    }

    #[test]
    fn test_activate_rejects_bad_size() {
        let dir = TempDir::new().unwrap();
        let scene = write(&dir, "scene.json", SCENE);
        assert!(activate(&scene, f64::NAN, 600.0, None, LayoutOptions::NONE).is_err());
        assert!(activate(&scene, -1.0, 600.0, None, LayoutOptions::NONE).is_err());
    }

    #[test]
    fn test_size_hint_output() {
        let dir = TempDir::new().unwrap();
        let scene = write(&dir, "scene.json", r#"{ "scales": { "y_left": {}, "x_bottom": {} } }"#);

        let output = size_hint(&scene, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["minimum_size"]["width"], 82);
        assert_eq!(value["minimum_size"]["height"], 82);
    }

    #[test]
    fn test_missing_scene_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let err = size_hint(&missing, None).unwrap_err();
        assert!(err.to_string().contains("Failed to load scene"));
    }
}
