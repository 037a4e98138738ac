use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use pendulum_wave::WaveConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::PendulumWaveApp;

mod app;
mod input;
mod paint;

const WINDOW_TITLE: &str = "Pendulum Wave";

#[derive(Parser, Debug)]
#[command(
    name = "pendulum-wave-view",
    version,
    about = "Animated pendulum wave",
    long_about = "Animated pendulum wave.\n\n\
        Without --config the built-in settings are used: 25 pendulums realigning \
        every 60 seconds in an 1800x1000 window."
)]
struct Args {
    /// JSON file overriding the built-in wave settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<WaveConfig> {
    let Some(path) = path else {
        return Ok(WaveConfig::default());
    };

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    WaveConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid wave configuration in {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    info!(
        pendulums = config.pendulum_count,
        total_period = config.total_period,
        base_oscillations = config.base_oscillations,
        width = config.width,
        height = config.height,
        "starting pendulum wave"
    );

    let mut app = PendulumWaveApp::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32])
            .with_title(WINDOW_TITLE),
        multisampling: 8,
        ..Default::default()
    };

    eframe::run_simple_native(WINDOW_TITLE, options, move |ctx, _frame| app.update(ctx))
        .map_err(|err| anyhow!("could not open the viewer window: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_without_file() {
        assert_eq!(load_config(None).unwrap(), WaveConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to open"));
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["pendulum-wave-view", "--config", "wave.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("wave.json")));

        let args = Args::try_parse_from(["pendulum-wave-view"]).unwrap();
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_help_mentions_defaults() {
        use clap::CommandFactory;

        let help = Args::command().render_long_help().to_string();
        assert!(help.contains("Without --config the built-in settings are used"));
    }
}
