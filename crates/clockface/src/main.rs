use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use clockface::config;
use clockface::gui::app::AppModel;
use clockface::render::{self, RenderOptions};
use clockface::sys::runtime;
use dialkit::Density;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clockface", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of the one in the user config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Render the dial to a PNG file without opening a window
    Render {
        /// Output file
        #[arg(short, long, default_value = "clockface.png")]
        output: PathBuf,

        /// Side of the image in pixels
        #[arg(short, long, default_value_t = 500.0)]
        size: f64,

        /// Draw hour, minute and second hands
        #[arg(long)]
        hands: bool,

        /// Time shown by the hands (HH:MM:SS), defaults to now
        #[arg(short, long)]
        time: Option<NaiveTime>,

        /// Pixels per dp/sp, overrides the config file
        #[arg(short, long, value_parser = parse_density)]
        density: Option<f64>,
    },
    /// Write the default config file if none exists
    Init,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if Density::is_valid_scale(scale) {
        Ok(scale)
    } else {
        Err(format!("density must be a positive number, got {scale}"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    match cli.command {
        Some(Commands::Render {
            output,
            size,
            hands,
            time,
            density,
        }) => {
            let mut config = config::load_or_default(&config_path);
            if let Some(density) = density {
                config.window.density = density;
            }
            let options = RenderOptions {
                size,
                show_hands: hands,
                time,
            };
            render::render_png(&config, &options, &output)?;
            Ok(())
        }
        Some(Commands::Init) => {
            config::write_default_config(&config_path)?;
            println!("{}", config_path.display());
            Ok(())
        }
        None => {
            let config = config::load_or_default(&config_path);
            let (tx, rx) = async_channel::bounded(32);

            runtime::start_background_services(config_path.clone(), tx);

            let app = RelmApp::new("org.clockface.clockface").with_args(Vec::new());
            app.run::<AppModel>((config, config_path, rx));
            Ok(())
        }
    }
}
