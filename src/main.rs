use clap::{Parser, Subcommand};
use lagradar::config;
use lagradar::gui::app::AppModel;
use lagradar::snapshot::{self, Pacing};
use lagradar::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lagradar", version, about = "Frame-timing radar overlay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Write the default config file (if missing) and print its path
    #[arg(long)]
    write_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Render a simulated radar to a PNG (or .svg) file without opening a window.
    Snapshot {
        /// Output file
        #[arg(short, long)]
        out: PathBuf,

        /// Number of simulated frames
        #[arg(long, default_value_t = 120)]
        frames: usize,

        /// Regular frame interval in milliseconds
        #[arg(long, default_value_t = 16.7)]
        frame_ms: f64,

        /// Insert a slow frame every N frames
        #[arg(long)]
        jank_every: Option<usize>,

        /// Duration of a slow frame in milliseconds
        #[arg(long, default_value_t = 250.0)]
        jank_ms: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();

    match cli.command {
        Some(Commands::Snapshot {
            out,
            frames,
            frame_ms,
            jank_every,
            jank_ms,
        }) => {
            let pacing = Pacing {
                frames,
                frame_ms,
                jank_every,
                jank_ms,
            };
            let radar = snapshot::simulate(&config.radar.resolve(None), &pacing);
            snapshot::render(&radar, &out)?;
            Ok(())
        }
        None => {
            let (tx, rx) = async_channel::bounded(32);

            // Start Background Services
            runtime::start_background_services(tx);

            let app = RelmApp::new("dev.lagradar.overlay");
            app.run::<AppModel>((config, rx));
            Ok(())
        }
    }
}
