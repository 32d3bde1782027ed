use clap::{Parser, Subcommand};
use lagradar::events::Command;
use lagradar::sys::server::SOCKET_PATH;
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "lagradarctl", version, about = "Control a running lagradar overlay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Mount the radar and show the overlay
    Show,
    /// Tear the radar down and hide the overlay
    Hide,
    /// Show if hidden, hide if shown
    Toggle,
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Show => Command::Show,
            Commands::Hide => Command::Hide,
            Commands::Toggle => Command::Toggle,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    send_command(Command::from(cli.command))
}

fn send_command(cmd: Command) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to lagradar daemon at {}: {}. Is lagradar running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    log::debug!("Sent {} to {}", cmd, SOCKET_PATH);
    Ok(())
}
