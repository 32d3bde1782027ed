use crate::events::{AppEvent, Command};
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::net::UnixListener;

pub const SOCKET_PATH: &str = "/tmp/lagradar.sock";

pub fn parse_line(line: &str) -> Option<AppEvent> {
    line.trim().parse::<Command>().ok().map(AppEvent::from)
}

async fn handle_connection<R: AsyncRead + Unpin>(stream: R, tx: Sender<AppEvent>) {
    let mut lines = BufReader::new(stream).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        match parse_line(&line) {
            Some(event) => {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            None => log::debug!("Ignoring unknown command {:?}", line),
        }
    }
}

pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };
    log::debug!("Listening on {}", SOCKET_PATH);

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                tokio::spawn(handle_connection(stream, tx.clone()));
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
