//! lircvol Daemon - LIRC remote to mixer volume bridge
//!
//! Connects to the lircd control socket, watches for volume key presses and
//! applies them to one ALSA mixer control. Runs until lircd closes the
//! connection or the process is interrupted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tokio::net::UnixStream;
use tracing::{error, info, warn};

use lircvol_daemon::config::DaemonConfig;
use lircvol_daemon::session::Session;
use lircvol_mixer::{AlsaMixer, VolumeController};

#[derive(Parser, Debug)]
#[command(name = "lircvol-daemon", version, about = "LIRC remote to mixer volume bridge")]
struct Cli {
    /// Path to an alternate configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    info!("Starting lircvol daemon v{}", env!("CARGO_PKG_VERSION"));

    let config = match cli.config {
        Some(path) => DaemonConfig::load_from(path),
        None => DaemonConfig::load(),
    }
    .context("Failed to load configuration")?;

    info!("Configuration loaded from {}", config.config_path.display());

    let mixer = AlsaMixer::open(&config.mixer_card, &config.mixer_control).with_context(|| {
        format!(
            "Failed to open mixer control {} on {}",
            config.mixer_control, config.mixer_card
        )
    })?;
    let controller = VolumeController::with_step(mixer, config.volume_step);
    let mut session = Session::new(controller);

    info!("Connecting to lircd at {}", config.lirc_socket);
    let mut stream = UnixStream::connect(&config.lirc_socket)
        .await
        .with_context(|| format!("Failed to connect to {}", config.lirc_socket))?;

    info!("lircvol daemon ready");

    let mut buf = [0u8; 4096];
    loop {
        tokio::select! {
            read = stream.read(&mut buf) => {
                match read {
                    Ok(0) => {
                        info!("lircd closed the connection");
                        session.on_closed();
                        break;
                    }
                    Ok(n) => {
                        if let Err(e) = session.on_data(&buf[..n]) {
                            error!("Session failed: {}", e);
                            session.on_closed();
                            return Err(e.into());
                        }
                    }
                    Err(e) => {
                        warn!("Socket read failed: {}", e);
                        session.on_closed();
                        return Err(e).context("lircd socket read failed");
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
                session.on_closed();
                break;
            }
        }
    }

    info!("lircvol daemon stopped");
    Ok(())
}
