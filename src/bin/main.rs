use std::path::Path;
use std::process::ExitCode;

use gateway_oled::config::{I2C_ADDRESS, I2C_BUS, INTERVAL};
use gateway_oled::providers::host_providers;
use gateway_oled::{DisplayManager, Error, OledDisplay};
use gateway_oled_core::{PageConfig, PageManager};
use log::{error, info};
use tokio::signal;
use tokio::signal::unix::{SignalKind, signal as unix_signal};

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Cannot listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

fn run(display: OledDisplay) -> Result<(), Error> {
    let providers = host_providers()?;
    let pages = PageManager::with_default_rotation(PageConfig::default());

    let mut manager = DisplayManager::new(pages, providers, display);
    manager.show_intro();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;
    let result = runtime.block_on(manager.run(INTERVAL, shutdown_signal()));

    // Outside the runtime: the blocking HTTP client must not be dropped in async context
    drop(runtime);
    manager.shutdown();
    result
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting gateway-oled {}", env!("CARGO_PKG_VERSION"));

    let display = match OledDisplay::open(Path::new(I2C_BUS), I2C_ADDRESS) {
        Ok(display) => display,
        Err(e) => {
            error!("OLED screen not found: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(display) {
        Ok(()) => {
            info!("Stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
