use geofield::GeoLocationField;
use geofield::app_config::AppConfig;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{info, warn};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_writer(io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let field = GeoLocationField::new(config.geo_location().blank());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (mut accepted, mut rejected) = (0usize, 0usize);
    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        match field.clean(&line) {
            Ok(coordinate) => {
                writeln!(out, "{}", field.value_to_string(Some(&coordinate)))?;
                accepted += 1;
            }
            Err(err) => {
                warn!(line = index + 1, "⚠️ Skipping '{}': {}", line, err);
                rejected += 1;
            }
        }
    }

    info!("🔥 Normalized {} geo locations, {} rejected", accepted, rejected);

    if rejected > 0 { Ok(ExitCode::FAILURE) } else { Ok(ExitCode::SUCCESS) }
}
