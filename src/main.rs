//! Vector4 - demonstration and throughput benchmark
//!
//! Runs the startup demonstration, then times the construct-and-multiply
//! loop for every configured precision.

use vector4::benchmark;
use vector4::config::AppConfig;
use vector4::demo;
use vector4::error::AppError;

fn run(config: &AppConfig) -> Result<(), AppError> {
    if config.demo.enabled {
        let summary = demo::run();
        log::info!("Demo finished: f32 {}, f64 {}", summary.single, summary.double);
    }

    for &precision in &config.benchmark.precisions {
        let report = benchmark::run_precision(precision, &config.benchmark)?;
        if report.non_finite > 0 {
            log::warn!(
                "{} benchmark produced {} non-finite components",
                precision,
                report.non_finite
            );
        }
        log::info!("{}", report);
    }

    Ok(())
}

fn main() {
    // Load configuration before logging so the configured level applies
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Vector4");

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
