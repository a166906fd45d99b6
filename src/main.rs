use clap::Parser;
use readiness_scoreboard::utils::{logger, validation::Validate};
use readiness_scoreboard::{CliConfig, LocalStorage, ScoreboardEngine, ScoreboardPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting readiness scoreboard");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.root.clone());
    let pipeline = ScoreboardPipeline::new(storage, config);
    let engine = ScoreboardEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Scoreboard build completed successfully!");
            println!("✅ Scoreboard build completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Scoreboard build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                readiness_scoreboard::utils::error::ErrorSeverity::Low => 0,
                readiness_scoreboard::utils::error::ErrorSeverity::Medium => 2,
                readiness_scoreboard::utils::error::ErrorSeverity::High => 1,
                readiness_scoreboard::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
