use clap::Parser;
use hello_cicd::utils::logger;
use hello_cicd::{CliConfig, GreetingEngine, HelloController};

fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not up yet; the file may have been what configures it.
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting hello-cicd");
    tracing::debug!("Effective settings: {:?}", settings);

    let engine = GreetingEngine::new(HelloController::new());

    match engine.run(settings.format, settings.repeat) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            tracing::info!("✅ Printed greeting {} time(s) as {}", settings.repeat, settings.format);
        }
        Err(e) => {
            tracing::error!("❌ Failed to render greeting: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    }
}
