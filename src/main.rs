use clap::Parser;
use karigar_board::domain::ports::{Clock, FixedClock, SystemClock};
use karigar_board::utils::error::ErrorSeverity;
use karigar_board::utils::{logger, validation::Validate};
use karigar_board::{BoardConfig, BoardEngine, CliArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // The logging format can come from the config file, so peek at it before anything logs.
    let json_logs = args
        .config
        .as_deref()
        .and_then(|path| BoardConfig::from_file(path).ok())
        .map(|config| config.json_logs())
        .unwrap_or(false);
    if json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting karigar-board");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::info!("✅ Configuration loaded and validated successfully");

    let clock: Box<dyn Clock> = match args.today {
        Some(today) => {
            tracing::info!("📅 Using {} as today", today);
            Box::new(FixedClock::new(today))
        }
        None => Box::new(SystemClock),
    };

    let engine = BoardEngine::from_config(&config, ".").with_expand_all(args.expand_all);

    match engine.run(clock.as_ref()).await {
        Ok(outcome) => {
            match &outcome.written_to {
                Some(path) => println!("✅ {} orders in {} groups written to {}", outcome.order_count, outcome.group_count, path),
                None => print!("{}", outcome.rendered),
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Board failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
