use clap::Parser;
use json_consolidate::utils::{logger, validation::Validate};
use json_consolidate::{CliConfig, ConsolidateEngine, LocalStorage};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    println!("Starting consolidation");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.root_path.clone());
    let engine = ConsolidateEngine::new(storage, config);

    match engine.run().await {
        Ok(report) => {
            println!("{}", report);
        }
        Err(e) => {
            tracing::error!("Consolidation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
