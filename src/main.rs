use clap::Parser;
use voter_extract::core::upload::GENERIC_FAILURE;
use voter_extract::domain::ports::ConfigProvider;
use voter_extract::output::table;
use voter_extract::utils::{logger, validation::Validate};
use voter_extract::{
    Cli, Command, CopyOutcome, ExtractEngine, LocalStorage, SystemClipboard, UploadClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let common = cli.command.common().clone();

    logger::init_cli_logger(common.verbose);
    tracing::info!("Starting voter-extract CLI");
    if common.verbose {
        tracing::debug!("Config: {:?}", common);
    }

    if let Err(e) = common.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(common.output_path().to_string());
    let api = UploadClient::new(common.api_endpoint());
    let mut engine = ExtractEngine::new(api, storage);

    match &cli.command {
        Command::Extract { file, metadata, .. } => {
            let metadata = metadata.to_metadata();
            if engine.submit(file, &metadata).await.is_err() {
                let message = engine
                    .session()
                    .error()
                    .unwrap_or(GENERIC_FAILURE)
                    .to_string();
                eprintln!("❌ {}", message);
                std::process::exit(1);
            }
        }
        Command::Replace { file, .. } => {
            let bytes = std::fs::read(file)?;
            let result = serde_json::from_slice(&bytes)?;
            engine.load_result(result);
        }
    }

    engine.apply_rules(&common.rules);
    engine.print_table(common.show_all);

    if let Some(name) = engine.export().await? {
        println!("\n📁 Output saved to: {}/{}", common.output_path(), name);
    }

    if common.copy {
        match engine.copy(&mut SystemClipboard)? {
            Some(CopyOutcome::Clipboard) => println!("✓ Copied!"),
            Some(CopyOutcome::Manual) => {
                println!("⚠️  Clipboard unavailable; JSON printed above, please copy manually.")
            }
            None => {}
        }
    }

    if let Some(active) = engine.session().active() {
        println!("✅ {}", table::summary(active));
    }

    Ok(())
}
