use clap::Parser;
use hbnb_front::utils::{logger, validation::Validate};
use hbnb_front::{CliConfig, Command, FrontEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting hbnb-front CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = match FrontEngine::from_config(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let page = match &cli.command {
        Command::Login { email, password } => engine.login(email, password).await,
        Command::Logout => engine.logout()?,
        Command::Index { max_price } => engine.index(max_price.as_deref()).await,
        Command::Place { place_id } => engine.place(place_id).await,
        Command::Open { location } => engine.open(location).await,
        Command::Review {
            place_id,
            text,
            rating,
        } => engine.review(place_id, text, rating).await.0,
    };

    print!("{}", page);
    Ok(())
}
