use crate::config::toml_config::FrontConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "hbnb-front")]
#[command(about = "HBnB front end: login, browse places and post reviews from the terminal")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "hbnb-front.toml")]
    pub config: String,

    /// Override api.base_url from config
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override session.cookie_path from config
    #[arg(long)]
    pub cookie_path: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Submit the login form
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Click the logout link
    Logout,
    /// Load the landing page (places list)
    Index {
        /// Value of the max-price slider
        #[arg(long)]
        max_price: Option<String>,
    },
    /// Load the place detail page
    Place { place_id: String },
    /// Load any page by location, e.g. `index.html` or `place.html?place_id=...`
    Open { location: String },
    /// Submit the review form for a place
    Review {
        place_id: String,
        #[arg(long, default_value = "")]
        text: String,
        #[arg(long, default_value = "")]
        rating: String,
    },
}

impl CliConfig {
    /// 載入 TOML 配置並套用命令列覆蓋
    pub fn resolve(&self) -> Result<FrontConfig> {
        let mut config = FrontConfig::load_or_default(&self.config)?;

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
            tracing::info!("🔧 Base URL overridden to: {}", base_url);
        }
        if let Some(cookie_path) = &self.cookie_path {
            config.session.cookie_path = cookie_path.clone();
        }

        Ok(config)
    }
}
