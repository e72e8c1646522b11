mod recommend;
mod view;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use internsight_client::RecommendClient;

#[derive(Debug, Parser)]
#[command(name = "internsight")]
#[command(about = "Internship recommendation client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Submit a profile and page through the ranked recommendations
    Recommend {
        /// Skills, free-form text (e.g., "Python, Data Analysis")
        #[arg(long, default_value = "")]
        skills: String,

        /// Area of interest (e.g., "Web Development")
        #[arg(long, default_value = "")]
        interest: String,

        /// Comma-separated preferred locations (e.g., "Mumbai, Remote")
        #[arg(long, default_value = "")]
        locations: String,

        /// Print the raw result array as JSON instead of paging
        #[arg(long)]
        json: bool,
    },
    /// List the locations the service knows about
    Locations,
    /// List the interest areas the service knows about
    Interests,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = internsight_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let client = RecommendClient::new(
        &config.api_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    match cli.command {
        Some(Commands::Recommend {
            skills,
            interest,
            locations,
            json,
        }) => recommend::run_recommend(&client, &skills, &interest, &locations, json).await,
        Some(Commands::Locations) => {
            let values = client.locations().await?;
            recommend::print_list(&values, "service returned no locations");
            Ok(())
        }
        Some(Commands::Interests) => {
            let values = client.interests().await?;
            recommend::print_list(&values, "service returned no interest areas");
            Ok(())
        }
        None => {
            println!("no command given; try `internsight recommend --help`");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
