use std::path::{Path, PathBuf};

use casefinding_cli::config::{
    CasefindingConfig, config_info, default_config_path, load_config_from, save_config_to,
};
use casefinding_core::models::intake::{IntakeRecord, Sex};
use casefinding_features::form::intake_from_form;
use casefinding_features::mapper::map_to_features;
use casefinding_features::validate_vector;
use casefinding_scoring::client::ScoringClient;
use casefinding_scoring::config::{Credentials, ScoringConfig};
use clap::{Args, Parser, Subcommand};
use eyre::{Result, WrapErr};

#[derive(Parser)]
#[command(name = "casefinding")]
#[command(about = "HIV testing risk screening from HTS intake answers")]
struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the scoring service settings
    Configure {
        /// Prediction endpoint URL
        #[arg(long)]
        endpoint: String,
        #[arg(long, requires = "password")]
        username: Option<String>,
        #[arg(long, requires = "username")]
        password: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Show the saved configuration with secrets redacted
    Config,
    /// Print the feature vector for an intake
    Features(InputArgs),
    /// Score an intake against the prediction service
    Score(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// JSON file holding an intake record, or raw form answers with --form
    #[arg(long)]
    intake: PathBuf,
    /// Client sex (M or F)
    #[arg(long)]
    sex: Sex,
    /// Read the file as raw screening form answers
    #[arg(long)]
    form: bool,
    /// Client age in years; overrides any age in the file
    #[arg(long)]
    age: Option<u32>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };

    match cli.command {
        Commands::Configure {
            endpoint,
            username,
            password,
            timeout_secs,
        } => {
            let mut scoring = ScoringConfig::new(endpoint);
            if let (Some(username), Some(password)) = (username, password) {
                scoring = scoring.with_credentials(Credentials::basic(username, password));
            }
            if let Some(timeout_secs) = timeout_secs {
                scoring.timeout_secs = timeout_secs;
            }
            save_config_to(&config_path, &CasefindingConfig::new(scoring))?;
            println!("Saved config to {}", config_path.display());
        }
        Commands::Config => {
            let config = load_config_from(&config_path)?;
            println!("{}", serde_json::to_string_pretty(&config_info(&config))?);
        }
        Commands::Features(args) => {
            let intake = load_intake(&args)?;
            let vector = map_to_features(&intake, args.sex);
            for violation in validate_vector(&vector) {
                tracing::warn!(category = %violation.category_id, "{violation}");
            }
            println!("{}", serde_json::to_string_pretty(&vector)?);
        }
        Commands::Score(args) => {
            let config = load_config_from(&config_path)?;
            let intake = load_intake(&args)?;
            let client = ScoringClient::new(config.scoring)?;
            let assessment = client.predict(&intake, args.sex)?;

            println!("Risk: {:?} ({})", assessment.tier, assessment.tier.as_u8());
            if let Some(probability) = assessment.probability {
                println!("Probability: {probability:.4}");
            }
            println!("{}", assessment.message);
        }
    }

    Ok(())
}

fn load_intake(args: &InputArgs) -> Result<IntakeRecord> {
    let contents = read(&args.intake)?;
    let mut intake = if args.form {
        let answers: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&contents)
            .wrap_err("form answers must be a JSON object")?;
        intake_from_form(&answers, args.age, jiff::Zoned::now().date())
    } else {
        IntakeRecord::from_json(&contents)?
    };

    if args.age.is_some() {
        intake.age = args.age;
    }
    Ok(intake)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}
