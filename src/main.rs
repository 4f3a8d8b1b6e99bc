use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use fraudscope::{
    apis::PredictClient,
    arguments::{self, debug_flags_help, get_enabled_debug_modes, is_any_debug_enabled},
    config::{self, Config, ConfigOverrides},
    constants::{MISSING_API_URL_MESSAGE, SAMPLE_TRANSACTION_JSON, VERSION},
    form::{render::render_panels, PredictForm},
    interactive,
    logger::{self, LogTag},
};

/// Fraud prediction client
///
/// Submits a JSON transaction record to the prediction service and shows the
/// fraud probability. Without a subcommand the interactive form starts.
#[derive(Parser)]
#[command(name = "fraudscope", version, about, long_about = None)]
#[command(after_help = debug_flags_help())]
struct Cli {
    /// TOML config file (default: <config dir>/fraudscope/config.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Prediction service base URL, overrides FRAUDSCOPE_API_URL
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Environment: development, staging or production
    #[arg(long = "env", global = true, value_name = "ENV")]
    environment: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Enable every debug and verbose log line
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    // Read through `arguments`; declared so clap accepts them
    #[arg(long, global = true, hide = true)]
    debug_api: bool,
    #[arg(long, global = true, hide = true)]
    debug_config: bool,
    #[arg(long, global = true, hide = true)]
    debug_form: bool,
    #[arg(long, global = true, hide = true)]
    debug_system: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one transaction and print the result or error panel
    Predict(PredictArgs),
    /// Interactive form on the terminal (default)
    Form,
    /// Print the sample transaction
    Sample,
    /// Check that the prediction service is up
    Health,
    /// Show the resolved configuration
    Config,
}

#[derive(Args)]
struct PredictArgs {
    /// Transaction JSON given inline
    #[arg(long, conflicts_with_all = ["file", "sample"])]
    json: Option<String>,

    /// Read the transaction from a file ("-" for stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "sample")]
    file: Option<PathBuf>,

    /// Use the built-in sample transaction
    #[arg(long)]
    sample: bool,

    /// Print the prediction as JSON instead of the result panel
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init();
    logger::debug(LogTag::System, &format!("fraudscope {} starting", VERSION));
    if is_any_debug_enabled() {
        logger::debug(
            LogTag::System,
            &format!(
                "Arguments: {:?} | debug modes: {:?}",
                arguments::get_cmd_args(),
                get_enabled_debug_modes()
            ),
        );
    }

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            logger::error(LogTag::System, &format!("{:#}", e));
            1
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let command = cli.command.unwrap_or(Command::Form);

    if let Command::Sample = command {
        println!("{}", SAMPLE_TRANSACTION_JSON);
        return Ok(0);
    }

    let overrides = ConfigOverrides {
        config_path: cli.config,
        api_url: cli.api_url,
        environment: cli.environment,
        timeout_secs: cli.timeout,
    };
    let config = config::load_config(&overrides).context("Failed to load configuration")?;

    match command {
        Command::Predict(args) => run_predict(&config, args).await,
        Command::Form => {
            let form = PredictForm::from_config(&config)?;
            interactive::run_interactive(Arc::new(form))
                .await
                .context("Interactive session failed")?;
            Ok(0)
        }
        Command::Health => run_health(&config).await,
        Command::Config => run_show_config(&config),
        Command::Sample => Ok(0),
    }
}

async fn run_predict(config: &Config, args: PredictArgs) -> Result<i32> {
    let input = read_predict_input(&args)?;

    let form = PredictForm::from_config(config)?;
    form.set_input(input);

    match form.submit().await {
        Ok(response) if args.raw => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(0)
        }
        Ok(_) => {
            println!("{}", render_panels(&form.snapshot()));
            Ok(0)
        }
        Err(_) => {
            println!("{}", render_panels(&form.snapshot()));
            Ok(1)
        }
    }
}

fn read_predict_input(args: &PredictArgs) -> Result<String> {
    if let Some(json) = &args.json {
        return Ok(json.clone());
    }
    if args.sample {
        return Ok(SAMPLE_TRANSACTION_JSON.to_string());
    }

    match &args.file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transaction file: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read transaction from stdin")?;
            Ok(buffer)
        }
    }
}

async fn run_health(config: &Config) -> Result<i32> {
    let client = match PredictClient::from_config(config)? {
        Some(client) => client,
        None => {
            println!("{}", MISSING_API_URL_MESSAGE);
            return Ok(1);
        }
    };

    match client.health_check().await {
        Ok(true) => {
            println!("✅ Prediction service is up ({})", client.base_url());
            Ok(0)
        }
        Ok(false) => {
            println!("❌ Prediction service reported unhealthy ({})", client.base_url());
            Ok(1)
        }
        Err(e) => {
            println!("❌ Health check failed ({}): {}", client.base_url(), e);
            Ok(1)
        }
    }
}

fn run_show_config(config: &Config) -> Result<i32> {
    println!("Environment:  {}", config.environment);
    println!("API base:     {}", config.describe_api_base());
    match config.predict_url() {
        Ok(url) => println!("Predict URL:  {}", url),
        Err(e) => println!("Predict URL:  {}", e),
    }
    println!("Timeout:      {}s", config.api.timeout_secs);
    if let Some(path) = fraudscope::paths::get_default_config_path() {
        println!("Config file:  {}", path.display());
    }
    println!();
    println!("{}", config::to_toml(config)?);
    Ok(0)
}
