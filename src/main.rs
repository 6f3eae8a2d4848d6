use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use copydesk::config::{ClientConfig, ConfigError};
use copydesk::confirm::{AssumeYes, Confirm, StdinConfirm};
use copydesk::controller::Controller;
use copydesk::net::api::{ApiError, ContentApi, HttpApi};
use copydesk::net::types::RecordId;
use copydesk::render::render_history;
use copydesk::shell::run_shell;
use copydesk::state::{FormInput, ViewState};
use tracing::Level;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Action(String),
}

#[derive(Parser, Debug)]
#[command(name = "copydesk", about = "Marketing content generator client")]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "COPYDESK_API_URL")]
    api_url: Option<String>,

    /// Log every backend request to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is up.
    Ping,
    /// Generate marketing copy for a product.
    Generate {
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        name: String,
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        description: String,
    },
    History(HistoryCommand),
    /// Interactive page: form, result and history in one loop.
    Shell,
}

#[derive(Args, Debug)]
struct HistoryCommand {
    #[command(subcommand)]
    command: HistorySubcommand,
}

#[derive(Subcommand, Debug)]
enum HistorySubcommand {
    List {
        /// Show this record's description and content inline.
        #[arg(long)]
        expand: Option<RecordId>,
    },
    Delete {
        id: RecordId,
    },
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_api_url(url)?;
    }
    let api = HttpApi::new(&config)?;
    tracing::debug!(api_url = %api.base_url(), "client configured");

    match cli.command {
        Command::Ping => {
            println!("{}", api.ping().await?);
            Ok(())
        }
        Command::Generate { name, description } => {
            let content = run_generate(Arc::new(api), FormInput::new(name, description)).await?;
            println!("{content}");
            Ok(())
        }
        Command::History(history) => {
            if let Some(rendered) = run_history(Arc::new(api), history, &mut StdinConfirm).await? {
                print!("{rendered}");
            } else {
                eprintln!("cancelled");
            }
            Ok(())
        }
        Command::Shell => {
            let mut controller = Controller::new(Arc::new(api));
            run_shell(&mut controller, &mut io::stdin().lock(), &mut io::stdout().lock()).await?;
            Ok(())
        }
    }
}

async fn run_generate(api: Arc<dyn ContentApi>, form: FormInput) -> Result<String, CliError> {
    if let Some(field) = form.missing_field() {
        return Err(CliError::Action(format!("{field} is required")));
    }
    let mut controller = Controller::new(api);
    controller
        .submit_generation(form.product_name, form.product_description)
        .await;
    Ok(settled(&controller)?.marketing_content.clone().unwrap_or_default())
}

/// Run one history subcommand and return the rendered history section, or
/// `None` when the user declined to clear.
async fn run_history(
    api: Arc<dyn ContentApi>,
    history: HistoryCommand,
    prompt: &mut impl Confirm,
) -> Result<Option<String>, CliError> {
    let mut controller = Controller::new(api);
    match history.command {
        HistorySubcommand::List { expand } => {
            controller.refresh_history().await;
            if let Some(id) = expand {
                controller.toggle_expand(&id);
            }
        }
        HistorySubcommand::Delete { id } => controller.delete_record(&id).await,
        HistorySubcommand::Clear { yes } => {
            let confirmed = if yes {
                controller.clear_all_history(&mut AssumeYes).await
            } else {
                controller.clear_all_history(prompt).await
            };
            if !confirmed {
                return Ok(None);
            }
        }
    }
    Ok(Some(render_history(settled(&controller)?)))
}

/// The view after an action, or the action's error message.
fn settled(controller: &Controller) -> Result<&ViewState, CliError> {
    let view = controller.view();
    match &view.error_message {
        Some(message) => Err(CliError::Action(message.clone())),
        None => Ok(view),
    }
}
