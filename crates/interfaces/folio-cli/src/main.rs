use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use folio_app_core::SubmissionStatus;
use folio_cli::{commands, settings, DeliveryOverrides, DraftArgs, StoredSettingsArgs};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, help = "Directory holding settings.json")]
    config: Option<Utf8PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and send a contact message
    Send {
        #[command(flatten)]
        draft: DraftArgs,
        #[command(flatten)]
        overrides: DeliveryOverrides,
    },
    /// Check a message without sending it
    Validate {
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Inspect or change stored delivery settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    Show,
    Path,
    Set {
        #[command(flatten)]
        values: StoredSettingsArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let repo = settings::repo(cli.config);

    match cli.command {
        Commands::Send { draft, overrides } => {
            let resolved = settings::resolve(&repo, overrides)?;
            let status = commands::cmd_send(draft.into(), resolved).await?;
            if status != SubmissionStatus::Succeeded {
                anyhow::bail!("message was not sent");
            }
        }
        Commands::Validate { draft } => {
            if !commands::cmd_validate(&draft.into()) {
                std::process::exit(1);
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::cmd_config_show(&repo)?,
            ConfigCommands::Path => println!("{}", repo.settings_path()?.display()),
            ConfigCommands::Set { values } => {
                commands::cmd_config_set(&repo, values.into())?;
            }
        },
    }

    Ok(())
}
