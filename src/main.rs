use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::client::{ApiClient, HttpClient, Registration, SessionContext};
use crate::domain::{ClientTarget, NodeCatalog, SelectionSet, SubscriptionLinks};
use crate::state::{App, AppConfig};

// subdash version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
           _         _           _
 ___ _   _| |__   __| | __ _ ___| |__
/ __| | | | '_ \ / _` |/ _` / __| '_ \
\__ \ |_| | |_) | (_| | (_| \__ \ | | |
|___/\__,_|_.__/ \__,_|\__,_|___/_| |_|
";

/// subdash - terminal dashboard for your proxy subscription
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Backend base URL, overriding the configuration file
    #[arg(long, env = "SUBDASH_API_URL", global = true)]
    api_url: Option<String>,

    /// Subcommand to run; the dashboard opens when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the subscription URL and client links for a node filter
    Links {
        /// Regional entrance id, repeatable; order is kept
        #[arg(short, long = "node")]
        nodes: Vec<String>,
    },
    /// Download the subscription content for a node filter
    Fetch {
        /// Regional entrance id, repeatable; order is kept
        #[arg(short, long = "node")]
        nodes: Vec<String>,
    },
    /// Sign in and store the session token
    Login { email: String, password: String },
    /// Create an account and store the session token
    Register {
        email: String,
        password: String,
        /// Code sent by `send-code`
        #[arg(long)]
        email_code: String,
        #[arg(long)]
        invite_code: Option<String>,
    },
    /// Email a verification code for registration
    SendCode { email: String },
    /// Forget the stored session token
    Logout,
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = AppConfig::load().with_env_override(cli.api_url.clone());
    let session = SessionContext::load(SessionContext::default_path()?);
    let client = ApiClient::new(&config.api_url, HttpClient::new()?, session)
        .with_language(&config.knowledge_language);
    let catalog = config.catalog();

    match cli.command {
        None => run_dashboard(catalog, client).await,
        Some(command) => handle_command(command, &catalog, &client).await,
    }
}

async fn run_dashboard(catalog: NodeCatalog, client: ApiClient) -> Result<()> {
    tracing::info!("Starting dashboard against {}", client.base_url());
    let mut terminal = tui::init()?;
    let mut app = App::new(catalog, client);

    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

async fn handle_command(command: Commands, catalog: &NodeCatalog, client: &ApiClient) -> Result<()> {
    match command {
        Commands::Links { nodes } => {
            let selection = SelectionSet::from(catalog.resolve(&nodes)?);
            let subscription = client.get_subscription().await?;
            print_links(&SubscriptionLinks::compose(
                &subscription.subscribe_url,
                &selection,
            ));
        }
        Commands::Fetch { nodes } => {
            let selection = SelectionSet::from(catalog.resolve(&nodes)?);
            let content = client.fetch_subscription_content(&selection).await?;
            print!("{content}");
        }
        Commands::Login { email, password } => {
            client.login(&email, &password).await?;
            println!("Signed in as {email}");
        }
        Commands::Register {
            email,
            password,
            email_code,
            invite_code,
        } => {
            let registration = Registration {
                email: email.clone(),
                password,
                invite_code,
                email_code,
            };
            client.register(&registration).await?;
            println!("Registered and signed in as {email}");
        }
        Commands::SendCode { email } => {
            client.send_email_verify(&email).await?;
            println!("Verification code sent to {email}");
        }
        Commands::Logout => {
            client.session().clear()?;
            println!("Signed out");
        }
        Commands::Version => {
            println!("{LOGO}");
            println!("subdash v{VERSION}");
            println!("A terminal dashboard for proxy subscription accounts");
        }
    }
    Ok(())
}

fn print_links(links: &SubscriptionLinks) {
    println!("Copy URL: {}", links.copy);
    for target in ClientTarget::ALL {
        if let Some(link) = links.for_target(target) {
            println!("{:<13} {link}", target.label());
        }
    }
}
