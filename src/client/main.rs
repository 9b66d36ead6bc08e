/**
 * Storefront Client Entry Point
 *
 * Command-line front end for the login and registration forms. The session
 * (token and username) is kept in `session.json` under the data directory,
 * so `status` and `logout` work across invocations.
 */

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use storefront::client::{AuthClient, Config, FileStore, FormState, LoginForm, RegisterForm};

#[derive(Debug, Parser)]
#[command(name = "storefront-client", about = "Log in to or register with the storefront API")]
struct CliArgs {
    /// API base URL (overrides CLIENT_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Session directory (overrides STOREFRONT_DATA_DIR)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in with an email address and password
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and log in
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        confirm_password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show whether a session is stored
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = Config::from_env()?;
    if let Some(url) = args.api_url {
        config = config.with_server_url(url)?;
    }
    if let Some(dir) = args.data_dir {
        config = config.with_data_dir(dir);
    }

    let store = Arc::new(FileStore::open(config.session_path())?);
    let client = AuthClient::new(config, store);
    tracing::debug!(
        "Using API at {} with session in {}",
        client.config().server_url(),
        client.config().data_dir().display()
    );

    match args.command {
        Command::Login { email, password } => {
            let mut form = LoginForm::new(email, password);
            form.submit(&client).await;
            report(&form.state, &client).await
        }
        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let mut form = RegisterForm::new(username, email, password, confirm_password);
            form.submit(&client).await;
            report(&form.state, &client).await
        }
        Command::Logout => {
            client.logout()?;
            println!("Logged out.");
            Ok(())
        }
        Command::Status => {
            match (client.is_authenticated(), client.current_user()) {
                (true, Some(user)) => println!("Logged in as {}.", user),
                (true, None) => println!("Logged in."),
                (false, _) => println!("Not logged in."),
            }
            Ok(())
        }
    }
}

async fn report(state: &FormState, client: &AuthClient) -> Result<(), Box<dyn std::error::Error>> {
    for message in state.field_messages() {
        eprintln!("{}", message);
    }
    if let Some(message) = &state.success_message {
        println!("{}", message);
    }
    if let Some(message) = &state.warning_message {
        println!("{}", message);
    }
    if let Some(message) = &state.error_message {
        eprintln!("{}", message);
    }

    match state.redirect_after {
        Some(delay) => {
            tokio::time::sleep(delay).await;
            println!(
                "Signed in as {}.",
                client.current_user().unwrap_or_else(|| "unknown user".to_string())
            );
            Ok(())
        }
        None if state.warning_message.is_some() => Ok(()),
        None => Err("authentication did not complete".into()),
    }
}
