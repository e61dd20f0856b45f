use anyhow::{Context, Result};
use clap::Parser;
use hibi_core::{Config, CredentialStore};
use hibi_server::{router, state::AppState};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// hibi, a flat-file blog server
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Prints the entries directory
    #[arg(long, short, exclusive = true)]
    path: bool,
    /// Sets the admin password and exits
    #[arg(long, value_name = "PASSWORD", exclusive = true)]
    set_password: Option<String>,
    /// Address to bind, overriding the config file
    #[arg(long, env = "HIBI_LISTEN")]
    listen: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hibi: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(listen) = cli.listen {
        config.listen = listen;
    }

    if cli.path {
        println!("{}", config.entries_dir.display());
        return Ok(());
    }

    if let Some(password) = cli.set_password {
        let credentials = CredentialStore::new(config.password_file.clone());
        credentials.save(&password)?;
        println!("Admin password updated.");
        return Ok(());
    }

    serve(config)
}

#[tokio::main]
async fn serve(config: Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let listen = config.listen.clone();
    let state = AppState::new(config)?;
    info!(
        entries_dir = %state.store().config.entries_dir.display(),
        credential_set = state.credentials().load()?.is_some(),
        "starting hibi"
    );

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("binding {listen}"))?;
    info!("listening on http://{listen}/");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
