use clap::{Parser, Subcommand};

use clima_app::{format, HistoryView, LookupSequence, WeatherLookupFlow, APP_INFO};
use clima_auth::{Session, SessionManager, SessionStorage};
use clima_core::{Config, ConfigError};
use clima_history::{HistoryClient, HistoryWriter, SqliteHistoryStore};
use clima_weather::WeatherClient;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Clima e sugestão de roupa")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up current weather for a city and suggest what to wear.
    Lookup {
        /// City name, e.g. "São Paulo".
        city: String,
    },

    /// Show the most recent searches for the signed-in user.
    History,

    /// Show information about the application.
    About,

    /// Store a session issued by the auth backend.
    Login {
        /// Opaque user identity.
        user_id: String,

        /// Access token; may be omitted for local use.
        #[arg(long)]
        access_token: Option<String>,
    },

    /// Sign out and clear the stored session.
    Logout,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Lookup { city } => run_lookup(&city).await,
            Command::History => run_history().await,
            Command::About => {
                println!("{}", APP_INFO.render());
                Ok(())
            }
            Command::Login {
                user_id,
                access_token,
            } => run_login(user_id, access_token),
            Command::Logout => run_logout(),
        }
    }
}

fn load_config() -> anyhow::Result<Config> {
    let (config, _validation) = Config::load_validated()?;
    Ok(config)
}

fn session_manager() -> anyhow::Result<SessionManager> {
    SessionManager::new(SessionStorage::new()?)
}

async fn run_lookup(city: &str) -> anyhow::Result<()> {
    let config = load_config()?;
    if !config.weather.is_configured() {
        eprintln!("{}", ConfigError::MissingApiKey.user_message());
        return Ok(());
    }

    let client = WeatherClient::with_base_url(
        config.weather.base_url.as_str(),
        config.weather.api_key.as_str(),
        config.weather.lang.as_str(),
    )?;

    let manager = session_manager()?;
    let session = manager.current();

    let store = SqliteHistoryStore::new(config.history_db_path())?;
    let (handle, worker) = HistoryWriter::spawn(HistoryClient::new(store));

    let flow = WeatherLookupFlow::new(client, Some(handle));
    let sequence = LookupSequence::new();
    let ticket = sequence.begin();

    match flow.lookup(session.as_ref(), city).await {
        Ok(outcome) if sequence.is_current(ticket) => {
            println!("{}", format::format_outcome(&outcome.observation, &outcome.suggestion));
        }
        Ok(_) => {
            tracing::debug!("Discarding superseded lookup result");
        }
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            eprintln!("{}", e.user_message());
        }
    }

    // Release the writer handle so the worker drains its queue and stops.
    drop(flow);
    let _ = worker.await;

    Ok(())
}

async fn run_history() -> anyhow::Result<()> {
    let config = load_config()?;
    let manager = session_manager()?;

    let Some(session) = manager.current() else {
        println!("Você não está autenticado. Faça login para ver o histórico.");
        return Ok(());
    };

    let store = SqliteHistoryStore::new(config.history_db_path())?;
    let view = HistoryView::new(HistoryClient::new(store), config.history.limit);

    match view.recent(&session).await {
        Ok(records) if records.is_empty() => {
            println!("Você ainda não fez nenhuma pesquisa de clima.");
        }
        Ok(records) => {
            for record in records {
                println!("{}", format::format_history_record(&record));
            }
        }
        Err(e) => {
            tracing::error!("History load failed: {}", e);
            eprintln!("{}", e.user_message());
        }
    }

    Ok(())
}

fn run_login(user_id: String, access_token: Option<String>) -> anyhow::Result<()> {
    let manager = session_manager()?;

    let expires_at = chrono::Utc::now().timestamp() + 7 * 24 * 3600;
    manager.sign_in(Session {
        user_id: user_id.clone(),
        access_token: access_token.unwrap_or_default(),
        expires_at,
    })?;

    println!("Sessão iniciada para {user_id}.");
    Ok(())
}

fn run_logout() -> anyhow::Result<()> {
    session_manager()?.sign_out()?;
    println!("Sessão encerrada.");
    Ok(())
}
