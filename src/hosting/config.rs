use crate::gameroom::*;
use std::sync::Arc;

/// Runtime settings. Every flag falls back to an environment variable.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "hosting")]
#[command(about = "Serve shared treasure-dig sessions over HTTP", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: String,
    /// HTTP worker threads
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// PostgreSQL connection string; sessions stay in memory without it
    #[arg(long, env = "DB_URL")]
    pub database: Option<String>,
    /// Directory for log files
    #[arg(long, env = "LOG_DIR", default_value = "logs")]
    pub logs: String,
    /// Terminal log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub level: log::LevelFilter,
}

impl Config {
    /// Open the configured session store.
    pub async fn store(&self) -> anyhow::Result<Arc<dyn Store>> {
        match self.database {
            #[cfg(feature = "database")]
            Some(ref url) => {
                let client: Arc<dyn Store> = db(url).await?;
                Ok(client)
            }
            #[cfg(not(feature = "database"))]
            Some(_) => Err(anyhow::anyhow!("DB_URL set but built without the database feature")),
            None => {
                log::warn!("no database configured, sessions will not survive a restart");
                let memory: Arc<dyn Store> = Arc::new(Memory::default());
                Ok(memory)
            }
        }
    }
}
