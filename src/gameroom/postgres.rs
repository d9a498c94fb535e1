use super::Store;
use crate::ID;
use crate::Unique;
use crate::gameplay::Session;
use const_format::concatcp;
use std::sync::Arc;
use tokio_postgres::Client;

/// Table holding one JSON snapshot per session.
pub const SESSIONS: &str = "treasure_sessions";

/// Connect to PostgreSQL and make sure the session table exists.
pub async fn db(url: &str) -> anyhow::Result<Arc<Client>> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection lost: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    migrate(&client).await?;
    Ok(Arc::new(client))
}

#[rustfmt::skip]
async fn migrate(client: &Client) -> anyhow::Result<()> {
    const SQL: &str = concatcp!(
        "CREATE TABLE IF NOT EXISTS ", SESSIONS, " (",
            "id         TEXT PRIMARY KEY, ",
            "data       TEXT NOT NULL, ",
            "created_at TIMESTAMPTZ NOT NULL DEFAULT now(), ",
            "updated_at TIMESTAMPTZ",
        ")"
    );
    client.batch_execute(SQL).await?;
    Ok(())
}

#[rustfmt::skip]
#[async_trait::async_trait]
impl Store for Client {
    async fn create(&self, session: &Session) -> anyhow::Result<()> {
        const SQL: &str = concatcp!(
            "INSERT INTO ", SESSIONS, " (id, data) ",
            "VALUES      ($1, $2)"
        );
        let data = serde_json::to_string(session)?;
        self.execute(SQL, &[&session.id().to_string(), &data]).await?;
        Ok(())
    }
    async fn load(&self, id: ID<Session>) -> anyhow::Result<Option<Session>> {
        const SQL: &str = concatcp!(
            "SELECT data ",
            "FROM   ", SESSIONS, " ",
            "WHERE  id = $1"
        );
        self.query_opt(SQL, &[&id.to_string()])
            .await?
            .map(|row| serde_json::from_str(row.get::<_, &str>(0)))
            .transpose()
            .map_err(anyhow::Error::from)
    }
    async fn save(&self, session: &Session) -> anyhow::Result<()> {
        const SQL: &str = concatcp!(
            "INSERT INTO ", SESSIONS, " (id, data, updated_at) ",
            "VALUES      ($1, $2, now()) ",
            "ON CONFLICT (id) DO UPDATE ",
            "SET         data       = EXCLUDED.data, ",
                        "updated_at = EXCLUDED.updated_at"
        );
        let data = serde_json::to_string(session)?;
        self.execute(SQL, &[&session.id().to_string(), &data]).await?;
        Ok(())
    }
    async fn ping(&self) -> anyhow::Result<()> {
        self.simple_query("SELECT 1").await?;
        Ok(())
    }
}
