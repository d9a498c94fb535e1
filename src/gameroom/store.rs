use crate::ID;
use crate::Unique;
use crate::gameplay::Session;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

/// Durable home for session snapshots.
///
/// Every accepted action is written through `save` before it becomes
/// visible, so a restart resumes from the last acknowledged state.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn create(&self, session: &Session) -> anyhow::Result<()>;
    async fn load(&self, id: ID<Session>) -> anyhow::Result<Option<Session>>;
    async fn save(&self, session: &Session) -> anyhow::Result<()>;
    /// Cheap liveness probe.
    async fn ping(&self) -> anyhow::Result<()>;
}

/// Process-local store. Keeps serialized snapshots so loads exercise the
/// same encoding as a database round trip.
#[derive(Default)]
pub struct Memory {
    snapshots: RwLock<HashMap<ID<Session>, String>>,
}

impl Memory {
    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }
}

#[async_trait::async_trait]
impl Store for Memory {
    async fn create(&self, session: &Session) -> anyhow::Result<()> {
        let json = serde_json::to_string(session)?;
        match self.snapshots.write().await.entry(session.id()) {
            Entry::Occupied(_) => Err(anyhow::anyhow!("session {} already exists", session.id())),
            Entry::Vacant(slot) => {
                slot.insert(json);
                Ok(())
            }
        }
    }
    async fn load(&self, id: ID<Session>) -> anyhow::Result<Option<Session>> {
        self.snapshots
            .read()
            .await
            .get(&id)
            .map(|json| serde_json::from_str(json))
            .transpose()
            .map_err(anyhow::Error::from)
    }
    async fn save(&self, session: &Session) -> anyhow::Result<()> {
        let json = serde_json::to_string(session)?;
        self.snapshots.write().await.insert(session.id(), json);
        Ok(())
    }
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
