use super::*;
use crate::ID;
use crate::Unique;
use crate::gameplay::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Builds the die for a session when it is opened or reloaded.
pub type Roller = Box<dyn Fn(&Session) -> Box<dyn Die> + Send + Sync>;

/// Registry of live sessions.
///
/// Each session sits behind its own lock, so actions on one session are
/// applied strictly one after another while different sessions proceed
/// independently. An action is applied to a copy, audited, and written to
/// the store before the copy replaces the live state; a rejected or failed
/// action leaves both the live state and the store untouched.
pub struct Lobby {
    tables: RwLock<HashMap<ID<Session>, Arc<RwLock<Table>>>>,
    store: Arc<dyn Store>,
    roller: Roller,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new(Arc::new(Memory::default()))
    }
}

impl Lobby {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            store,
            roller: Box::new(dice),
        }
    }
    /// Swap the die factory, e.g. for a loaded die under test.
    pub fn with_roller<F>(mut self, roller: F) -> Self
    where
        F: Fn(&Session) -> Box<dyn Die> + Send + Sync + 'static,
    {
        self.roller = Box::new(roller);
        self
    }
}

/// Session lifecycle.
impl Lobby {
    /// Deal a new session, persist it, and start serving it.
    pub async fn open(&self, setup: Setup) -> Result<Session, Failure> {
        let session = Session::deal(setup);
        session.audit().map_err(|e| self.corrupt(session.id(), e))?;
        self.store
            .create(&session)
            .await
            .inspect_err(|e| log::error!("[session {}] create failed: {}", session.id(), e))?;
        let table = Table::new(session.clone(), (self.roller)(&session));
        self.tables
            .write()
            .await
            .insert(session.id(), Arc::new(RwLock::new(table)));
        log::info!(
            "opened session {} ({} seats, {} cards)",
            session.id(),
            session.players().len(),
            session.pile().size()
        );
        Ok(session)
    }

    /// Current state of a session.
    pub async fn state(&self, id: ID<Session>) -> Result<Session, Failure> {
        Ok(self.table(id).await?.read().await.session().clone())
    }

    /// Apply one action under the session's lock.
    pub async fn act(&self, id: ID<Session>, action: Action) -> Result<(Session, Outcome), Failure> {
        let table = self.table(id).await?;
        let mut table = table.write().await;
        let mut next = table.session().clone();
        let outcome = next
            .apply(action, table.die())
            .inspect_err(|e| log::warn!("[session {}] rejected {}: {}", id, action, e))?;
        next.audit().map_err(|e| self.corrupt(id, e))?;
        self.store
            .save(&next)
            .await
            .inspect_err(|e| log::error!("[session {}] save failed: {}", id, e))?;
        table.commit(next.clone());
        log::info!("[session {}] {} -> {}", id, action, next.phase());
        Ok((next, outcome))
    }

    /// Whether the backing store answers.
    pub async fn ping(&self) -> Result<(), Failure> {
        Ok(self.store.ping().await?)
    }

    /// Number of sessions currently held in memory.
    pub async fn len(&self) -> usize {
        self.tables.read().await.len()
    }
}

impl Lobby {
    /// Live table for `id`, hydrating it from the store on a miss.
    async fn table(&self, id: ID<Session>) -> Result<Arc<RwLock<Table>>, Failure> {
        if let Some(table) = self.tables.read().await.get(&id) {
            return Ok(table.clone());
        }
        let session = self.store.load(id).await?.ok_or(Failure::Missing)?;
        session.audit().map_err(|e| self.corrupt(id, e))?;
        log::info!("[session {}] restored from store", id);
        let die = (self.roller)(&session);
        Ok(self
            .tables
            .write()
            .await
            .entry(id)
            .or_insert_with(|| Arc::new(RwLock::new(Table::new(session, die))))
            .clone())
    }
    fn corrupt(&self, id: ID<Session>, error: anyhow::Error) -> Failure {
        log::error!("[session {}] invariant violated: {}", id, error);
        Failure::Corrupt(error.to_string())
    }
}
