use chatbox_types::{ChatTurn, Sender, TurnView, HISTORY_KEY};

use crate::{KeyValueStore, StoreError};

/// Where an appended turn ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Written to the backing store
    Durable,
    /// Kept only in memory after the backing store refused a write
    MemoryOnly,
}

/// Result of [`HistoryStore::append`]
#[derive(Debug, Clone)]
pub struct Appended {
    pub turn: ChatTurn,
    pub persistence: Persistence,
}

/// Append-only conversation log with full replay.
///
/// The whole log lives under one key as a JSON array and every append is a
/// read-modify-write of that array. Two writers sharing the namespace (two
/// browser tabs, two terminals) race on it and the last write wins.
pub struct HistoryStore<S> {
    storage: S,
    key: String,
    /// Set once a read or write fails; from then on this is the log
    memory: Option<Vec<ChatTurn>>,
    /// The log as of the last successful write by this store
    last_written: Vec<ChatTurn>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, HISTORY_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            memory: None,
            last_written: Vec::new(),
        }
    }

    /// True once the store has fallen back to memory
    pub fn is_degraded(&self) -> bool {
        self.memory.is_some()
    }

    /// The current log in insertion order. Absent, unreadable or corrupt
    /// data reads as an empty log.
    pub fn turns(&self) -> Vec<ChatTurn> {
        match &self.memory {
            Some(memory) => memory.clone(),
            None => self.read_persisted(),
        }
    }

    /// Record a new turn stamped with the current time.
    ///
    /// Never fails: if the backing store cannot be read or rejects the write,
    /// the log is kept in memory and the store stays memory-only from then
    /// on. A failed read never leads to a write, so the stored log is left
    /// as it was.
    pub fn append(&mut self, sender: Sender, message: impl Into<String>, is_error: bool) -> Appended {
        let turn = ChatTurn::new(sender, message, is_error);

        if let Some(memory) = self.memory.as_mut() {
            memory.push(turn.clone());
            return Appended {
                turn,
                persistence: Persistence::MemoryOnly,
            };
        }

        let mut turns = match self.read_stored() {
            Ok(turns) => turns,
            Err(e) => {
                log::warn!("Chat history unreadable, keeping new turns in memory: {}", e);
                let mut turns = std::mem::take(&mut self.last_written);
                turns.push(turn.clone());
                self.memory = Some(turns);
                return Appended {
                    turn,
                    persistence: Persistence::MemoryOnly,
                };
            }
        };
        turns.push(turn.clone());

        let persistence = match self.write(&turns) {
            Ok(()) => {
                self.last_written = turns;
                Persistence::Durable
            }
            Err(e) => {
                log::warn!(
                    "Failed to persist chat history ({} turns), keeping it in memory: {}",
                    turns.len(),
                    e
                );
                self.memory = Some(turns);
                Persistence::MemoryOnly
            }
        };

        Appended { turn, persistence }
    }

    /// Render every stored turn, oldest first. Returns how many were rendered.
    pub fn replay_all<V: TurnView + ?Sized>(&self, view: &mut V) -> usize {
        let turns = self.turns();
        for turn in &turns {
            view.append_block(&turn.to_block());
        }
        log::debug!("Replayed {} chat turns", turns.len());
        turns.len()
    }

    fn read_persisted(&self) -> Vec<ChatTurn> {
        self.read_stored().unwrap_or_else(|e| {
            log::warn!("Chat history unreadable, starting empty: {}", e);
            Vec::new()
        })
    }

    /// Absent and corrupt data are an empty log; only a failing store is an
    /// error.
    fn read_stored(&self) -> Result<Vec<ChatTurn>, StoreError> {
        let Some(bytes) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice::<Vec<ChatTurn>>(&bytes) {
            Ok(turns) => Ok(turns),
            Err(e) => {
                log::warn!("Stored chat history is corrupt, treating it as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn write(&self, turns: &[ChatTurn]) -> Result<(), StoreError> {
        let json = serde_json::to_vec(turns).map_err(|source| StoreError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.storage.set(&self.key, &json)
    }
}
