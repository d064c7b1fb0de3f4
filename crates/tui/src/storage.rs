//! Durable storage of the ledger.
//!
//! [`Storage`] reads and writes the JSON snapshot. [`Persister`] sits in front
//! of it as a fire-and-forget writer so the event loop never waits on disk.
use std::{
    fs,
    path::{Path, PathBuf},
};

use engine::State;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the last snapshot. Absent or malformed falls back to an empty
    /// ledger.
    pub fn load(&self) -> State {
        match self.try_load() {
            Ok(Some(state)) => {
                tracing::info!(
                    path = %self.path.display(),
                    entries = state.entries.len(),
                    "ledger loaded"
                );
                state
            }
            Ok(None) => {
                tracing::info!(path = %self.path.display(), "no ledger found, starting empty");
                State::empty()
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "unreadable ledger, starting empty: {err}");
                State::empty()
            }
        }
    }

    fn try_load(&self) -> Result<Option<State>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(State::from_json(&content)?))
    }

    pub fn save(&self, state: &State) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = state.to_json()?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// Background writer. Snapshots are written in the order they were handed
/// over; when writes fall behind only the newest pending one is kept.
#[derive(Debug)]
pub struct Persister {
    tx: mpsc::UnboundedSender<State>,
    task: JoinHandle<()>,
}

impl Persister {
    /// Must be called inside a tokio runtime.
    pub fn spawn(storage: Storage) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<State>();
        let task = tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                while let Ok(newer) = rx.try_recv() {
                    latest = newer;
                }
                let storage = storage.clone();
                match tokio::task::spawn_blocking(move || storage.save(&latest)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => tracing::warn!("failed to persist ledger: {err}"),
                    Err(err) => tracing::error!("persist task panicked: {err}"),
                }
            }
        });

        Self { tx, task }
    }

    pub fn persist(&self, state: &State) {
        if self.tx.send(state.clone()).is_err() {
            tracing::warn!("persister stopped, snapshot dropped");
        }
    }

    /// Flushes pending snapshots and stops the writer.
    pub async fn close(self) {
        drop(self.tx);
        if let Err(err) = self.task.await {
            tracing::error!("persister did not shut down cleanly: {err}");
        }
    }
}
