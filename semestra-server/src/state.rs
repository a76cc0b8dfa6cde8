use anyhow::Result;
use semestra_core::Semestra;

/// Shared application state
#[derive(Clone)]
pub struct AppState;

impl AppState {
    pub fn new() -> Result<Self> {
        // Verify the data directory can be loaded at startup
        let semestra = Semestra::load()?;
        let _ = semestra.event_store()?;
        Ok(AppState)
    }

    /// Reloaded on each request to pick up filesystem changes made by
    /// other tools editing the data directory.
    pub fn semestra(&self) -> Result<Semestra> {
        Ok(Semestra::load()?)
    }
}
