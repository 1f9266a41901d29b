//! Shared state for the API router.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api::error::ApiError;
use crate::directory::HospitalDirectory;
use crate::guidance::LlmClient;
use crate::history::CheckHistory;
use crate::profiles::ProfileStore;

/// Shared context for all API routes.
///
/// The directory and provider client are read-only; history and profiles
/// are the only mutable state and sit behind their own locks.
#[derive(Clone)]
pub struct ApiContext {
    pub llm: Arc<dyn LlmClient>,
    pub directory: HospitalDirectory,
    history: Arc<Mutex<CheckHistory>>,
    profiles: Arc<RwLock<ProfileStore>>,
}

impl ApiContext {
    pub fn new(llm: Arc<dyn LlmClient>, directory: HospitalDirectory) -> Self {
        Self {
            llm,
            directory,
            history: Arc::new(Mutex::new(CheckHistory::default())),
            profiles: Arc::new(RwLock::new(ProfileStore::new())),
        }
    }

    pub fn history(&self) -> Result<MutexGuard<'_, CheckHistory>, ApiError> {
        self.history
            .lock()
            .map_err(|_| ApiError::Internal("history lock poisoned".into()))
    }

    pub fn read_profiles(&self) -> Result<RwLockReadGuard<'_, ProfileStore>, ApiError> {
        self.profiles
            .read()
            .map_err(|_| ApiError::Internal("profile lock poisoned".into()))
    }

    pub fn write_profiles(&self) -> Result<RwLockWriteGuard<'_, ProfileStore>, ApiError> {
        self.profiles
            .write()
            .map_err(|_| ApiError::Internal("profile lock poisoned".into()))
    }

    /// Leave the history lock poisoned, as after a panic while it was held.
    #[cfg(test)]
    pub(crate) fn poison_history(&self) {
        let history = Arc::clone(&self.history);
        let _ = std::thread::spawn(move || {
            let _guard = history.lock();
            panic!("poisoning history lock");
        })
        .join();
    }
}
