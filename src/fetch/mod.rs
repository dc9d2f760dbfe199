use parking_lot::RwLock;
use std::sync::Arc;

use crate::quiz::category::CategoryId;
use crate::quiz::definition::RawQuestion;
use crate::quiz::error::FetchError;

#[cfg(test)]
pub mod mock;
mod opentdb;

pub use opentdb::OpenTriviaSource;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchState {
    InProgress,
    Success(Vec<RawQuestion>),
    Failure(FetchError),
}

/// Shared slot a background fetch publishes its outcome into.
#[derive(Clone, Debug)]
pub struct FetchHandle {
    state: Arc<RwLock<FetchState>>,
}

impl FetchHandle {
    pub fn new() -> Self {
        FetchHandle {
            state: Arc::new(RwLock::new(FetchState::InProgress)),
        }
    }

    pub fn get_state(&self) -> FetchState {
        self.state.read().clone()
    }

    pub fn resolve(&self, result: Result<Vec<RawQuestion>, FetchError>) {
        *self.state.write() = match result {
            Ok(questions) => FetchState::Success(questions),
            Err(e) => FetchState::Failure(e),
        };
    }

    /// Returns the outcome once the fetch has finished.
    pub fn poll(&self) -> Option<Result<Vec<RawQuestion>, FetchError>> {
        match self.get_state() {
            FetchState::InProgress => None,
            FetchState::Success(questions) => Some(Ok(questions)),
            FetchState::Failure(e) => Some(Err(e)),
        }
    }
}

impl Default for FetchHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote question bank. Implementations must not block the caller: the
/// returned handle is resolved later, from any thread.
pub trait QuestionSource {
    fn fetch(&self, category: CategoryId, amount: u32) -> FetchHandle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_starts_in_progress() {
        let handle = FetchHandle::new();
        assert_eq!(handle.get_state(), FetchState::InProgress);
        assert!(handle.poll().is_none());
    }

    #[test]
    fn clones_observe_resolution() {
        let handle = FetchHandle::new();
        let publisher = handle.clone();
        publisher.resolve(Err(FetchError::HttpStatus(503)));
        assert_eq!(handle.poll(), Some(Err(FetchError::HttpStatus(503))));
    }

    #[test]
    fn resolves_across_threads() {
        let handle = FetchHandle::new();
        let publisher = handle.clone();
        std::thread::spawn(move || publisher.resolve(Ok(vec![])))
            .join()
            .unwrap();
        assert_eq!(handle.get_state(), FetchState::Success(vec![]));
    }
}
