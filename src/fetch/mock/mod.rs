use parking_lot::RwLock;
use std::sync::Arc;

use crate::fetch::{FetchHandle, QuestionSource};
use crate::quiz::category::CategoryId;
use crate::quiz::definition::RawQuestion;
use crate::quiz::error::FetchError;

/// Five Books questions with three incorrect answers each. The correct answer
/// of question `n` is `correct n`.
pub fn books_batch() -> Vec<RawQuestion> {
    (1..=5)
        .map(|n| RawQuestion {
            question: format!("Books question {}", n),
            correct_answer: format!("correct {}", n),
            incorrect_answers: (1..=3).map(|i| format!("wrong {}.{}", n, i)).collect(),
        })
        .collect()
}

#[derive(Clone, Default)]
pub struct MockQuestionSource {
    response: Option<Result<Vec<RawQuestion>, FetchError>>,
    requests: Arc<RwLock<Vec<(CategoryId, u32)>>>,
    handles: Arc<RwLock<Vec<FetchHandle>>>,
}

impl MockQuestionSource {
    /// Fetches stay in progress until resolved through `handle`.
    pub fn pending() -> Self {
        Default::default()
    }

    /// Every fetch resolves immediately with `questions`.
    pub fn serving(questions: Vec<RawQuestion>) -> Self {
        MockQuestionSource {
            response: Some(Ok(questions)),
            ..Default::default()
        }
    }

    /// Every fetch fails immediately with `error`.
    pub fn failing(error: FetchError) -> Self {
        MockQuestionSource {
            response: Some(Err(error)),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<(CategoryId, u32)> {
        self.requests.read().clone()
    }

    pub fn handle(&self, index: usize) -> FetchHandle {
        self.handles.read()[index].clone()
    }
}

impl QuestionSource for MockQuestionSource {
    fn fetch(&self, category: CategoryId, amount: u32) -> FetchHandle {
        self.requests.write().push((category, amount));
        let handle = FetchHandle::new();
        if let Some(response) = &self.response {
            handle.resolve(response.clone());
        }
        self.handles.write().push(handle.clone());
        handle
    }
}
