use log::info;
use rand::Rng;

use crate::output::{Message, QuizOutput};
use crate::quiz::category::CategoryId;
use crate::quiz::definition::{normalize, Question, RawQuestion};
use crate::quiz::error::{FetchError, QuizError};
use crate::quiz::State;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Eq, PartialEq)]
enum LoadState {
    Pending,
    Ready,
    Failed(FetchError),
}

/// Quiz in progress: waits for its batch of questions, then collects answers.
#[derive(Clone, Debug)]
pub struct QuestionsState<O> {
    category: CategoryId,
    generation: u64,
    load_state: LoadState,
    questions: Vec<Question>,
    output: O,
}

impl<O: QuizOutput> QuestionsState<O> {
    pub fn new(category: CategoryId, generation: u64, output: O) -> Self {
        QuestionsState {
            category,
            generation,
            load_state: LoadState::Pending,
            questions: Vec::new(),
            output,
        }
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Pending
    }

    pub fn fetch_error(&self) -> Option<&FetchError> {
        match &self.load_state {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn load<R: Rng + ?Sized>(
        &mut self,
        result: Result<Vec<RawQuestion>, FetchError>,
        rng: &mut R,
    ) {
        match result {
            Ok(raw_questions) => {
                self.questions = normalize(raw_questions, rng);
                self.load_state = LoadState::Ready;
                info!("Quiz ready with {} questions", self.questions.len());
                self.output.say(&Message::QuestionsReady(self.questions.clone()));
            }
            Err(e) => {
                self.questions.clear();
                self.load_state = LoadState::Failed(e.clone());
                self.output.say(&Message::FetchFailed(e));
            }
        }
    }

    /// Panics if `index` does not designate a question of this quiz.
    pub fn select_answer(&mut self, index: usize, answer: &str) -> Result<(), QuizError> {
        let len = self.questions.len();
        if index >= len {
            panic!("{}", QuizError::IndexOutOfRange { index, len });
        }
        self.questions[index].select(answer)?;
        self.output.say(&Message::AnswerSelected(index, answer.to_owned()));
        Ok(())
    }

    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.is_answered_correctly())
            .count()
    }
}

impl<O: QuizOutput> State for QuestionsState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::FetchingQuestions(self.category));
    }

    fn on_end(&mut self) {}
}
