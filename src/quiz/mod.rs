use log::{debug, info};
use std::fmt;

use self::category::CategoryId;
use self::definition::{Question, RawQuestion};
use self::error::{FetchError, Operation, QuizError};
use self::phase::*;
use self::settings::Settings;
use crate::fetch::{FetchHandle, QuestionSource};
use crate::output::{Message, QuizOutput};

pub mod category;
pub mod definition;
pub mod error;
mod phase;
pub mod settings;


trait State {
    fn on_begin(&mut self);
    fn on_end(&mut self);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PhaseKind {
    NotStarted,
    InProgress,
    Graded,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseKind::NotStarted => "not started",
            PhaseKind::InProgress => "in progress",
            PhaseKind::Graded => "graded",
        };
        write!(f, "{}", name)
    }
}

enum Phase<O> {
    NotStarted(SetupState<O>),
    InProgress(QuestionsState<O>),
    Graded(ResultsState<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::NotStarted(s) => s,
            Phase::InProgress(s) => s,
            Phase::Graded(s) => s,
        }
    }

    fn kind(&self) -> PhaseKind {
        match self {
            Phase::NotStarted(_) => PhaseKind::NotStarted,
            Phase::InProgress(_) => PhaseKind::InProgress,
            Phase::Graded(_) => PhaseKind::Graded,
        }
    }
}

struct PendingFetch {
    generation: u64,
    handle: FetchHandle,
}

fn reject(operation: Operation, phase: PhaseKind) -> QuizError {
    let error = QuizError::InvalidTransition { operation, phase };
    debug!("{}", error);
    error
}

/// A single player's quiz, from category selection to grading.
///
/// Fetches run in the background: `start` enters `InProgress` right away and
/// `tick` applies the fetched batch once it arrives. Every start is tagged with
/// a new generation so batches requested by an earlier start are discarded.
pub struct Session<O, S> {
    current_phase: Phase<O>,
    settings: Settings,
    source: S,
    output: O,
    generation: u64,
    in_flight: Vec<PendingFetch>,
}

impl<O, S> Session<O, S>
where
    O: QuizOutput + Clone,
    S: QuestionSource,
{
    pub fn new(settings: Settings, source: S, output: O) -> Self {
        let setup = SetupState::new(settings.default_category, output.clone());
        let mut session = Session {
            current_phase: Phase::NotStarted(setup),
            settings,
            source,
            output,
            generation: 0,
            in_flight: Vec::new(),
        };
        session.current_phase.get_state().on_begin();
        session
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        info!("Entering quiz phase: {}", phase.kind());
        self.current_phase.get_state().on_end();
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    pub fn phase(&self) -> PhaseKind {
        self.current_phase.kind()
    }

    pub fn category(&self) -> CategoryId {
        match &self.current_phase {
            Phase::NotStarted(s) => s.category(),
            Phase::InProgress(s) => s.category(),
            Phase::Graded(s) => s.category(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        match &self.current_phase {
            Phase::NotStarted(_) => &[],
            Phase::InProgress(s) => s.questions(),
            Phase::Graded(s) => s.questions(),
        }
    }

    #[cfg(test)]
    pub fn score(&self) -> Option<usize> {
        match &self.current_phase {
            Phase::Graded(s) => Some(s.score()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        match &self.current_phase {
            Phase::InProgress(s) => s.is_loading(),
            _ => false,
        }
    }

    pub fn fetch_error(&self) -> Option<&FetchError> {
        match &self.current_phase {
            Phase::InProgress(s) => s.fetch_error(),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn select_category(&mut self, category: CategoryId) -> Result<(), QuizError> {
        let phase = self.phase();
        match &mut self.current_phase {
            Phase::NotStarted(state) => {
                state.select_category(category);
                Ok(())
            }
            _ => Err(reject(Operation::SelectCategory, phase)),
        }
    }

    /// Fetches a new batch for the current category. Starting again while in
    /// progress throws the current questions away and fetches a fresh batch.
    pub fn start(&mut self) -> Result<(), QuizError> {
        match self.phase() {
            PhaseKind::NotStarted => (),
            PhaseKind::InProgress => info!("Restarting quiz with a fresh batch"),
            PhaseKind::Graded => return Err(reject(Operation::Start, PhaseKind::Graded)),
        }

        let category = self.category();
        self.generation += 1;
        let handle = self.source.fetch(category, self.settings.amount);
        self.in_flight.push(PendingFetch {
            generation: self.generation,
            handle,
        });

        let state = QuestionsState::new(category, self.generation, self.output.clone());
        self.set_current_phase(Phase::InProgress(state));
        Ok(())
    }

    /// Panics if `index` does not designate one of the current questions.
    pub fn select_answer(&mut self, index: usize, answer: &str) -> Result<(), QuizError> {
        let phase = self.phase();
        match &mut self.current_phase {
            Phase::InProgress(state) => state.select_answer(index, answer),
            _ => Err(reject(Operation::SelectAnswer, phase)),
        }
    }

    pub fn grade(&mut self) -> Result<usize, QuizError> {
        let results = match &self.current_phase {
            Phase::Graded(state) => return Ok(state.score()),
            Phase::NotStarted(_) => return Err(reject(Operation::Grade, PhaseKind::NotStarted)),
            Phase::InProgress(state) => {
                if let Some(e) = state.fetch_error() {
                    return Err(QuizError::FetchFailed(e.clone()));
                }
                if state.is_loading() {
                    return Err(QuizError::QuestionsPending);
                }
                ResultsState::new(
                    state.category(),
                    state.questions().to_vec(),
                    self.output.clone(),
                )
            }
        };
        let score = results.score();
        self.set_current_phase(Phase::Graded(results));
        Ok(score)
    }

    pub fn restart(&mut self) -> Result<(), QuizError> {
        let phase = self.phase();
        if phase == PhaseKind::NotStarted {
            return Err(reject(Operation::Restart, phase));
        }
        let state = SetupState::new(self.category(), self.output.clone());
        self.set_current_phase(Phase::NotStarted(state));
        Ok(())
    }

    /// Applies a finished fetch if it belongs to the quiz currently in progress.
    /// Returns whether the result was applied.
    pub fn apply_fetch_result(
        &mut self,
        generation: u64,
        result: Result<Vec<RawQuestion>, FetchError>,
    ) -> bool {
        match &mut self.current_phase {
            Phase::InProgress(state) if state.generation() == generation => {
                state.load(result, &mut rand::thread_rng());
                true
            }
            _ => {
                debug!("Discarding stale fetch result from generation {}", generation);
                false
            }
        }
    }

    /// Collects finished fetches.
    pub fn tick(&mut self) {
        let mut finished = Vec::new();
        self.in_flight.retain(|pending| match pending.handle.poll() {
            Some(result) => {
                finished.push((pending.generation, result));
                false
            }
            None => true,
        });
        for (generation, result) in finished {
            self.apply_fetch_result(generation, result);
        }
    }

    /// Shows the current state of the quiz again.
    pub fn render(&self) {
        let message = match &self.current_phase {
            Phase::NotStarted(s) => Message::StartPage(s.category()),
            Phase::InProgress(s) => match s.fetch_error() {
                Some(e) => Message::FetchFailed(e.clone()),
                None if s.is_loading() => Message::FetchingQuestions(s.category()),
                None => Message::QuestionsReady(s.questions().to_vec()),
            },
            Phase::Graded(s) => Message::QuizResults(s.questions().to_vec(), s.score()),
        };
        self.output.say(&message);
    }
}
