use crate::output::{Message, QuizOutput};
use crate::quiz::category::CategoryId;
use crate::quiz::definition::Question;
use crate::quiz::State;


/// Graded quiz. Selections are frozen and the score is computed once.
#[derive(Clone, Debug)]
pub struct ResultsState<O> {
    category: CategoryId,
    questions: Vec<Question>,
    score: usize,
    output: O,
}

impl<O: QuizOutput> ResultsState<O> {
    pub fn new(category: CategoryId, questions: Vec<Question>, output: O) -> Self {
        let score = questions.iter().filter(|q| q.is_answered_correctly()).count();
        ResultsState {
            category,
            questions,
            score,
            output,
        }
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> usize {
        self.score
    }
}

impl<O: QuizOutput> State for ResultsState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuizResults(
            self.questions.clone(),
            self.score,
        ));
    }

    fn on_end(&mut self) {}
}
