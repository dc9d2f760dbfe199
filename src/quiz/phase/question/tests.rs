use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::fetch::mock::books_batch;
use crate::output::mock::MockQuizOutput;
use crate::quiz::category::BOOKS;

struct ContextBuilder {
    batch: Option<Result<Vec<RawQuestion>, FetchError>>,
}

impl ContextBuilder {
    fn new() -> Self {
        ContextBuilder {
            batch: Some(Ok(books_batch())),
        }
    }

    fn pending(mut self) -> Self {
        self.batch = None;
        self
    }

    fn failing(mut self, error: FetchError) -> Self {
        self.batch = Some(Err(error));
        self
    }

    fn build(self) -> Context {
        let output = MockQuizOutput::new();
        let mut state = QuestionsState::new(BOOKS, 1, output.clone());
        state.on_begin();
        if let Some(batch) = self.batch {
            state.load(batch, &mut StdRng::seed_from_u64(0));
        }
        Context { state, output }
    }
}

struct Context {
    state: QuestionsState<MockQuizOutput>,
    output: MockQuizOutput,
}

impl Context {
    fn correct_answer(&self, index: usize) -> String {
        self.state.questions()[index].correct_answer().to_owned()
    }

    fn wrong_answer(&self, index: usize) -> String {
        let question = &self.state.questions()[index];
        question
            .answers()
            .iter()
            .find(|a| *a != question.correct_answer())
            .unwrap()
            .clone()
    }
}

#[test]
fn announces_fetch() {
    let ctx = ContextBuilder::new().pending().build();
    assert_eq!(ctx.output.flush(), [Message::FetchingQuestions(BOOKS)]);
    assert!(ctx.state.is_loading());
    assert!(ctx.state.questions().is_empty());
}

#[test]
fn loads_questions() {
    let ctx = ContextBuilder::new().build();
    assert!(!ctx.state.is_loading());
    assert_eq!(ctx.state.questions().len(), 5);
    assert_eq!(
        ctx.output.last_message(),
        Some(Message::QuestionsReady(ctx.state.questions().to_vec()))
    );
}

#[test]
fn surfaces_fetch_failure() {
    let ctx = ContextBuilder::new()
        .failing(FetchError::HttpStatus(500))
        .build();
    assert!(!ctx.state.is_loading());
    assert_eq!(ctx.state.fetch_error(), Some(&FetchError::HttpStatus(500)));
    assert!(ctx
        .output
        .contains_message(&Message::FetchFailed(FetchError::HttpStatus(500))));
}

#[test]
fn counts_correct_answers() {
    let mut ctx = ContextBuilder::new().build();
    for index in 0..3 {
        let answer = ctx.correct_answer(index);
        ctx.state.select_answer(index, &answer).unwrap();
    }
    let answer = ctx.wrong_answer(3);
    ctx.state.select_answer(3, &answer).unwrap();
    assert_eq!(ctx.state.score(), 3);
}

#[test]
fn unanswered_questions_do_not_count() {
    let ctx = ContextBuilder::new().build();
    assert_eq!(ctx.state.score(), 0);
}

#[test]
fn latest_selection_wins() {
    let mut ctx = ContextBuilder::new().build();
    let correct = ctx.correct_answer(0);
    let wrong = ctx.wrong_answer(0);

    ctx.state.select_answer(0, &correct).unwrap();
    ctx.state.select_answer(0, &wrong).unwrap();
    assert_eq!(ctx.state.score(), 0);

    ctx.state.select_answer(0, &correct).unwrap();
    assert_eq!(ctx.state.score(), 1);
    assert_eq!(
        ctx.output.last_message(),
        Some(Message::AnswerSelected(0, correct))
    );
}

#[test]
fn rejects_unknown_answer() {
    let mut ctx = ContextBuilder::new().build();
    assert_eq!(
        ctx.state.select_answer(0, "not an answer"),
        Err(QuizError::UnknownAnswer("not an answer".to_owned()))
    );
    assert_eq!(ctx.state.questions()[0].selected_answer(), None);
}

#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_index_panics() {
    let mut ctx = ContextBuilder::new().build();
    let _ = ctx.state.select_answer(5, "correct 1");
}
