use crate::quiz::category::CategoryId;
use crate::quiz::definition::Question;
use crate::quiz::error::FetchError;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerSelected(usize, String),
    Categories(CategoryId),
    CategorySelected(CategoryId),
    CommandFailed(String),
    FetchFailed(FetchError),
    FetchingQuestions(CategoryId),
    Help,
    QuestionsReady(Vec<Question>),
    QuizResults(Vec<Question>, usize),
    StartPage(CategoryId),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
