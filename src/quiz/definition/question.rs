use rand::Rng;
use serde::Deserialize;

use crate::quiz::error::QuizError;
use crate::text::decode;

/// Question record as served by the question bank, with HTML-encoded text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnswerMark {
    CorrectAndChosen,
    CorrectNotChosen,
    ChosenButWrong,
    Neutral,
}

pub fn classify(answer: &str, selected_answer: Option<&str>, correct_answer: &str) -> AnswerMark {
    let is_selected = selected_answer == Some(answer);
    let is_correct = answer == correct_answer;
    match (is_selected, is_correct) {
        (true, true) => AnswerMark::CorrectAndChosen,
        (true, false) => AnswerMark::ChosenButWrong,
        (false, true) => AnswerMark::CorrectNotChosen,
        (false, false) => AnswerMark::Neutral,
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    text: String,
    answers: Vec<String>,
    correct_answer: String,
    selected_answer: Option<String>,
}

impl Question {
    pub fn from_raw<R: Rng + ?Sized>(raw_question: RawQuestion, rng: &mut R) -> Self {
        let correct_answer = decode(&raw_question.correct_answer);

        // Gather all answers, correct one last
        let mut answers: Vec<String> = Vec::with_capacity(raw_question.incorrect_answers.len() + 1);
        for answer in &raw_question.incorrect_answers {
            let answer = decode(answer);
            if answer != correct_answer && !answers.contains(&answer) {
                answers.push(answer);
            }
        }
        answers.push(correct_answer.clone());

        shuffle(&mut answers, rng);

        Question {
            text: decode(&raw_question.question),
            answers,
            correct_answer,
            selected_answer: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn is_answered_correctly(&self) -> bool {
        self.selected_answer() == Some(self.correct_answer())
    }

    pub fn mark(&self, answer: &str) -> AnswerMark {
        classify(answer, self.selected_answer(), self.correct_answer())
    }

    pub fn select(&mut self, answer: &str) -> Result<(), QuizError> {
        if !self.answers.iter().any(|a| a == answer) {
            return Err(QuizError::UnknownAnswer(answer.to_owned()));
        }
        self.selected_answer = Some(answer.to_owned());
        Ok(())
    }
}

/// Unbiased in-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

pub fn normalize<R: Rng + ?Sized>(raw_questions: Vec<RawQuestion>, rng: &mut R) -> Vec<Question> {
    raw_questions
        .into_iter()
        .map(|raw_question| Question::from_raw(raw_question, &mut *rng))
        .collect()
}
