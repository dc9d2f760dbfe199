use serde::Deserialize;

use crate::quiz::error::{FetchError, ResponseCode};

pub mod question;

pub use question::{classify, normalize, AnswerMark, Question, RawQuestion};

/// Payload of a question bank response.
#[derive(Debug, Deserialize)]
pub struct QuizDefinition {
    #[serde(default)]
    response_code: u8,
    results: Vec<RawQuestion>,
}

impl QuizDefinition {
    pub fn parse(body: &str) -> Result<QuizDefinition, FetchError> {
        let definition: QuizDefinition =
            serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
        if definition.response_code != 0 {
            return Err(FetchError::Api(definition.response_code.into()));
        }
        Ok(definition)
    }

    #[cfg(test)]
    pub fn get_questions(&self) -> &Vec<RawQuestion> {
        &self.results
    }

    pub fn into_questions(self) -> Vec<RawQuestion> {
        self.results
    }
}
