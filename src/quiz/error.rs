use std::fmt;
use thiserror::Error;

use crate::quiz::PhaseKind;

/// Non-zero `response_code` values returned by the question bank.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResponseCode {
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(u8),
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> Self {
        match code {
            1 => ResponseCode::NoResults,
            2 => ResponseCode::InvalidParameter,
            3 => ResponseCode::TokenNotFound,
            4 => ResponseCode::TokenEmpty,
            5 => ResponseCode::RateLimit,
            other => ResponseCode::Unknown(other),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::NoResults => write!(f, "not enough questions in this category"),
            ResponseCode::InvalidParameter => write!(f, "invalid request parameter"),
            ResponseCode::TokenNotFound => write!(f, "session token not found"),
            ResponseCode::TokenEmpty => write!(f, "session token exhausted"),
            ResponseCode::RateLimit => write!(f, "too many requests, try again in a few seconds"),
            ResponseCode::Unknown(code) => write!(f, "unknown response code {}", code),
        }
    }
}

/// Errors emitted while retrieving a question batch.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum FetchError {
    #[error("invalid question bank url: {0}")]
    InvalidUrl(String),
    #[error("could not reach the question bank: {0}")]
    Network(String),
    #[error("question bank answered with HTTP status {0}")]
    HttpStatus(u16),
    #[error("question bank payload is malformed: {0}")]
    Malformed(String),
    #[error("question bank rejected the request: {0}")]
    Api(ResponseCode),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    SelectCategory,
    Start,
    SelectAnswer,
    Grade,
    Restart,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::SelectCategory => "change category",
            Operation::Start => "start",
            Operation::SelectAnswer => "select an answer",
            Operation::Grade => "check answers",
            Operation::Restart => "restart",
        };
        write!(f, "{}", verb)
    }
}

/// Errors emitted by the quiz session.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    FetchFailed(#[from] FetchError),
    #[error("cannot {operation} while the quiz is {phase}")]
    InvalidTransition {
        operation: Operation,
        phase: PhaseKind,
    },
    #[error("question index {index} is out of range for {len} questions")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("\"{0}\" is not one of the proposed answers")]
    UnknownAnswer(String),
    #[error("questions are still being fetched")]
    QuestionsPending,
}
