use anyhow::{anyhow, Result};

use crate::fetch::QuestionSource;
use crate::output::{Message, QuizOutput};
use crate::quiz::category::Category;
use crate::quiz::error::QuizError;
use crate::quiz::{PhaseKind, Session};

mod parse;

pub use parse::{parse, resolve_choice};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Categories,
    Category(String),
    Start,
    Answer { question: usize, choice: String },
    Check,
    Restart,
    Toggle,
    Show,
    Help,
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

fn answer<O, S>(session: &mut Session<O, S>, question: usize, choice: &str) -> Result<()>
where
    O: QuizOutput + Clone,
    S: QuestionSource,
{
    if session.phase() != PhaseKind::InProgress {
        session.select_answer(question, choice)?;
        return Ok(());
    }
    if let Some(e) = session.fetch_error() {
        return Err(QuizError::FetchFailed(e.clone()).into());
    }
    if session.is_loading() {
        return Err(QuizError::QuestionsPending.into());
    }

    let len = session.questions().len();
    if len == 0 {
        return Err(anyhow!("This quiz has no questions, type `start` to fetch a new batch"));
    }
    let answer = match session.questions().get(question) {
        Some(q) => resolve_choice(q, choice).unwrap_or(choice).to_owned(),
        None => {
            return Err(anyhow!(
                "There is no question #{}, pick one between 1 and {}",
                question + 1,
                len
            ))
        }
    };
    session.select_answer(question, &answer)?;
    Ok(())
}

pub fn execute<O, S>(session: &mut Session<O, S>, command: Command, output: &O) -> Result<Flow>
where
    O: QuizOutput + Clone,
    S: QuestionSource,
{
    match command {
        Command::Categories => output.say(&Message::Categories(session.category())),
        Command::Category(query) => {
            let category = Category::find(&query)
                .ok_or_else(|| anyhow!("Unknown category `{}`, type `categories` to list them", query))?;
            session.select_category(category)?;
        }
        Command::Start => session.start()?,
        Command::Answer { question, choice } => answer(session, question, &choice)?,
        Command::Check => {
            session.grade()?;
        }
        Command::Restart => session.restart()?,
        Command::Toggle => match session.phase() {
            PhaseKind::Graded => session.restart()?,
            _ => {
                session.grade()?;
            }
        },
        Command::Show => session.render(),
        Command::Help => output.say(&Message::Help),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
