use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::commands::Command;
use crate::quiz::definition::Question;
use crate::text::sanitize;

lazy_static! {
    static ref COMMAND_REGEX: Regex = Regex::new(r"^\s*(\S+)\s*(.*?)\s*$").unwrap();
    static ref ANSWER_ARGS_REGEX: Regex = Regex::new(r"^#?(\d+)\s+(.+)$").unwrap();
}

pub fn parse(line: &str) -> Result<Command> {
    let captures = COMMAND_REGEX
        .captures(line)
        .context("Type a command, or `help` to list them")?;
    let name = captures[1].to_lowercase();
    let args = captures[2].to_owned();

    let command = match name.as_str() {
        "categories" => Command::Categories,
        "category" | "cat" => {
            if args.is_empty() {
                return Err(anyhow!("Usage: category <id|name>"));
            }
            Command::Category(args)
        }
        "start" => Command::Start,
        "answer" | "a" => {
            let captures = ANSWER_ARGS_REGEX
                .captures(&args)
                .context("Usage: answer <question> <choice>")?;
            let question: usize = captures[1].parse()?;
            if question == 0 {
                return Err(anyhow!("Questions are numbered from 1"));
            }
            Command::Answer {
                question: question - 1,
                choice: captures[2].to_owned(),
            }
        }
        "check" | "grade" => Command::Check,
        "again" | "restart" => Command::Restart,
        "toggle" => Command::Toggle,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(anyhow!("Unknown command `{}`, type `help` to list commands", other)),
    };
    Ok(command)
}

/// Resolves a user choice to one of the question's answers. Answer text wins
/// over list positions so numeric answers can be typed as-is; `#N` always
/// designates the N-th answer.
pub fn resolve_choice<'a>(question: &'a Question, choice: &str) -> Option<&'a str> {
    let answers = question.answers();
    let choice = choice.trim();
    if let Some(position) = choice.strip_prefix('#') {
        return position
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| answers.get(index))
            .map(|answer| answer.as_str());
    }

    let sanitized_choice = sanitize(choice);
    if sanitized_choice.is_empty() {
        return None;
    }
    if let Some(answer) = answers.iter().find(|answer| sanitize(answer) == sanitized_choice) {
        return Some(answer.as_str());
    }

    match choice.parse::<usize>() {
        Ok(number) if number >= 1 && number <= answers.len() => {
            Some(answers[number - 1].as_str())
        }
        _ => None,
    }
}
