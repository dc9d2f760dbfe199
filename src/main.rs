use anyhow::{Context, Result};
use log::{info, warn};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;

mod commands;
mod fetch;
mod output;
mod quiz;
mod text;

use crate::commands::Flow;
use crate::fetch::OpenTriviaSource;
use crate::output::terminal::TerminalOutput;
use crate::output::{Message, QuizOutput};
use crate::quiz::settings::Settings;
use crate::quiz::Session;

fn spawn_input_thread() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Could not read input: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let settings = Settings::from_env().context("Invalid settings")?;
    let source = OpenTriviaSource::new(&settings).context("Could not create HTTP client")?;
    let output = TerminalOutput::new();
    let tick_interval = settings.tick_interval;
    let mut session = Session::new(settings, source, output.clone());

    let input = spawn_input_thread();
    loop {
        match input.recv_timeout(tick_interval) {
            Ok(line) if line.trim().is_empty() => (),
            Ok(line) => {
                let result = commands::parse(&line)
                    .and_then(|command| commands::execute(&mut session, command, &output));
                match result {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => (),
                    Err(e) => {
                        warn!("{:#}", e);
                        output.say(&Message::CommandFailed(format!("{}", e)));
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => (),
            Err(RecvTimeoutError::Disconnected) => break,
        }
        session.tick();
    }

    info!("Goodbye!");
    Ok(())
}
