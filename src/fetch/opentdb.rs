use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::Url;
use std::thread;

use crate::fetch::{FetchHandle, QuestionSource};
use crate::quiz::category::CategoryId;
use crate::quiz::definition::{QuizDefinition, RawQuestion};
use crate::quiz::error::FetchError;
use crate::quiz::settings::Settings;

/// Open Trivia DB over HTTP. Each fetch runs on its own thread.
#[derive(Clone, Debug)]
pub struct OpenTriviaSource {
    client: Client,
    api_url: String,
}

impl OpenTriviaSource {
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(OpenTriviaSource {
            client,
            api_url: settings.api_url.clone(),
        })
    }
}

fn request_questions(
    client: &Client,
    api_url: &str,
    category: CategoryId,
    amount: u32,
) -> Result<Vec<RawQuestion>, FetchError> {
    let url = Url::parse_with_params(
        api_url,
        &[
            ("amount", amount.to_string()),
            ("category", category.to_string()),
        ],
    )
    .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    debug!("Requesting {}", url);
    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| FetchError::Network(e.to_string()))?;
    Ok(QuizDefinition::parse(&body)?.into_questions())
}

impl QuestionSource for OpenTriviaSource {
    fn fetch(&self, category: CategoryId, amount: u32) -> FetchHandle {
        let handle = FetchHandle::new();
        let publisher = handle.clone();
        let client = self.client.clone();
        let api_url = self.api_url.clone();

        info!("Fetching {} questions for category {}", amount, category);
        thread::spawn(move || {
            let result = request_questions(&client, &api_url, category, amount);
            match &result {
                Ok(questions) => info!("Received {} questions", questions.len()),
                Err(e) => warn!("Could not fetch questions: {}", e),
            }
            publisher.resolve(result);
        });

        handle
    }
}
