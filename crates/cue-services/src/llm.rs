//! Chat-completion client for script humanization and voice Q&A.
//!
//! Speaks the OpenRouter-style `/chat/completions` wire format. The API
//! credential is always passed in by the caller; the client never reads
//! ambient state.

use serde::{Deserialize, Serialize};

use cue_core::config::GenerationConfig;

use crate::error::ServiceError;

const REWRITE_SYSTEM_PROMPT: &str =
    "You are a script editor. Rewrite text to sound like imperfect human speech. \
     Output only the raw text.";

const ANSWER_SYSTEM_PROMPT: &str =
    "You are answering a spoken question for a teleprompter. Answer concisely in \
     natural spoken prose, a few sentences at most. Output only the answer text.";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for the remote text-generation endpoint.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GenerationClient {
    /// Create a client for the given endpoint and model.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Create a client from the generation section of the configuration.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.base_url.clone(), config.model.clone())
    }

    /// Rewrite a script to sound like imperfect human speech: stutters,
    /// filler words, minor self-corrections, same core meaning.
    ///
    /// Returns the input text unchanged when the model responds with empty
    /// content.
    pub async fn rewrite(&self, text: &str, api_key: &str) -> Result<String, ServiceError> {
        let messages = vec![
            ChatMessage::system(REWRITE_SYSTEM_PROMPT),
            ChatMessage::user(rewrite_prompt(text)),
        ];
        let content = self.complete(messages, api_key).await?;
        match content {
            Some(rewritten) => Ok(rewritten),
            None => {
                tracing::warn!("Rewrite returned empty content, keeping original text");
                Ok(text.to_string())
            }
        }
    }

    /// Answer a spoken question in concise spoken-style prose.
    ///
    /// When `context` is given (a resume or other background text), the
    /// model is instructed to answer from that material.
    pub async fn answer(
        &self,
        question: &str,
        api_key: &str,
        context: Option<&str>,
    ) -> Result<String, ServiceError> {
        let mut messages = vec![ChatMessage::system(ANSWER_SYSTEM_PROMPT)];
        if let Some(background) = context {
            messages.push(ChatMessage::system(format!(
                "Answer using this background material about the speaker:\n\n{background}"
            )));
        }
        messages.push(ChatMessage::user(question.to_string()));

        self.complete(messages, api_key)
            .await?
            .ok_or(ServiceError::EmptyResponse)
    }

    /// POST a completion request and return the trimmed assistant content,
    /// or `None` when the model produced nothing.
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        api_key: &str,
    ) -> Result<Option<String>, ServiceError> {
        if api_key.trim().is_empty() {
            return Err(ServiceError::MissingCredential);
        }

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
        };

        tracing::debug!(url = %url, model = %self.model, "Sending completion request");
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .header("X-Title", "Cue Teleprompter")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        let completion: ChatCompletion = response.json().await?;
        Ok(completion_content(completion))
    }
}

/// The user prompt driving the humanize rewrite, reproducing the trainer's
/// original instruction set.
fn rewrite_prompt(text: &str) -> String {
    format!(
        "Rewrite the following text to make it sound like an imperfect human speech \
         or live transcription. Add realistic \"human\" elements such as:\n\
         - Occasional stuttering (repeating the first letter of a word, e.g., \"th-this\").\n\
         - Filler words like \"um\", \"uh\", \"ah\", \"you know\".\n\
         - Minor grammar slips or self-corrections (e.g., \"I went to... uh, I mean, I drove to\").\n\
         - Keep the core meaning intact, but make the rhythm less robotic.\n\n\
         Return ONLY the rewritten text. Do not include any explanations or quotes \
         around the result.\n\n\
         Original Text:\n\"{text}\""
    )
}

/// Map a non-2xx response to `ServiceError::Api`, using the server's own
/// message when the body parses.
fn api_error(status: u16, body: &str) -> ServiceError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|e| e.message)
        .unwrap_or_else(|| "request failed".to_string());
    ServiceError::Api { status, message }
}

/// Trimmed content of the first choice, if any and non-empty.
fn completion_content(completion: ChatCompletion) -> Option<String> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}
