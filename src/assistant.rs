use crate::backend::{validate_message, ChatBackend, ChatMessage, ChatRequest};
use crate::extractor::ListingExtractor;
use crate::models::{AssistantReply, ExtractionResult};
use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info, warn};

/// One exchange with the assistant
#[derive(Debug, Clone)]
pub struct AssistantTurn {
    pub reply: AssistantReply,
    pub extraction: ExtractionResult,
}

/// Conversation with a chat backend, keeping the history between turns
pub struct Assistant<B> {
    backend: B,
    extractor: ListingExtractor,
    session_id: Option<String>,
    history: Vec<ChatMessage>,
}

impl<B: ChatBackend> Assistant<B> {
    pub fn new(backend: B, extractor: ListingExtractor) -> Self {
        Self {
            backend,
            extractor,
            session_id: None,
            history: Vec::new(),
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send a message and extract listings from the answer.
    /// History only grows when the backend answered.
    pub async fn ask(&mut self, message: &str) -> Result<AssistantTurn> {
        validate_message(message)?;
        let message = message.trim();

        let request = ChatRequest {
            message: message.to_string(),
            history: self.history.clone(),
            session_id: self.session_id.clone(),
        };

        info!(
            "Asking {} ({} prior messages)",
            self.backend.backend_name(),
            self.history.len()
        );
        let text = self.backend.complete(&request).await?;

        self.history.push(ChatMessage::user(message));
        self.history.push(ChatMessage::assistant(text.clone()));

        let (extraction, report) = self.extractor.extract_with_report(&text);
        for dropped in &report.dropped {
            debug!(
                "Dropped entry {}. '{}': missing {:?}",
                dropped.ordinal, dropped.title, dropped.missing
            );
        }
        if report.all_dropped() {
            warn!(
                "Reply had {} numbered entries but none was a complete listing",
                report.headings
            );
        } else {
            info!("Extracted {} listings", extraction.listings.len());
        }

        Ok(AssistantTurn {
            reply: AssistantReply {
                text,
                received_at: Utc::now(),
            },
            extraction,
        })
    }
}
