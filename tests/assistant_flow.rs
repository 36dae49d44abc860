use anyhow::{anyhow, Result};
use async_trait::async_trait;
use listing_scout::backend::{ChatBackend, ChatMessage, ChatRequest, Sender};
use listing_scout::{Assistant, ListingExtractor};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Backend answering from a fixed script and recording what it was sent
#[derive(Clone, Default)]
struct ScriptedBackend {
    replies: Arc<Mutex<VecDeque<Result<String, String>>>>,
    seen: Arc<Mutex<Vec<ChatRequest>>>,
}

impl ScriptedBackend {
    fn new(replies: Vec<Result<&str, &str>>) -> Self {
        let replies = replies
            .into_iter()
            .map(|reply| reply.map(str::to_string).map_err(str::to_string))
            .collect();
        Self {
            replies: Arc::new(Mutex::new(replies)),
            seen: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<ChatRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        self.seen.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(err)) => Err(anyhow!(err)),
            None => Err(anyhow!("script exhausted")),
        }
    }

    fn backend_name(&self) -> &'static str {
        "scripted"
    }
}

const LISTING_REPLY: &str = "Voici 1 option:\n1. **Studio Centre**\n**Prix**: 750€\n**Chambres**: 1\n**Salles de bain**: 1\n**Localisation**: Centre-ville\n![Photo](https://img.example/studio.jpg)\n";

#[tokio::test]
async fn reply_with_listings_is_extracted() {
    let backend = ScriptedBackend::new(vec![Ok(LISTING_REPLY)]);
    let mut assistant = Assistant::new(backend.clone(), ListingExtractor::new());

    let turn = assistant.ask("  Un studio au centre ?  ").await.unwrap();

    assert_eq!(turn.reply.text, LISTING_REPLY);
    assert_eq!(turn.extraction.introduction, "Voici 1 option:");
    assert_eq!(turn.extraction.listings.len(), 1);
    assert_eq!(
        turn.extraction.listings[0].image_url,
        "https://img.example/studio.jpg"
    );

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].message, "Un studio au centre ?");
    assert!(requests[0].history.is_empty());
}

#[tokio::test]
async fn history_is_sent_with_the_next_message() {
    let backend = ScriptedBackend::new(vec![Ok("Quel budget ?"), Ok(LISTING_REPLY)]);
    let mut assistant =
        Assistant::new(backend.clone(), ListingExtractor::new()).with_session("session-42");

    let first = assistant.ask("Je cherche un studio").await.unwrap();
    assert!(first.extraction.is_prose());

    assistant.ask("800€ maximum").await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[1].session_id.as_deref(), Some("session-42"));
    assert_eq!(
        requests[1].history,
        vec![
            ChatMessage::user("Je cherche un studio"),
            ChatMessage::assistant("Quel budget ?"),
        ]
    );
    assert_eq!(assistant.history().len(), 4);
    assert_eq!(assistant.history()[3].sender, Sender::Assistant);
}

#[tokio::test]
async fn failed_turn_leaves_history_untouched() {
    let backend = ScriptedBackend::new(vec![Err("backend down"), Ok("Bonjour")]);
    let mut assistant = Assistant::new(backend.clone(), ListingExtractor::new());

    let err = assistant.ask("Bonjour").await.unwrap_err();
    assert_eq!(err.to_string(), "backend down");
    assert!(assistant.history().is_empty());

    assistant.ask("Bonjour").await.unwrap();
    assert_eq!(assistant.history().len(), 2);
}

#[tokio::test]
async fn invalid_message_never_reaches_the_backend() {
    let backend = ScriptedBackend::new(vec![Ok("unused")]);
    let mut assistant = Assistant::new(backend.clone(), ListingExtractor::new());

    assert!(assistant.ask("   ").await.is_err());
    assert!(assistant.ask("<script>x</script>").await.is_err());
    assert!(backend.requests().is_empty());
}
