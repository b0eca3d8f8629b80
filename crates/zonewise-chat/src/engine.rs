//! The turn engine: session state machine, dispatch, and persistence.
//!
//! One call handles one turn to completion: append the user message,
//! classify, resolve the zone, append the assistant reply, assign the
//! chat title on the first real query, and flush the history store. Turn
//! processing is a pure function of (session, utterance): the caller
//! passes the current session in and receives the updated session back.

use tracing::{debug, warn};

use zonewise_core::catalog::ZoneCatalog;
use zonewise_core::clock::DisplayClock;
use zonewise_core::config::ChatConfig;
use zonewise_core::error::Result;
use zonewise_core::types::{
    ChatSession, HistoryStore, Intent, Message, SessionPhase, UserProfile,
};
use zonewise_storage::HistoryRepository;

use crate::classify;
use crate::error::ChatError;
use crate::reply;
use crate::resolver;

/// The result of one completed turn.
#[derive(Debug)]
pub struct TurnOutcome {
    /// The session with the user and assistant messages appended.
    pub session: ChatSession,
    /// The assistant reply, also present as the session's last message.
    pub reply: Message,
    /// Outcome of the synchronous history flush. A failed flush does not
    /// fail the turn; the in-memory transcript is intact either way.
    pub saved: Result<()>,
}

/// Coordinates classification, zone resolution, replies, and persistence.
pub struct ChatEngine<R: HistoryRepository> {
    repository: R,
    clock: DisplayClock,
    max_utterance_chars: usize,
}

impl<R: HistoryRepository> ChatEngine<R> {
    pub fn new(config: &ChatConfig, repository: R) -> Self {
        Self {
            repository,
            clock: DisplayClock::from_offset_minutes(config.utc_offset_minutes),
            max_utterance_chars: config.max_utterance_chars,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Load the full history store from the repository.
    pub fn load_history(&self) -> HistoryStore {
        self.repository.load_all()
    }

    /// Begin a session for a submitted identity.
    ///
    /// The session starts with the canned welcome message and waits for
    /// its first query; no title exists yet and nothing is persisted.
    pub fn start_session(&self, profile: UserProfile) -> ChatSession {
        let welcome = Message::assistant(
            reply::welcome(&profile.name),
            self.clock.now_display(),
        );
        ChatSession {
            profile,
            chat_title: None,
            messages: vec![welcome],
            phase: SessionPhase::AwaitingFirstQuery,
        }
    }

    /// Process one utterance to completion.
    ///
    /// Validation failures reject the call before any state changes. A
    /// persistence failure is reported in [`TurnOutcome::saved`] while the
    /// updated session is still returned.
    pub fn handle_utterance(
        &self,
        session: &ChatSession,
        utterance: &str,
        catalog: &ZoneCatalog,
        history: &mut HistoryStore,
    ) -> std::result::Result<TurnOutcome, ChatError> {
        if session.phase == SessionPhase::AwaitingIdentity {
            return Err(ChatError::AwaitingIdentity);
        }
        if utterance.is_empty() {
            return Err(ChatError::EmptyUtterance);
        }
        if utterance.chars().count() > self.max_utterance_chars {
            return Err(ChatError::UtteranceTooLong(self.max_utterance_chars));
        }

        let mut session = session.clone();
        let timestamp = self.clock.now_display();
        session
            .messages
            .push(Message::user(utterance, timestamp.clone()));

        // Greetings stop the turn early: no keyword dispatch, no zone
        // resolution, no title assignment.
        let assistant = if classify::is_greeting(utterance) {
            Message::assistant(reply::greeting(session.username()), timestamp)
                .with_intent(Intent::Greeting)
        } else {
            let classification = classify::classify(utterance);
            debug!(intent = %classification.intent, "Utterance classified");

            let assistant = match classification.intent {
                Intent::Risk => {
                    // Risk is reported across all zones; no zone resolution.
                    let content = match classification.factor {
                        Some(factor) => reply::risk_factor_reply(factor),
                        None => reply::risk_overall_reply(),
                    };
                    Message::assistant(content, timestamp)
                        .with_intent(Intent::Risk)
                        .with_factor(classification.factor)
                }
                Intent::Unknown => {
                    Message::assistant(reply::help(), timestamp).with_intent(Intent::Unknown)
                }
                intent => {
                    let zone = intent
                        .dataset()
                        .and_then(|dataset| resolver::resolve_zone(utterance, catalog.zones(dataset)));
                    let content = match zone.as_deref() {
                        Some(zone) => reply::zone_reply(intent, zone),
                        None => reply::invalid_zone(),
                    };
                    Message::assistant(content, timestamp)
                        .with_intent(intent)
                        .with_zone(zone)
                }
            };

            // The first real query names the chat, exactly once.
            if session.chat_title.is_none() {
                let title = match classification.intent.title() {
                    Some(title) => title.to_string(),
                    None => self.clock.chat_label(),
                };
                session.chat_title = Some(title);
            }
            session.phase = SessionPhase::Active;

            assistant
        };

        session.messages.push(assistant.clone());

        // A greeting-only session has no title yet and stays in memory;
        // once titled, every turn flushes the full store synchronously.
        let saved = match session.chat_title.as_deref() {
            Some(title) => {
                history.upsert(session.username(), title, session.messages.clone());
                let result = self.repository.save_all(history);
                if let Err(e) = &result {
                    warn!("History flush failed: {}", e);
                }
                result
            }
            None => Ok(()),
        };

        Ok(TurnOutcome {
            session,
            reply: assistant,
            saved,
        })
    }

    /// Delete one saved chat and persist the removal immediately.
    ///
    /// Returns whether the entry existed; deleting a nonexistent entry is
    /// a no-op at the store level and writes nothing.
    pub fn delete_chat(
        &self,
        username: &str,
        title: &str,
        history: &mut HistoryStore,
    ) -> Result<bool> {
        if history.remove(username, title) {
            self.repository.save_all(history)?;
            debug!("Deleted chat '{}' for {}", title, username);
            return Ok(true);
        }
        Ok(false)
    }
}

// =============================================================================
// Tests
// =============================================================================
