use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// A statistics domain backed by one tabular source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Flood,
    Accident,
    Crime,
    Pollution,
    Heat,
    Population,
    Risk,
}

impl Dataset {
    /// All datasets in catalog order.
    pub const ALL: [Dataset; 7] = [
        Dataset::Flood,
        Dataset::Accident,
        Dataset::Crime,
        Dataset::Pollution,
        Dataset::Heat,
        Dataset::Population,
        Dataset::Risk,
    ];
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Flood => write!(f, "flood"),
            Dataset::Accident => write!(f, "accident"),
            Dataset::Crime => write!(f, "crime"),
            Dataset::Pollution => write!(f, "pollution"),
            Dataset::Heat => write!(f, "heat"),
            Dataset::Population => write!(f, "population"),
            Dataset::Risk => write!(f, "risk"),
        }
    }
}

impl std::str::FromStr for Dataset {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flood" => Ok(Dataset::Flood),
            "accident" => Ok(Dataset::Accident),
            "crime" => Ok(Dataset::Crime),
            "pollution" => Ok(Dataset::Pollution),
            "heat" => Ok(Dataset::Heat),
            "population" => Ok(Dataset::Population),
            "risk" => Ok(Dataset::Risk),
            _ => Err(format!("Unknown dataset: {}", s)),
        }
    }
}

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// The classified purpose of a user utterance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Flood,
    Accident,
    Crime,
    Pollution,
    Heat,
    Population,
    Risk,
    Unknown,
}

impl Intent {
    /// The dataset consulted for zone resolution, for dataset-backed intents.
    pub fn dataset(self) -> Option<Dataset> {
        match self {
            Intent::Flood => Some(Dataset::Flood),
            Intent::Accident => Some(Dataset::Accident),
            Intent::Crime => Some(Dataset::Crime),
            Intent::Pollution => Some(Dataset::Pollution),
            Intent::Heat => Some(Dataset::Heat),
            Intent::Population => Some(Dataset::Population),
            Intent::Risk => Some(Dataset::Risk),
            Intent::Greeting | Intent::Unknown => None,
        }
    }

    /// Capitalized label used when a keyword intent names a chat.
    pub fn title(self) -> Option<&'static str> {
        match self {
            Intent::Flood => Some("Flood"),
            Intent::Accident => Some("Accident"),
            Intent::Crime => Some("Crime"),
            Intent::Pollution => Some("Pollution"),
            Intent::Heat => Some("Heat"),
            Intent::Population => Some("Population"),
            Intent::Risk => Some("Risk"),
            Intent::Greeting | Intent::Unknown => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Greeting => write!(f, "greeting"),
            Intent::Flood => write!(f, "flood"),
            Intent::Accident => write!(f, "accident"),
            Intent::Crime => write!(f, "crime"),
            Intent::Pollution => write!(f, "pollution"),
            Intent::Heat => write!(f, "heat"),
            Intent::Population => write!(f, "population"),
            Intent::Risk => write!(f, "risk"),
            Intent::Unknown => write!(f, "unknown"),
        }
    }
}

/// A single factor of the composite risk table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Accident,
    AirPollution,
    Flood,
    Heat,
    Crime,
    Population,
}

impl fmt::Display for RiskFactor {
    /// Matches the column labels of the risk table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFactor::Accident => write!(f, "Accident"),
            RiskFactor::AirPollution => write!(f, "Air Pollution"),
            RiskFactor::Flood => write!(f, "Flood"),
            RiskFactor::Heat => write!(f, "Heat"),
            RiskFactor::Crime => write!(f, "Crime"),
            RiskFactor::Population => write!(f, "Population"),
        }
    }
}

// =============================================================================
// Messages
// =============================================================================

/// One chat bubble: a user utterance or an assistant reply.
///
/// Immutable once appended to a session; transcript order is append order.
/// The intent/zone/factor tags let the presentation layer decide which
/// table, chart, or tip list to render next to the bubble.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    /// Display timestamp, e.g. "04:23 PM".
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<RiskFactor>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: timestamp.into(),
            intent: None,
            zone: None,
            factor: None,
        }
    }

    /// A user message carrying the raw utterance.
    pub fn user(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(Role::User, content, timestamp)
    }

    /// An assistant reply with no classification tags.
    pub fn assistant(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content, timestamp)
    }

    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn with_zone(mut self, zone: Option<String>) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_factor(mut self, factor: Option<RiskFactor>) -> Self {
        self.factor = factor;
        self
    }
}

// =============================================================================
// Sessions
// =============================================================================

/// Identity submitted through the intake form.
///
/// Only `name` participates in engine logic (greeting personalization and
/// the history key); the remaining fields ride along for the profile panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub email: String,
}

impl UserProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Lifecycle phase of a chat session.
///
/// `AwaitingIdentity -> AwaitingFirstQuery -> Active`; `Active` loops on
/// itself for every subsequent turn, and an explicit reset returns to
/// `AwaitingIdentity`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    AwaitingIdentity,
    AwaitingFirstQuery,
    Active,
}

/// One user's live conversation.
///
/// The chat title is assigned lazily on the first real (non-greeting)
/// query, exactly once, and is the key under which the transcript persists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub profile: UserProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_title: Option<String>,
    pub messages: Vec<Message>,
    pub phase: SessionPhase,
}

impl ChatSession {
    /// A blank session waiting for the intake form.
    pub fn awaiting_identity() -> Self {
        Self::default()
    }

    /// Reopen a previously saved transcript under its title.
    pub fn resume(profile: UserProfile, title: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            profile,
            chat_title: Some(title.into()),
            messages,
            phase: SessionPhase::Active,
        }
    }

    pub fn username(&self) -> &str {
        &self.profile.name
    }
}

// =============================================================================
// History
// =============================================================================

/// Every saved transcript, keyed by username then chat title.
///
/// Process-wide state: loaded once at startup and flushed in full after
/// each mutating turn. `BTreeMap` keeps the serialized form deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryStore(BTreeMap<String, BTreeMap<String, Vec<Message>>>);

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the transcript for `(username, title)`.
    pub fn upsert(&mut self, username: &str, title: &str, messages: Vec<Message>) {
        self.0
            .entry(username.to_string())
            .or_default()
            .insert(title.to_string(), messages);
    }

    /// Remove the transcript for `(username, title)`.
    ///
    /// Returns whether an entry was actually removed; removing a
    /// nonexistent entry is a no-op.
    pub fn remove(&mut self, username: &str, title: &str) -> bool {
        self.0
            .get_mut(username)
            .map(|chats| chats.remove(title).is_some())
            .unwrap_or(false)
    }

    pub fn get(&self, username: &str, title: &str) -> Option<&[Message]> {
        self.0
            .get(username)
            .and_then(|chats| chats.get(title))
            .map(Vec::as_slice)
    }

    /// Saved chat titles for one user, in stored order.
    pub fn titles_for(&self, username: &str) -> Vec<&str> {
        self.0
            .get(username)
            .map(|chats| chats.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Total number of saved chats across all users.
    pub fn chat_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }
}

// =============================================================================
// Tests
// =============================================================================
