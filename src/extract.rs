//! Recovers the business idea from an inbound message
//!
//! Messages arrive in two shapes: a fresh text part (direct API use), or an
//! entire conversation transcript embedded as a data part (platform
//! integrations replaying history). Either way the extractor produces the
//! same idea string, or the empty string when nothing usable is present.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::protocol::message::{Message, MessagePart};

/// Markers that identify agent-emitted noise in replayed history
///
/// The defaults are tuned to one upstream integration's progress-message
/// phrasing; deployments talking to a different platform can construct
/// their own filter.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    /// Case-insensitive substrings that mark a progress message
    substrings: Vec<String>,

    /// Exact strings to reject (truncation artifacts)
    literals: Vec<String>,
}

impl NoiseFilter {
    /// Create a filter with custom markers
    pub fn new(
        substrings: impl IntoIterator<Item = impl Into<String>>,
        literals: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            substrings: substrings
                .into_iter()
                .map(|s| s.into().to_lowercase())
                .collect(),
            literals: literals.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a candidate string is noise rather than a user request
    pub fn is_noise(&self, candidate: &str) -> bool {
        let lowered = candidate.to_lowercase();
        self.substrings.iter().any(|m| lowered.contains(m.as_str()))
            || self.literals.iter().any(|l| l == candidate)
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(["generating", "creating"], [".", "..", "...", "ce..."])
    }
}

/// Extracts the caller's business idea from a message
#[derive(Debug, Clone, Default)]
pub struct IdeaExtractor {
    filter: NoiseFilter,
}

impl IdeaExtractor {
    /// Create an extractor with a custom noise filter
    pub fn new(filter: NoiseFilter) -> Self {
        Self { filter }
    }

    /// Extract the idea string from a message
    ///
    /// Never fails: candidates accumulate in part order, are joined with a
    /// single space and trimmed, and the empty string means "no idea found".
    pub fn extract(&self, message: &Message) -> String {
        let mut texts = Vec::new();

        for part in &message.parts {
            match part {
                MessagePart::Text { text: Some(text) } if !text.is_empty() => {
                    texts.push(text.clone());
                }
                MessagePart::Data { data: Some(data) } => {
                    if let Some(candidate) = self.from_history(data) {
                        texts.push(candidate);
                    }
                }
                _ => {}
            }
        }

        let idea = texts.join(" ").trim().to_string();
        debug!(%idea, "extracted business idea");
        idea
    }

    /// Pull the most recent usable turn out of an embedded history payload
    ///
    /// Histories are assumed most-recent-last, so records are scanned from
    /// the end toward the start and the first acceptable candidate wins.
    /// Decode failures skip the part; they never fail the request.
    fn from_history(&self, data: &Value) -> Option<String> {
        let records = match DataPayload::deserialize(data) {
            Ok(DataPayload::Records(records)) => records,
            Ok(DataPayload::Serialized(raw)) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(err) => {
                    warn!(%err, "skipping data part with undecodable history");
                    return None;
                }
            },
            Err(err) => {
                warn!(%err, "skipping data part with unrecognized payload");
                return None;
            }
        };

        for record in records.iter().rev() {
            if record.get("kind").and_then(Value::as_str) != Some("text") {
                continue;
            }
            let Some(text) = record.get("text").and_then(Value::as_str) else {
                continue;
            };
            if text.is_empty() {
                continue;
            }

            let candidate = normalize(text);
            if candidate.is_empty() || self.filter.is_noise(&candidate) {
                debug!(%candidate, "rejected history candidate as noise");
                continue;
            }

            return Some(candidate);
        }

        None
    }
}

/// A data part's payload, decoded once at the boundary
///
/// Either an inline array of history records, or a JSON-encoded string
/// carrying the same array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DataPayload {
    Records(Vec<Value>),
    Serialized(String),
}

/// Trim a history candidate and strip literal paragraph markup
fn normalize(text: &str) -> String {
    let stripped = text.trim().replace("<p>", "").replace("</p>", "");
    stripped.trim().to_string()
}
