//! Gemini-backed profile generation

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::ProfileGenerator;
use crate::{
    profile::{CustomerProfile, ProfileResponse},
    protocol::error::AgentError,
};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Gemini `generateContent` REST endpoint
///
/// Prompts the model for a single-line `key: value` persona and parses it
/// into a [`CustomerProfile`]. All requests run under a bounded timeout.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    http: Client,
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    /// Create a generator with the default model
    pub fn new(api_key: impl Into<String>) -> Result<Self, AgentError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Use a different Gemini model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.model)
    }
}

#[async_trait]
impl ProfileGenerator for GeminiGenerator {
    async fn generate(&self, idea: &str) -> Result<ProfileResponse, AgentError> {
        let body = json!({
            "contents": [{"parts": [{"text": build_prompt(idea)}]}],
            "generationConfig": {
                "temperature": 0.7,
                "topP": 0.95,
                "maxOutputTokens": 2048,
            },
        });

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AgentError::Generation(format!(
                "Gemini returned {status}: {detail}"
            )));
        }

        let payload: Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| AgentError::Generation("no content generated".to_string()))?;
        debug!(%text, "raw model output");

        Ok(ProfileResponse::single(idea, parse_simple_profile(text)))
    }
}

/// Parse the single-line `key: value, key: value` profile format
///
/// Unknown keys are ignored and missing keys leave their fields empty, so
/// a partially well-formed model response still yields a usable profile.
fn parse_simple_profile(text: &str) -> CustomerProfile {
    let mut fields: HashMap<String, String> = HashMap::new();
    for pair in text.trim().split(", ") {
        if let Some((key, value)) = pair.split_once(": ") {
            fields.insert(key.trim().to_lowercase(), value.trim().to_string());
        }
    }

    CustomerProfile {
        age: field(&fields, "age"),
        gender: field(&fields, "gender"),
        location: field(&fields, "location"),
        occupation: field(&fields, "occupation"),
        income: field(&fields, "income"),
        motivations: split_list(&field(&fields, "motivations")),
        interests: split_list(&field(&fields, "interests")),
        pain_points: split_list(&field(&fields, "pain_points")),
        buying_behaviors: Vec::new(),
        preferred_channels: split_list(&field(&fields, "channel")),
    }
}

fn field(fields: &HashMap<String, String>, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

/// Split a comma-separated list, dropping empty entries
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn build_prompt(idea: &str) -> String {
    format!(
        r#"You are an expert market researcher. Based ONLY on the business idea "{idea}", generate a SINGLE, concise customer profile.

The output MUST be a single line of text in the format "key: value, key: value, ..." without any other text, markdown, or punctuation. Use only the following keys in this order:

age: Age range (e.g., 30-50)
gender: Gender (e.g., female)
location: Geographic type (e.g., Urban)
occupation: Job title/occupation (e.g., Marketing Manager)
income: Income range (e.g., $75k-100k)
pain_points: 1-2 main pain points (comma-separated, no quotes)
motivations: 1-2 key motivations (comma-separated, no quotes)
interests: 2-3 interests/hobbies (comma-separated, no quotes)
channel: 1 preferred channel (e.g., Instagram)

Example format: age: 30-50, gender: female, location: Urban, occupation: Marketing Manager, income: $75k-100k, pain_points: lack of time, overwhelming choices, motivations: convenience, quality, interests: makeup, shoes, travel, channel: Instagram"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LINE: &str = "age: 30-50, gender: female, location: Urban, \
        occupation: Marketing Manager, income: $75k-100k, \
        pain_points: lack of time, overwhelming choices, \
        motivations: convenience, quality, \
        interests: makeup, shoes, travel, channel: Instagram";

    #[test]
    fn test_parse_sample_line() {
        let profile = parse_simple_profile(SAMPLE_LINE);

        assert_eq!(profile.age, "30-50");
        assert_eq!(profile.gender, "female");
        assert_eq!(profile.location, "Urban");
        assert_eq!(profile.occupation, "Marketing Manager");
        assert_eq!(profile.income, "$75k-100k");
        assert_eq!(profile.preferred_channels, vec!["Instagram"]);
    }

    #[test]
    fn test_parse_missing_keys_leave_fields_empty() {
        let profile = parse_simple_profile("age: 20-30, gender: any");

        assert_eq!(profile.age, "20-30");
        assert_eq!(profile.location, "");
        assert!(profile.pain_points.is_empty());
        assert!(profile.preferred_channels.is_empty());
    }

    #[test]
    fn test_parse_garbage_yields_empty_profile() {
        let profile = parse_simple_profile("the model refused to answer");
        assert_eq!(profile, CustomerProfile::default());
    }

    #[test]
    fn test_split_list_drops_empty_entries() {
        assert_eq!(split_list("a, b ,, c"), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_prompt_embeds_idea() {
        let prompt = build_prompt("A pet care app");
        assert!(prompt.contains("\"A pet care app\""));
        assert!(prompt.contains("channel: 1 preferred channel"));
    }

    #[test]
    fn test_generator_construction() {
        let generator = GeminiGenerator::new("test-key")
            .unwrap()
            .with_model("gemini-2.0-flash");

        assert!(generator.endpoint().ends_with("gemini-2.0-flash:generateContent"));
    }
}
