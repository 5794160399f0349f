//! Agent discovery metadata

use serde::{Deserialize, Serialize};
use url::Url;

/// Agent Card for agent discovery
///
/// The Agent Card is published at `/.well-known/agent.json` and describes
/// the agent's capabilities and supported input/output modes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentCard {
    /// Name of the agent
    pub name: String,

    /// Human-readable description of the agent
    pub description: String,

    /// Agent version
    pub version: String,

    /// Endpoint the agent serves the A2A protocol on
    pub url: Url,

    /// Agent capabilities
    pub capabilities: AgentCapabilities,

    /// Part kinds the agent accepts
    #[serde(rename = "defaultInputModes")]
    pub default_input_modes: Vec<String>,

    /// Part kinds the agent responds with
    #[serde(rename = "defaultOutputModes")]
    pub default_output_modes: Vec<String>,

    /// Skills the agent advertises
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<AgentSkill>,
}

/// Agent capabilities
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentCapabilities {
    /// Supports streaming responses
    #[serde(default)]
    pub streaming: bool,

    /// Supports push notifications via webhooks
    #[serde(rename = "pushNotifications", default)]
    pub push_notifications: bool,
}

/// A skill the agent advertises on its card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentSkill {
    /// Stable identifier of the skill
    pub id: String,

    /// Display name
    pub name: String,

    /// What the skill does
    pub description: String,

    /// Free-form tags for discovery
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Example prompts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

/// The card this agent publishes
pub fn profiler_card(url: Url) -> AgentCard {
    AgentCard {
        name: "Customer Profiler Agent".to_string(),
        description: "Generates a customer persona from a free-text business idea".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        url,
        capabilities: AgentCapabilities::default(),
        default_input_modes: vec!["text".to_string(), "data".to_string()],
        default_output_modes: vec!["text".to_string()],
        skills: vec![AgentSkill {
            id: "customer-profile".to_string(),
            name: "Customer profile generation".to_string(),
            description: "Returns demographics, pain points, motivations, interests and \
                          preferred channels for the audience of a business idea"
                .to_string(),
            tags: vec!["marketing".to_string(), "persona".to_string()],
            examples: vec![
                "A sustainable fashion e-commerce platform targeting eco-conscious millennials"
                    .to_string(),
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiler_card() {
        let card = profiler_card("http://localhost:8080/a2a/profiler".parse().unwrap());

        assert_eq!(card.name, "Customer Profiler Agent");
        assert!(!card.capabilities.streaming);
        assert_eq!(card.skills.len(), 1);
        assert_eq!(card.skills[0].id, "customer-profile");
    }

    #[test]
    fn test_card_serialization() {
        let card = profiler_card("http://localhost:8080/a2a/profiler".parse().unwrap());

        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("defaultInputModes").is_some());
        assert!(json.get("default_input_modes").is_none());

        let deserialized: AgentCard = serde_json::from_value(json).unwrap();
        assert_eq!(card, deserialized);
    }
}
