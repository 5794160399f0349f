//! Customer persona data model

pub mod format;

pub use format::format_profiles;

use serde::{Deserialize, Serialize};

/// A detailed customer persona
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerProfile {
    /// Age range (e.g. "30-50")
    pub age: String,

    /// Gender (e.g. "female")
    pub gender: String,

    /// Geographic type (e.g. "Urban")
    pub location: String,

    /// Job title or occupation
    pub occupation: String,

    /// Income range (e.g. "$75k-100k")
    pub income: String,

    /// Key motivations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub motivations: Vec<String>,

    /// Interests and hobbies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,

    /// Main pain points
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pain_points: Vec<String>,

    /// Buying behaviors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buying_behaviors: Vec<String>,

    /// Channels the persona prefers to be reached on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_channels: Vec<String>,
}

/// Customer profiles generated for a business idea
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    /// The idea the profiles were generated for
    pub business_idea: String,

    /// Generated personas
    pub profiles: Vec<CustomerProfile>,

    /// Optional overall summary
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    /// Optional marketing keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl ProfileResponse {
    /// Wrap a single persona for a business idea
    pub fn single(business_idea: impl Into<String>, profile: CustomerProfile) -> Self {
        Self {
            business_idea: business_idea.into(),
            profiles: vec![profile],
            summary: String::new(),
            keywords: Vec::new(),
        }
    }
}
