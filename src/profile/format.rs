//! Renders a profile response as human-readable text

use super::{CustomerProfile, ProfileResponse};

/// Rendered when generation succeeded but produced no personas
const NO_PROFILES: &str = "No customer profiles generated.";

/// Render a profile response for the task's status message and artifact
///
/// Layout: a heading naming the idea, then per profile a demographics
/// block followed by the optional list sections, each rendered only when
/// non-empty. Profiles are separated by a horizontal rule.
pub fn format_profiles(response: &ProfileResponse) -> String {
    if response.profiles.is_empty() {
        return NO_PROFILES.to_string();
    }

    let mut out = format!("# Customer Profile for: {}\n\n", response.business_idea);

    for (i, profile) in response.profiles.iter().enumerate() {
        if i > 0 {
            out.push_str("\n---\n\n");
        }
        write_profile(&mut out, profile);
    }

    out
}

fn write_profile(out: &mut String, profile: &CustomerProfile) {
    out.push_str("**Demographics:**\n");
    out.push_str(&format!("- Age: {}\n", profile.age));
    out.push_str(&format!("- Gender: {}\n", profile.gender));
    out.push_str(&format!("- Location: {}\n", profile.location));
    out.push_str(&format!("- Occupation: {}\n", profile.occupation));
    out.push_str(&format!("- Income: {}\n", profile.income));

    write_section(out, "Pain Points", &profile.pain_points);
    write_section(out, "Motivations", &profile.motivations);
    write_section(out, "Interests", &profile.interests);
    write_section(out, "Preferred Channels", &profile.preferred_channels);
}

fn write_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    out.push_str(&format!("\n**{title}:**\n"));
    for item in items {
        out.push_str(&format!("- {}\n", item.trim()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> CustomerProfile {
        CustomerProfile {
            age: "30-50".to_string(),
            gender: "female".to_string(),
            location: "Urban".to_string(),
            occupation: "Marketing Manager".to_string(),
            income: "$75k-100k".to_string(),
            motivations: vec!["convenience".to_string(), "quality".to_string()],
            interests: vec!["makeup".to_string(), "travel".to_string()],
            pain_points: vec!["lack of time".to_string()],
            buying_behaviors: Vec::new(),
            preferred_channels: vec!["Instagram".to_string()],
        }
    }

    #[test]
    fn test_zero_profiles_renders_sentence() {
        let response = ProfileResponse {
            business_idea: "A pet care app".to_string(),
            ..Default::default()
        };

        assert_eq!(format_profiles(&response), "No customer profiles generated.");
    }

    #[test]
    fn test_full_profile_layout() {
        let response = ProfileResponse::single("A pet care app", sample_profile());
        let text = format_profiles(&response);

        assert!(text.starts_with("# Customer Profile for: A pet care app\n\n"));
        assert!(text.contains("**Demographics:**\n- Age: 30-50\n"));
        assert!(text.contains("\n**Pain Points:**\n- lack of time\n"));
        assert!(text.contains("\n**Preferred Channels:**\n- Instagram\n"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let profile = CustomerProfile {
            age: "20-30".to_string(),
            gender: "any".to_string(),
            location: "Suburban".to_string(),
            occupation: "Student".to_string(),
            income: "$0-25k".to_string(),
            ..Default::default()
        };

        let text = format_profiles(&ProfileResponse::single("A study app", profile));
        assert!(!text.contains("Pain Points"));
        assert!(!text.contains("Motivations"));
        assert!(!text.contains("Interests"));
        assert!(!text.contains("Preferred Channels"));
    }

    #[test]
    fn test_items_are_trimmed() {
        let profile = CustomerProfile {
            pain_points: vec!["  overwhelming choices  ".to_string()],
            ..sample_profile()
        };

        let text = format_profiles(&ProfileResponse::single("x", profile));
        assert!(text.contains("- overwhelming choices\n"));
    }

    #[test]
    fn test_multiple_profiles_separated_by_rule() {
        let response = ProfileResponse {
            business_idea: "A pet care app".to_string(),
            profiles: vec![sample_profile(), sample_profile()],
            ..Default::default()
        };

        let text = format_profiles(&response);
        assert_eq!(text.matches("\n---\n\n").count(), 1);
        assert_eq!(text.matches("**Demographics:**").count(), 2);
    }
}
