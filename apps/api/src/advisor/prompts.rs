// Prompt text for the career advisor.

use crate::recommender::Profile;

pub const ADVISOR_SYSTEM: &str = "You are a professional career advisor. \
    Give practical, encouraging guidance on career paths, skills to build, \
    and learning resources. Base your answer on the user's profile and resume \
    when they are provided.";

pub const ADVISOR_PROMPT_TEMPLATE: &str = "\
User message: {message}

User Profile:
- Skills: {skills}
- Interests: {interests}
- Preferred Work Style: {style}

Resume Content:
{resume}
";

const NOT_PROVIDED: &str = "Not provided";
const NO_RESUME: &str = "No resume uploaded";

/// Fills the advisor template. Blank fields are replaced with a placeholder
/// so the model can tell "absent" from "empty".
pub fn build_advisor_prompt(message: &str, profile: &Profile, resume_text: &str) -> String {
    ADVISOR_PROMPT_TEMPLATE
        .replace("{message}", message.trim())
        .replace("{skills}", or_placeholder(&profile.skills, NOT_PROVIDED))
        .replace("{interests}", or_placeholder(&profile.interests, NOT_PROVIDED))
        .replace("{style}", or_placeholder(&profile.style, NOT_PROVIDED))
        .replace("{resume}", or_placeholder(resume_text, NO_RESUME))
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_profile_and_resume() {
        let profile = Profile {
            skills: "Python, SQL".to_string(),
            interests: "Finance".to_string(),
            style: "Remote".to_string(),
        };
        let prompt = build_advisor_prompt("What should I learn next?", &profile, "5 years at a bank");
        assert!(prompt.contains("User message: What should I learn next?"));
        assert!(prompt.contains("- Skills: Python, SQL"));
        assert!(prompt.contains("- Interests: Finance"));
        assert!(prompt.contains("- Preferred Work Style: Remote"));
        assert!(prompt.contains("5 years at a bank"));
    }

    #[test]
    fn test_blank_fields_get_placeholders() {
        let prompt = build_advisor_prompt("hi", &Profile::default(), "  ");
        assert!(prompt.contains("- Skills: Not provided"));
        assert!(prompt.contains("- Interests: Not provided"));
        assert!(prompt.contains("- Preferred Work Style: Not provided"));
        assert!(prompt.contains("No resume uploaded"));
    }
}
