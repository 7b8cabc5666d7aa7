// Prompt constants for roadmap generation.

/// Roadmap prompt template. Replace `{skills}`, `{experience}`, `{career_goal}`
/// and `{interests}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are a career advisor. Given the user's details below, generate a structured career roadmap in ONLY the following JSON format:
{
  "milestones": [
    { "step": "string", "description": "string", "estimatedTimeMonths": number }
  ],
  "requiredSkills": ["skill1", "skill2"],
  "recommendedCertifications": ["cert1", "cert2"],
  "jobOpportunities": ["role1", "role2"]
}

User details:
- Current skills: {skills}
- Experience: {experience}
- Career Goal: {career_goal}
- Interests: {interests}

IMPORTANT: Return ONLY the JSON. No additional text or markdown."#;

/// Renders the roadmap prompt for a set of profile fields.
pub fn build_roadmap_prompt(
    skills: &str,
    experience: &str,
    career_goal: &str,
    interests: &str,
) -> String {
    render(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("{skills}", skills),
            ("{experience}", experience),
            ("{career_goal}", career_goal),
            ("{interests}", interests),
        ],
    )
}

/// Single-pass placeholder substitution: values are copied verbatim and never
/// re-scanned, so profile text containing `{...}` stays literal.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(idx) = rest.find('{') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match vars.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
