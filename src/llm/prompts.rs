//! Prompt for the chat-completion match rating

/// Render the rating prompt for a job posting and resume
pub fn render_match_rating(job: &str, resume: &str) -> String {
    MATCH_RATING_TEMPLATE
        .replace("{job}", job)
        .replace("{resume}", resume)
}

const MATCH_RATING_TEMPLATE: &str = r#"Compare the following job posting and resume, and give a match percentage from 1 to 100 based on skills, experience, and qualifications match.

Job Posting:
{job}

Resume:
{resume}

Respond with only the percentage number (e.g., 75)."#;
