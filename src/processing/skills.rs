//! Skill phrase extraction by substring containment

use crate::error::{Result, ResumeRankerError};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::BTreeSet;

/// Built-in skill vocabulary used when no list is supplied
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "sql",
    "rust",
    "react",
    "docker",
    "kubernetes",
    "aws",
    "fastapi",
    "machine learning",
    "data analysis",
    "project management",
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
];

/// Finds skill phrases contained in a text.
///
/// Matching is plain substring containment on the lowercased text, not
/// token-aware: "java" is found inside "javascript".
pub struct SkillExtractor {
    matcher: AhoCorasick,
    skills: Vec<String>,
}

impl SkillExtractor {
    /// Build from a skill list. Phrases are trimmed and lowercased; blank
    /// and duplicate phrases are dropped.
    pub fn new<I, S>(skills: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skills: Vec<String> = skills
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Overlapping search needs standard semantics so that nested phrases
        // ("java" in "javascript") are all reported
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&skills)
            .map_err(|e| ResumeRankerError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { matcher, skills })
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Skill phrases that occur anywhere in `text`
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        self.matcher
            .find_overlapping_iter(&lowered)
            .map(|m| self.skills[m.pattern().as_usize()].clone())
            .collect()
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        // The default list is non-empty, static and well under any automaton limit
        Self::new(DEFAULT_SKILLS.iter().copied()).expect("default skill list builds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_default_skills() {
        let extractor = SkillExtractor::default();
        let skills = extractor.extract("Skills: python, java, sql, communication");
        for skill in ["python", "java", "sql", "communication"] {
            assert!(skills.contains(skill), "missing {}", skill);
        }
    }

    #[test]
    fn test_case_insensitive_multi_word() {
        let extractor = SkillExtractor::default();
        let skills = extractor.extract("Led MACHINE LEARNING projects and Project Management");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("project management"));
    }

    #[test]
    fn test_substring_containment_is_not_token_aware() {
        let extractor = SkillExtractor::default();
        let skills = extractor.extract("Frontend work in JavaScript");
        assert!(skills.contains("javascript"));
        assert!(skills.contains("java"));
    }

    #[test]
    fn test_custom_list_is_normalized() {
        let extractor = SkillExtractor::new(["  Go ", "GraphQL", "", "graphql"]).unwrap();
        assert_eq!(extractor.skills(), &["go", "graphql"]);

        let skills = extractor.extract("Built GraphQL gateways in Go");
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_no_skills_found() {
        let extractor = SkillExtractor::default();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("gardening and cooking").is_empty());
    }

    #[test]
    fn test_empty_skill_list_matches_nothing() {
        let extractor = SkillExtractor::new(Vec::<String>::new()).unwrap();
        assert!(extractor.extract("python everywhere").is_empty());
    }
}
