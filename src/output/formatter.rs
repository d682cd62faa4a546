//! Output formatters: console, JSON and Markdown

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::summary::{KeywordList, Presentable, ScoreLine, Summary};
use colored::{Color, Colorize};

/// Text formatters render the format-neutral summary of a result
pub trait OutputFormatter {
    fn format_summary(&self, summary: &Summary) -> String;
}

/// Console formatter with colored headers and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    keyword_limit: usize,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    keyword_limit: usize,
}

/// Picks the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn score_band(score: f64) -> (&'static str, Color) {
    match score.round() as u32 {
        90..=100 => ("EXCELLENT", Color::Green),
        80..=89 => ("VERY GOOD", Color::BrightGreen),
        70..=79 => ("GOOD", Color::Yellow),
        60..=69 => ("FAIR", Color::BrightYellow),
        50..=59 => ("BELOW AVG", Color::Red),
        _ => ("POOR", Color::BrightRed),
    }
}

/// Items shown under `limit`, plus how many were cut
fn truncated(items: &[String], limit: usize) -> (&[String], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, keyword_limit: usize) -> Self {
        Self {
            use_colors,
            keyword_limit,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score(&self, line: &ScoreLine) -> String {
        let (badge, color) = score_band(line.value);
        let badge = if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        };

        let mut out = format!("  {}: {:.2}% {}", line.label, line.value, badge);
        if let Some(detail) = &line.detail {
            out.push_str(&format!(" ({})", detail));
        }
        out.push('\n');
        out
    }

    fn format_list(&self, list: &KeywordList) -> String {
        let mut out = self.format_header(&list.label, 3);
        if list.items.is_empty() {
            out.push_str("  (none)\n");
            return out;
        }

        let (icon, color) = if list.positive {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        let (shown, hidden) = truncated(&list.items, self.keyword_limit);
        for item in shown {
            out.push_str(&format!("  {} {}\n", self.colorize(icon, color), item));
        }
        if hidden > 0 {
            out.push_str(&format!("  ... and {} more\n", hidden));
        }
        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_summary(&self, summary: &Summary) -> String {
        let mut output = self.format_header(&summary.title.to_uppercase(), 1);
        if let Some(generated_at) = &summary.generated_at {
            output.push_str(&format!("Generated: {}\n", generated_at));
        }

        output.push_str(&self.format_header("Scores", 2));
        for line in &summary.scores {
            output.push_str(&self.format_score(line));
        }

        for list in &summary.lists {
            output.push_str(&self.format_list(list));
        }

        if !summary.notes.is_empty() {
            output.push_str(&self.format_header("Notes", 2));
            for note in &summary.notes {
                output.push_str(&format!("  {} {}\n", self.colorize("!", Color::Yellow), note));
            }
        }
        output
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format_result<T: Presentable>(&self, result: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(keyword_limit: usize) -> Self {
        Self { keyword_limit }
    }

    fn markdown_score_badge(score: f64) -> &'static str {
        match score.round() as u32 {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_summary(&self, summary: &Summary) -> String {
        let mut output = format!("# {}\n\n", summary.title);
        if let Some(generated_at) = &summary.generated_at {
            output.push_str(&format!("**Generated:** {}\n\n", generated_at));
        }

        output.push_str("## Scores\n\n| Score | Value | |\n|-------|-------|---|\n");
        for line in &summary.scores {
            let label = match &line.detail {
                Some(detail) => format!("{} ({})", line.label, detail),
                None => line.label.clone(),
            };
            output.push_str(&format!(
                "| {} | {:.2}% | {} |\n",
                label,
                line.value,
                Self::markdown_score_badge(line.value)
            ));
        }
        output.push('\n');

        for list in &summary.lists {
            output.push_str(&format!("## {}\n\n", list.label));
            if list.items.is_empty() {
                output.push_str("_None_\n\n");
                continue;
            }
            let (shown, hidden) = truncated(&list.items, self.keyword_limit);
            for item in shown {
                output.push_str(&format!("- `{}`\n", item));
            }
            if hidden > 0 {
                output.push_str(&format!("- _... and {} more_\n", hidden));
            }
            output.push('\n');
        }

        if !summary.notes.is_empty() {
            output.push_str("## Notes\n\n");
            for note in &summary.notes {
                output.push_str(&format!("> {}\n", note));
            }
            output.push('\n');
        }
        output
    }
}

impl ReportGenerator {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.keyword_limit),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(config.keyword_limit),
        }
    }

    /// Render a result; JSON carries the full result, the text formats its summary
    pub fn render<T: Presentable>(&self, result: &T, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.json_formatter.format_result(result),
            OutputFormat::Console => Ok(self.console_formatter.format_summary(&result.summary())),
            OutputFormat::Markdown => Ok(self.markdown_formatter.format_summary(&result.summary())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranker::{HybridMatch, LexicalMatch};
    use crate::embeddings::hybrid::ScoreSource;
    use std::collections::BTreeSet;

    fn lexical(missing: usize) -> LexicalMatch {
        LexicalMatch {
            rating: 71.5,
            matched: BTreeSet::from(["python".to_string()]),
            missing: (0..missing).map(|i| format!("term{:02}", i)).collect(),
        }
    }

    fn generator(limit: usize) -> ReportGenerator {
        ReportGenerator::new(&OutputConfig {
            format: OutputFormat::Console,
            color_output: false,
            keyword_limit: limit,
        })
    }

    #[test]
    fn test_console_truncates_keywords() {
        let out = generator(3).render(&lexical(5), OutputFormat::Console).unwrap();
        assert!(out.contains("KEYWORD MATCH"));
        assert!(out.contains("71.50% [GOOD]"));
        assert!(out.contains("term02"));
        assert!(!out.contains("term03"));
        assert!(out.contains("... and 2 more"));
    }

    #[test]
    fn test_json_keeps_full_lists() {
        let out = generator(3).render(&lexical(5), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["rating"], 71.5);
        assert_eq!(value["missing"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_markdown_hybrid_with_diagnostics() {
        let result = HybridMatch {
            hybrid_semantic_rating: 12.0,
            source: ScoreSource::Local,
            diagnostics: vec!["remote embedding failed: 401".to_string()],
        };
        let out = generator(10).render(&result, OutputFormat::Markdown).unwrap();
        assert!(out.starts_with("# Hybrid Semantic Match"));
        assert!(out.contains("| Semantic rating (source: local) | 12.00% | 🔴 Poor |"));
        assert!(out.contains("> remote embedding failed: 401"));
    }
}
