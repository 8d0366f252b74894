//! Text and JSON rendering of a feedback report.

use clap::ValueEnum;
use feedlens_core::FeedbackReport;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text tables
    Text,
    /// The full report as pretty JSON
    Json,
}

const MESSAGE_WIDTH: usize = 48;

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n## {title}\n")
}

pub fn render_text(report: &FeedbackReport, limit: usize, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "# Feedback Data Analysis\n")?;
    writeln!(out, "Total Feedback Entries: {}", report.overall.total)?;
    writeln!(out, "Useful Feedback Ratio: {:.2}%", report.overall.useful_ratio)?;

    section(out, "Feedback Count by Category")?;
    for c in &report.category_counts {
        writeln!(out, "{:<34} {:>6}", c.category, c.count)?;
    }

    section(out, "Categories with Negative Feedback")?;
    if report.negative_distribution.is_empty() {
        writeln!(out, "(no negative feedback)")?;
    }
    let negatives = report.usefulness.negative.max(1) as f64;
    for c in &report.negative_distribution {
        writeln!(
            out,
            "{:<34} {:>6} {:>6.1}%",
            c.category,
            c.count,
            c.count as f64 / negatives * 100.0
        )?;
    }

    section(out, "Feedback Count by Day")?;
    for d in &report.daily_counts {
        writeln!(out, "{} {:>6}", d.date, d.count)?;
    }

    section(out, "Positive vs Negative Feedback")?;
    writeln!(out, "Positive {:>6}", report.usefulness.positive)?;
    writeln!(out, "Negative {:>6}", report.usefulness.negative)?;

    section(out, "Feedback Counts by User")?;
    writeln!(out, "{:<24} {:>7} {:>9} {:>9}", "created_by", "total", "positive", "negative")?;
    for u in &report.by_user {
        writeln!(
            out,
            "{:<24} {:>7} {:>9} {:>9}",
            u.created_by, u.total_feedbacks, u.positive_feedbacks, u.negative_feedbacks
        )?;
    }

    section(out, "Category-wise Positive and Negative Feedback Counts")?;
    writeln!(out, "{:<34} {:>7} {:>9} {:>9}", "category", "total", "positive", "negative")?;
    for c in &report.by_category {
        writeln!(
            out,
            "{:<34} {:>7} {:>9} {:>9}",
            c.category, c.total_count, c.positive_count, c.negative_count
        )?;
    }

    section(out, "Data with Extracted Categories")?;
    for r in report.records.iter().take(limit) {
        writeln!(
            out,
            "{:<16} | {:<width$} | {:<24} | {}",
            r.created_at,
            truncate(&r.bot_message, MESSAGE_WIDTH),
            r.category,
            u8::from(r.is_useful),
            width = MESSAGE_WIDTH
        )?;
    }
    if report.records.len() > limit {
        writeln!(out, "… {} more rows (raise --limit)", report.records.len() - limit)?;
    }

    Ok(())
}

pub fn render_json(report: &FeedbackReport, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedlens_analysis::Analyzer;

    const CSV: &str = "\
bot_message,isuseful,created_at,created_by
Density variation noted,1,05-01-2024 10:00,alice
no issues here,False,06-01-2024 11:00,bob
Streaks on the reverse side,0,06-01-2024 12:00,alice
";

    fn report() -> FeedbackReport {
        Analyzer::builtin().unwrap().analyze_reader(CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_text_contains_metrics_and_tables() {
        let mut buf = Vec::new();
        render_text(&report(), 10, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Total Feedback Entries: 3"));
        assert!(text.contains("Useful Feedback Ratio: 33.33%"));
        assert!(text.contains("## Feedback Counts by User"));
        assert!(text.contains("Streaks"));
        assert!(text.contains("50.0%"));
        assert!(!text.contains("more rows"));
    }

    #[test]
    fn test_text_limit_truncates_passthrough() {
        let mut buf = Vec::new();
        render_text(&report(), 1, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("… 2 more rows"));
    }

    #[test]
    fn test_json_output_parses() {
        let mut buf = Vec::new();
        render_json(&report(), &mut buf).unwrap();
        let back: FeedbackReport = serde_json::from_slice(&buf).unwrap();
        let expected = report();
        assert_eq!(back.overall.total, expected.overall.total);
        assert_eq!(back.by_user, expected.by_user);
        assert_eq!(back.records, expected.records);
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("moiré", 10), "moiré");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
