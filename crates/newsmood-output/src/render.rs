//! Terminal and Markdown rendering of monthly reports.
//!
//! Both renderers emit the three dashboard sections in order: sentiment
//! proportions, word lists (the word-cloud input) and example headlines.
//! Entities or buckets without headlines are shown as "No headlines
//! available." rather than omitted.

use newsmood_analysis::{EntitySummary, MonthlyReport, StopWords, WordFrequency};

/// Placeholder shown for entities and buckets without headlines.
pub const NO_HEADLINES: &str = "No headlines available.";

const BAR_WIDTH: usize = 20;

/// Options controlling rendered output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Number of words listed per entity (default: 10)
    pub top_words: usize,

    /// Stop words excluded from word lists (default: English)
    pub stop_words: StopWords,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            top_words: 10,
            stop_words: StopWords::english(),
        }
    }
}

fn top_words(summary: &EntitySummary, options: &RenderOptions) -> Vec<WordFrequency> {
    let mut words = summary.word_frequencies(&options.stop_words);
    words.truncate(options.top_words);
    words
}

fn bar(proportion: f64) -> String {
    let filled = (proportion.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Format a report for terminal display.
pub fn render_text(report: &MonthlyReport, options: &RenderOptions) -> String {
    let mut output = String::new();
    let label = report.month.label();

    output.push_str(&format!("\nHeadline Sentiment: {}\n", label));
    output.push_str(&format!(
        "Headlines this month: {}\n",
        report.month_headlines
    ));
    output.push_str(&"=".repeat(80));
    output.push('\n');

    // Proportions
    output.push_str(&format!("\nSentiment Proportions – {}\n", label));
    output.push_str(&"-".repeat(80));
    output.push('\n');
    output.push_str(&format!("{:<12}", "Entity"));
    for sentiment in &report.sentiments {
        output.push_str(&format!(" {:>10}", sentiment.title()));
    }
    output.push_str(&format!(" {:>10}\n", "Headlines"));
    for summary in &report.entities {
        output.push_str(&format!("{:<12}", summary.entity));
        for sentiment in &report.sentiments {
            output.push_str(&format!(
                " {:>9.1}%",
                summary.proportions.get(*sentiment) * 100.0
            ));
        }
        output.push_str(&format!(" {:>10}\n", summary.headline_count));
    }

    for summary in &report.entities {
        output.push_str(&format!("\n  {}\n", summary.entity));
        if !summary.has_data() {
            output.push_str(&format!("    {}\n", NO_HEADLINES));
            continue;
        }
        for (sentiment, proportion) in summary.proportions.iter() {
            output.push_str(&format!(
                "    {:<10} {} {:>5.1}%\n",
                sentiment.title(),
                bar(proportion),
                proportion * 100.0
            ));
        }
    }

    // Word lists
    output.push_str("\nTop Words by Entity\n");
    output.push_str(&"-".repeat(80));
    output.push('\n');
    for summary in &report.entities {
        let words = top_words(summary, options);
        if words.is_empty() {
            output.push_str(&format!("{:<12} {}\n", summary.entity, NO_HEADLINES));
        } else {
            let list: Vec<String> = words
                .iter()
                .map(|w| format!("{} ({})", w.word, w.count))
                .collect();
            output.push_str(&format!("{:<12} {}\n", summary.entity, list.join(", ")));
        }
    }

    // Headlines
    output.push_str(&format!("\nTop Headlines by Sentiment – {}\n", label));
    output.push_str(&"-".repeat(80));
    output.push('\n');
    for summary in &report.entities {
        output.push_str(&format!("\n{}\n", summary.entity));
        for sentiment in &report.sentiments {
            output.push_str(&format!("  {}\n", sentiment.title()));
            let headlines = summary.headlines(*sentiment);
            if headlines.is_empty() {
                output.push_str(&format!("    {}\n", NO_HEADLINES));
            }
            for headline in headlines {
                output.push_str(&format!("    - {}\n", headline));
            }
        }
    }

    output.push('\n');
    output.push_str(&"=".repeat(80));
    output.push('\n');

    output
}

/// Format a report as Markdown.
pub fn render_markdown(report: &MonthlyReport, options: &RenderOptions) -> String {
    let mut output = String::new();
    let label = report.month.label();

    output.push_str(&format!("# Headline Sentiment: {}\n\n", label));
    output.push_str(&format!(
        "**Headlines this month:** {}\n\n",
        report.month_headlines
    ));

    output.push_str(&format!("## Sentiment Proportions – {}\n\n", label));
    output.push_str("| Entity |");
    for sentiment in &report.sentiments {
        output.push_str(&format!(" {} |", sentiment.title()));
    }
    output.push_str(" Headlines |\n|--------|");
    for _ in &report.sentiments {
        output.push_str("------|");
    }
    output.push_str("------|\n");
    for summary in &report.entities {
        output.push_str(&format!("| {} |", summary.entity));
        for sentiment in &report.sentiments {
            output.push_str(&format!(
                " {:.1}% |",
                summary.proportions.get(*sentiment) * 100.0
            ));
        }
        output.push_str(&format!(" {} |\n", summary.headline_count));
    }
    output.push('\n');

    output.push_str("## Top Words by Entity\n\n");
    for summary in &report.entities {
        let words = top_words(summary, options);
        if words.is_empty() {
            output.push_str(&format!("- **{}:** {}\n", summary.entity, NO_HEADLINES));
        } else {
            let list: Vec<String> = words
                .iter()
                .map(|w| format!("{} ({})", w.word, w.count))
                .collect();
            output.push_str(&format!("- **{}:** {}\n", summary.entity, list.join(", ")));
        }
    }
    output.push('\n');

    output.push_str(&format!("## Top Headlines by Sentiment – {}\n", label));
    for summary in &report.entities {
        output.push_str(&format!("\n### {}\n", summary.entity));
        for sentiment in &report.sentiments {
            output.push_str(&format!("\n**{}**\n\n", sentiment.title()));
            let headlines = summary.headlines(*sentiment);
            if headlines.is_empty() {
                output.push_str(&format!("{}\n", NO_HEADLINES));
            }
            for headline in headlines {
                output.push_str(&format!("- {}\n", headline));
            }
        }
    }

    output
}
