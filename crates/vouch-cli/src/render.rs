use console::style;

use vouch_core::{
    ReportData, ReportSection, Sentiment, SentimentLabel, confidence_percent, highlight_quotes,
};

/// Render the structured report to the terminal.
pub fn render_report(report: &ReportData) {
    println!("{}", style("Dealer Testimonial Analysis").bold());
    println!(
        "{}",
        style("Transcript, Translation & Sentiment Report").dim()
    );
    println!("{}", style("─".repeat(66)).dim());

    println!("\n{}", style("Executive Summary").cyan().bold());
    println!("{}", report.overall_summary);

    println!("\n{}", style("Overall Sentiment").cyan().bold());
    println!("{}", sentiment_badge(&report.overall_sentiment));

    if !report.emotional_markers.is_empty() {
        println!("\n{}", style("Emotional Markers").cyan().bold());
        println!("{}", report.emotional_markers.join(", "));
    }

    if !report.key_positive_phrases.is_empty() {
        println!("\n{}", style("Key Positive Phrases").cyan().bold());
        for phrase in &report.key_positive_phrases {
            println!("  {} {}", style("+").green().bold(), phrase);
        }
    }

    if !report.frictional_points.is_empty() {
        println!("\n{}", style("Frictional Points").cyan().bold());
        for point in &report.frictional_points {
            println!("  {} {}", style("-").red().bold(), point);
        }
    }

    if !report.marketable_quotes.is_empty() {
        println!("\n{}", style("Marketable Quotes").cyan().bold());
        for quote in &report.marketable_quotes {
            println!(
                "  {} {}",
                style("•").yellow(),
                style(format!("\"{}\"", quote)).italic()
            );
        }
    }

    println!("\n{}", style("Detailed Breakdown").cyan().bold());
    println!("{}", style("─".repeat(66)).dim());
    for section in &report.sections {
        render_section(section, &report.marketable_quotes);
    }
}

fn render_section(section: &ReportSection, quotes: &[String]) {
    println!(
        "\n{}  {}",
        style(&section.timestamp).bold(),
        sentiment_badge(&section.sentiment)
    );

    println!("  {}", style("Original (Verbatim)").dim());
    println!("  {}", style(&section.original).italic());

    println!("  {}", style("English (Translation)").dim());
    print!("  ");
    for span in highlight_quotes(&section.translation, quotes) {
        if span.quoted {
            print!("{}", style(span.text).yellow().bold());
        } else {
            print!("{}", span.text);
        }
    }
    println!();

    if !section.notes.is_empty() {
        println!("  {} {}", style("Notes:").dim(), section.notes);
    }
}

/// Colored label plus rounded confidence, e.g. `Positive (90%)`.
fn sentiment_badge(sentiment: &Sentiment) -> String {
    let text = format!(
        "{} ({}%)",
        sentiment.sentiment.as_str(),
        confidence_percent(sentiment.confidence)
    );
    match sentiment.sentiment {
        SentimentLabel::Positive => style(text).green().to_string(),
        SentimentLabel::Negative => style(text).red().to_string(),
        SentimentLabel::Neutral => style(text).dim().to_string(),
    }
}
