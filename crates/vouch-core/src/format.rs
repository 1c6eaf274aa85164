use crate::types::{ReportData, Sentiment};

/// Render a confidence in [0, 1] as a whole percentage, rounding half away
/// from zero (0.875 -> 88).
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round() as u32
}

/// Format a sentiment as it appears in the exported report,
/// e.g. `Positive (90% confidence)`.
pub fn format_sentiment(sentiment: &Sentiment) -> String {
    format!(
        "{} ({}% confidence)",
        sentiment.sentiment.as_str(),
        confidence_percent(sentiment.confidence)
    )
}

/// Serialize a report into the plain-text export document.
///
/// The layout is fixed and byte-deterministic: same report in, same text
/// out. Empty phrase/friction/quote lists drop their blocks entirely.
pub fn format_report_text(report: &ReportData) -> String {
    let mut output = String::new();

    output.push_str("Dealer Testimonial — Transcript + Translation + Sentiment Report\n");
    output.push_str(&"=".repeat(66));
    output.push_str("\n\n");

    output.push_str("EXECUTIVE SUMMARY\n");
    output.push_str(&"-".repeat(18));
    output.push('\n');
    output.push_str(&report.overall_summary);
    output.push_str("\n\n");

    output.push_str("OVERALL ANALYSIS\n");
    output.push_str(&"-".repeat(16));
    output.push('\n');
    output.push_str(&format!(
        "  - Sentiment: {}\n",
        format_sentiment(&report.overall_sentiment)
    ));
    output.push_str(&format!(
        "  - Emotional Markers: {}\n",
        report.emotional_markers.join(", ")
    ));
    if !report.key_positive_phrases.is_empty() {
        output.push_str("  - Key Positive Phrases:\n");
        for phrase in &report.key_positive_phrases {
            output.push_str(&format!("    - {}\n", phrase));
        }
    }
    if !report.frictional_points.is_empty() {
        output.push_str("  - Frictional Points:\n");
        for point in &report.frictional_points {
            output.push_str(&format!("    - {}\n", point));
        }
    }
    output.push('\n');

    if !report.marketable_quotes.is_empty() {
        output.push_str("MARKETABLE QUOTES\n");
        output.push_str(&"-".repeat(18));
        output.push('\n');
        for quote in &report.marketable_quotes {
            output.push_str(&format!("  • \"{}\"\n", quote));
        }
        output.push('\n');
    }

    output.push_str("DETAILED BREAKDOWN\n");
    output.push_str(&"=".repeat(18));
    output.push_str("\n\n");
    for section in &report.sections {
        output.push_str(&format!("SECTION: {}\n", section.timestamp));
        output.push_str(&"-".repeat(18));
        output.push('\n');
        output.push_str(&format!(
            "  - Sentiment: {}\n",
            format_sentiment(&section.sentiment)
        ));
        output.push_str(&format!("  - Analyst Notes: {}\n\n", section.notes));
        output.push_str(&format!("  Original (Verbatim):\n  \"{}\"\n\n", section.original));
        output.push_str(&format!(
            "  English (Translation):\n  \"{}\"\n\n",
            section.translation
        ));
        output.push_str(&"-".repeat(66));
        output.push_str("\n\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReportSection, SentimentLabel};

    fn sentiment(label: SentimentLabel, confidence: f64) -> Sentiment {
        Sentiment {
            sentiment: label,
            confidence,
        }
    }

    fn sample_report() -> ReportData {
        ReportData {
            overall_summary: "A very happy dealer.".to_string(),
            overall_sentiment: sentiment(SentimentLabel::Positive, 0.9),
            emotional_markers: vec!["Trust".to_string(), "Satisfaction".to_string()],
            key_positive_phrases: vec![],
            frictional_points: vec![],
            marketable_quotes: vec![],
            sections: vec![ReportSection {
                timestamp: "[00:00 - 00:25]".to_string(),
                original: "Der Service war großartig.".to_string(),
                translation: "The service was great.".to_string(),
                sentiment: sentiment(SentimentLabel::Positive, 0.9),
                notes: "Opens with strong praise.".to_string(),
            }],
        }
    }

    #[test]
    fn confidence_rounds_half_away_from_zero() {
        assert_eq!(confidence_percent(0.875), 88);
        assert_eq!(confidence_percent(0.9), 90);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
        assert_eq!(confidence_percent(0.004), 0);
        assert_eq!(confidence_percent(0.005), 1);
    }

    #[test]
    fn export_is_deterministic() {
        let report = sample_report();
        assert_eq!(format_report_text(&report), format_report_text(&report));
    }

    #[test]
    fn export_matches_fixed_layout() {
        let text = format_report_text(&sample_report());
        let expected = format!(
            "Dealer Testimonial — Transcript + Translation + Sentiment Report\n\
             {eq66}\n\
             \n\
             EXECUTIVE SUMMARY\n\
             {dash18}\n\
             A very happy dealer.\n\
             \n\
             OVERALL ANALYSIS\n\
             {dash16}\n\
             \x20 - Sentiment: Positive (90% confidence)\n\
             \x20 - Emotional Markers: Trust, Satisfaction\n\
             \n\
             DETAILED BREAKDOWN\n\
             {eq18}\n\
             \n\
             SECTION: [00:00 - 00:25]\n\
             {dash18}\n\
             \x20 - Sentiment: Positive (90% confidence)\n\
             \x20 - Analyst Notes: Opens with strong praise.\n\
             \n\
             \x20 Original (Verbatim):\n\
             \x20 \"Der Service war großartig.\"\n\
             \n\
             \x20 English (Translation):\n\
             \x20 \"The service was great.\"\n\
             \n\
             {dash66}\n\
             \n",
            eq66 = "=".repeat(66),
            eq18 = "=".repeat(18),
            dash18 = "-".repeat(18),
            dash16 = "-".repeat(16),
            dash66 = "-".repeat(66),
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_lists_omit_their_blocks() {
        let text = format_report_text(&sample_report());
        assert!(!text.contains("MARKETABLE QUOTES"));
        assert!(!text.contains("Key Positive Phrases"));
        assert!(!text.contains("Frictional Points"));
        assert!(text.contains("Sentiment: Positive (90% confidence)"));
    }

    #[test]
    fn populated_lists_render_their_blocks() {
        let mut report = sample_report();
        report.key_positive_phrases = vec!["great service".to_string()];
        report.frictional_points = vec!["slow paperwork".to_string()];
        report.marketable_quotes = vec!["The service was great".to_string()];

        let text = format_report_text(&report);
        assert!(text.contains("  - Key Positive Phrases:\n    - great service\n"));
        assert!(text.contains("  - Frictional Points:\n    - slow paperwork\n"));
        assert!(text.contains("MARKETABLE QUOTES"));
        assert!(text.contains("  • \"The service was great\"\n"));
    }
}
