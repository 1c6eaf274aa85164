/// A run of text, marked when it falls inside a marketable quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub quoted: bool,
}

/// Split translation text into spans, marking every case-insensitive
/// occurrence of any quote. Overlapping matches collapse into a single
/// quoted span. Concatenating the span texts always reproduces the input.
pub fn highlight_quotes(text: &str, quotes: &[String]) -> Vec<TextSpan> {
    if text.is_empty() {
        return Vec::new();
    }

    // Work at char granularity so case folding cannot shift offsets.
    let chars: Vec<char> = text.chars().collect();
    let folded = fold_chars(&chars);

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for quote in quotes {
        let needle: Vec<char> = fold_chars(&quote.chars().collect::<Vec<_>>());
        if needle.is_empty() || needle.len() > folded.len() {
            continue;
        }
        for start in 0..=folded.len() - needle.len() {
            if folded[start..start + needle.len()] == needle[..] {
                ranges.push((start, start + needle.len()));
            }
        }
    }

    if ranges.is_empty() {
        return vec![TextSpan {
            text: text.to_string(),
            quoted: false,
        }];
    }

    ranges.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::new();
    for (start, end) in ranges {
        match merged.last_mut() {
            Some((_, prev_end)) if start <= *prev_end => *prev_end = (*prev_end).max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    for (start, end) in merged {
        if cursor < start {
            spans.push(span_of(&chars[cursor..start], false));
        }
        spans.push(span_of(&chars[start..end], true));
        cursor = end;
    }
    if cursor < chars.len() {
        spans.push(span_of(&chars[cursor..], false));
    }

    spans
}

fn fold_chars(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect()
}

fn span_of(chars: &[char], quoted: bool) -> TextSpan {
    TextSpan {
        text: chars.iter().collect(),
        quoted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn concat(spans: &[TextSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn no_quotes_leaves_text_unmodified() {
        let spans = highlight_quotes("The service was great.", &[]);
        assert_eq!(
            spans,
            vec![TextSpan {
                text: "The service was great.".to_string(),
                quoted: false,
            }]
        );
    }

    #[test]
    fn absent_quote_leaves_text_unmodified() {
        let spans = highlight_quotes("The service was great.", &quotes(&["terrible"]));
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].quoted);
    }

    #[test]
    fn marks_a_case_insensitive_match() {
        let spans = highlight_quotes(
            "the SERVICE WAS GREAT, truly.",
            &quotes(&["service was great"]),
        );
        assert_eq!(concat(&spans), "the SERVICE WAS GREAT, truly.");
        assert_eq!(
            spans
                .iter()
                .filter(|s| s.quoted)
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>(),
            vec!["SERVICE WAS GREAT"]
        );
    }

    #[test]
    fn marks_every_occurrence() {
        let spans = highlight_quotes("good car, good deal", &quotes(&["good"]));
        assert_eq!(spans.iter().filter(|s| s.quoted).count(), 2);
        assert_eq!(concat(&spans), "good car, good deal");
    }

    #[test]
    fn overlapping_quotes_merge_into_one_span() {
        let spans = highlight_quotes(
            "the service was great today",
            &quotes(&["service was", "was great"]),
        );
        let quoted: Vec<_> = spans.iter().filter(|s| s.quoted).collect();
        assert_eq!(quoted.len(), 1);
        assert_eq!(quoted[0].text, "service was great");
        assert_eq!(concat(&spans), "the service was great today");
    }

    #[test]
    fn empty_quote_strings_are_ignored() {
        let spans = highlight_quotes("anything", &quotes(&["", ""]));
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].quoted);
    }

    #[test]
    fn non_ascii_text_keeps_the_concat_invariant() {
        let text = "Der Service war großartig, wirklich großartig.";
        let spans = highlight_quotes(text, &quotes(&["GROSSARTIG", "großartig"]));
        assert_eq!(concat(&spans), text);
        assert_eq!(spans.iter().filter(|s| s.quoted).count(), 2);
    }
}
