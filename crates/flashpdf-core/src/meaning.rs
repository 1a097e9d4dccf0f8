/// Marker separating a definition from its example sentences.
pub const DELIMITER: &str = "=>";

/// Unicode arrow accepted as an alternative spelling of [`DELIMITER`].
pub const ARROW: char = '\u{21D2}';

/// A meaning line split into its definition and example sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMeaning {
    pub definition: String,
    pub examples: Vec<String>,
}

/// Split a raw meaning line into a definition and its examples.
///
/// Syntax: `definition => example one. => example two.` (`⇒` works too).
///
/// - The text before the first delimiter, trimmed, is the definition.
/// - Every following chunk yields at most one example: its text up to and
///   including the first period, or the whole chunk if it has no period.
///   Anything after that first period is dropped.
/// - Chunks that end up empty are skipped.
pub fn parse_meaning(raw: &str) -> ParsedMeaning {
    let normalized = raw.replace(ARROW, DELIMITER);
    let mut chunks = normalized.split(DELIMITER);

    let definition = chunks.next().unwrap_or_default().trim().to_string();
    let examples = chunks.filter_map(first_sentence).collect();

    ParsedMeaning {
        definition,
        examples,
    }
}

fn first_sentence(chunk: &str) -> Option<String> {
    let chunk = chunk.trim();
    let sentence = match chunk.split_once('.') {
        Some((body, _rest)) => {
            let body = body.trim();
            if body.is_empty() {
                return None;
            }
            format!("{body}.")
        }
        None => chunk.to_string(),
    };

    (!sentence.is_empty()).then_some(sentence)
}

/// Title-case a word or phrase.
///
/// Every letter that starts a run of letters is upper-cased and the rest
/// are lower-cased, so `"well-known"` becomes `"Well-Known"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
