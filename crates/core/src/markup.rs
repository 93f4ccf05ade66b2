//! Minimal bold-emphasis markup used in assistant replies.
//!
//! Replies may carry `**text**` runs. The display layer splits a reply into
//! plain and emphasized segments and renders them in original order. The
//! split is a pure, total string transform: an emphasis run is a `**` pair
//! around a non-empty body containing no `*`, and anything that does not
//! form such a run (unterminated markers, `****`, a `*` inside the body)
//! stays literal plain text. There is no escaping.

/// One run of reply text. `Emphasis` holds the body without its markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Emphasis(String),
}

/// Splits `text` into plain and emphasized runs, left to right.
pub fn segment_emphasis(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some((open, end)) = next_emphasis(text, cursor) {
        if open > plain_start {
            segments.push(Segment::Plain(text[plain_start..open].to_string()));
        }
        segments.push(Segment::Emphasis(text[open + 2..end - 2].to_string()));
        plain_start = end;
        cursor = end;
    }

    if plain_start < text.len() {
        segments.push(Segment::Plain(text[plain_start..].to_string()));
    }

    segments
}

/// Reassembles segments into the original reply text, re-adding the `**`
/// markers around emphasized runs.
pub fn rejoin(segments: &[Segment]) -> String {
    let mut text = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(run) => text.push_str(run),
            Segment::Emphasis(run) => {
                text.push_str("**");
                text.push_str(run);
                text.push_str("**");
            }
        }
    }
    text
}

/// Finds the next `**body**` run at or after `from`, returning the byte
/// range of the whole run including markers. Scans the same way a
/// left-to-right regex engine would: a failed opener is retried one byte
/// later, never skipped past a later valid opener.
fn next_emphasis(text: &str, from: usize) -> Option<(usize, usize)> {
    let mut position = from;
    while let Some(relative) = text[position..].find("**") {
        let open = position + relative;
        let body = &text[open + 2..];
        let Some(star) = body.find('*') else {
            // No closing marker anywhere ahead of this opener.
            return None;
        };
        if star > 0 && body[star..].starts_with("**") {
            return Some((open, open + 2 + star + 2));
        }
        position = open + 1;
    }
    None
}
