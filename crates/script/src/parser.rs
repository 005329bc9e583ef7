use crate::{Segment, Speaker};

/// Splits a raw script into speaker-attributed segments.
///
/// A line whose trimmed form starts with `[` and contains a later `]` is a
/// marker line. The tag between the brackets (trimmed, lower-cased) selects
/// the speaker for the following content; an unrecognized tag leaves the
/// current speaker unchanged. Text before the first marker belongs to the
/// default speaker. Buffered content lines are joined with `\n`, and a
/// buffer that joins to the empty string emits nothing.
///
/// Never fails; malformed markers degrade per the rules above.
pub fn parse(script: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current_speaker = Speaker::default();
    let mut buffer: Vec<&str> = Vec::new();
    let mut cursor = 0usize;

    for line in script.split('\n') {
        let trimmed = line.trim();

        // marker iff the trimmed line starts with '[' and closes it later
        let close = trimmed
            .starts_with('[')
            .then(|| trimmed[1..].find(']').map(|i| i + 1))
            .flatten();
        let Some(close) = close else {
            buffer.push(line);
            continue;
        };

        flush(current_speaker, &mut buffer, &mut cursor, &mut segments);

        let tag = trimmed[1..close].trim().to_lowercase();
        if let Ok(speaker) = tag.parse::<Speaker>() {
            current_speaker = speaker;
        }

        let remainder = trimmed[close + 1..].trim();
        if !remainder.is_empty() {
            buffer.push(remainder);
        }
    }

    flush(current_speaker, &mut buffer, &mut cursor, &mut segments);
    segments
}

fn flush(speaker: Speaker, buffer: &mut Vec<&str>, cursor: &mut usize, out: &mut Vec<Segment>) {
    if buffer.is_empty() {
        return;
    }

    let text = buffer.join("\n");
    buffer.clear();
    if text.is_empty() {
        return;
    }

    let start = *cursor;
    *cursor += text.len();
    out.push(Segment {
        speaker,
        text,
        start_position: start,
        end_position: *cursor,
    });
}
