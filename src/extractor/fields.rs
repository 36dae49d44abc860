//! Field lookup inside a single entry block.
//!
//! Each lookup is independent: the order in which labels appear in the
//! block does not matter and one missing field never hides another.

/// Value of `**<label>**: <value>` up to end of line, trimmed.
pub fn labeled_text<'a>(block: &'a str, labels: &[String]) -> Option<&'a str> {
    label_values(block, labels)
        .into_iter()
        .map(first_line)
        .find(|value| !value.is_empty())
}

/// Leading digits of `**<label>**: <digits>`.
pub fn labeled_count(block: &str, labels: &[String]) -> Option<u32> {
    label_values(block, labels).into_iter().find_map(|rest| {
        let digits_len = rest
            .bytes()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if digits_len == 0 {
            return None;
        }
        rest[..digits_len].parse::<u32>().ok()
    })
}

/// URL of the first `![<alt>](<url>)` image whose alt text is recognized.
pub fn image_url<'a>(block: &'a str, alts: &[String]) -> Option<&'a str> {
    let mut hits: Vec<(usize, &'a str)> = Vec::new();

    for alt in alts {
        let opener = format!("![{alt}](");
        for (pos, _) in block.match_indices(opener.as_str()) {
            let rest = &block[pos + opener.len()..];
            if let Some(close) = rest.find(')') {
                if close > 0 && !rest[..close].contains('\n') {
                    hits.push((pos, &rest[..close]));
                }
            }
        }
    }

    hits.sort_by_key(|(pos, _)| *pos);
    hits.first().map(|(_, url)| *url)
}

/// Text following every `**<label>**:` occurrence, in order of appearance,
/// with leading whitespace removed up to the end of the line.
fn label_values<'a>(block: &'a str, labels: &[String]) -> Vec<&'a str> {
    let mut hits: Vec<(usize, &'a str)> = Vec::new();

    for label in labels {
        let marker = format!("**{label}**:");
        for (pos, _) in block.match_indices(marker.as_str()) {
            let rest = &block[pos + marker.len()..];
            hits.push((
                pos,
                rest.trim_start_matches(|c: char| c.is_whitespace() && c != '\n'),
            ));
        }
    }

    hits.sort_by_key(|(pos, _)| *pos);
    hits.into_iter().map(|(_, rest)| rest).collect()
}

fn first_line(rest: &str) -> &str {
    rest.split('\n').next().unwrap_or_default().trim()
}
