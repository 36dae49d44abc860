/// An ordinal-numbered, emphasized title such as `2. **Loft Nord**`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Digits as written, never validated or renumbered
    pub ordinal: &'a str,
    pub title: &'a str,
    /// Byte offset of the first ordinal digit
    pub start: usize,
    /// Byte offset just past the closing `**`
    pub end: usize,
}

/// A heading together with the text it owns, up to the next heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryBlock<'a> {
    pub heading: Heading<'a>,
    pub body: &'a str,
}

/// Walk the text once and collect every heading in order of appearance.
pub fn headings(text: &str) -> Vec<Heading<'_>> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        match heading_at(text, i) {
            Some(heading) => {
                i = heading.end;
                found.push(heading);
            }
            None => {
                // A later start inside the same digit run reaches the same dot
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
        }
    }

    found
}

/// Split the text into entry blocks, one per heading.
pub fn entry_blocks(text: &str) -> Vec<EntryBlock<'_>> {
    let found = headings(text);
    found
        .iter()
        .enumerate()
        .map(|(idx, heading)| {
            let stop = found
                .get(idx + 1)
                .map(|next| next.start)
                .unwrap_or(text.len());
            EntryBlock {
                heading: *heading,
                body: &text[heading.end..stop],
            }
        })
        .collect()
}

/// Trimmed text before the first block, or `None` when there is no block.
pub fn introduction<'a>(text: &'a str, blocks: &[EntryBlock<'a>]) -> Option<&'a str> {
    blocks
        .first()
        .map(|first| text[..first.heading.start].trim())
}

fn heading_at(text: &str, start: usize) -> Option<Heading<'_>> {
    let bytes = text.as_bytes();
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let ordinal = &text[start..pos];

    if bytes.get(pos) != Some(&b'.') {
        return None;
    }
    pos += 1;

    let rest = &text[pos..];
    pos += rest.len() - rest.trim_start().len();

    if !text[pos..].starts_with("**") {
        return None;
    }
    pos += 2;

    let title_len = text[pos..].find('*')?;
    let raw_title = &text[pos..pos + title_len];
    if raw_title.contains('\n') {
        return None;
    }
    let title = raw_title.trim();
    if title.is_empty() {
        return None;
    }
    pos += title_len;

    if !text[pos..].starts_with("**") {
        return None;
    }

    Some(Heading {
        ordinal,
        title,
        start,
        end: pos + 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_headings_in_order() {
        let text = "Intro\n1. **Studio Centre**\nbody\n2.**Loft Nord**\nmore";
        let found = headings(text);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].ordinal, "1");
        assert_eq!(found[0].title, "Studio Centre");
        assert_eq!(found[1].ordinal, "2");
        assert_eq!(found[1].title, "Loft Nord");
        assert_eq!(&text[found[0].start..found[0].end], "1. **Studio Centre**");
    }

    #[test]
    fn ordinal_may_be_separated_from_title_by_a_line_break() {
        let found = headings("12.\n**Maison**");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].ordinal, "12");
        assert_eq!(found[0].title, "Maison");
    }

    #[test]
    fn rejects_incomplete_headings() {
        assert!(headings("Voici 2 options").is_empty());
        assert!(headings("1. Studio sans emphase").is_empty());
        assert!(headings("1. **Titre non ferme").is_empty());
        assert!(headings("1. **   **").is_empty());
        assert!(headings("1. **Titre\nsur deux lignes**").is_empty());
        assert!(headings("3.5 **Prix**").is_empty());
    }

    #[test]
    fn blocks_run_until_the_next_heading() {
        let text = "1. **A**\nfirst\n2. **B**\nsecond\n";
        let blocks = entry_blocks(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body, "\nfirst\n");
        assert_eq!(blocks[1].body, "\nsecond\n");
    }

    #[test]
    fn introduction_is_trimmed_prefix() {
        let text = "  Voici 2 options:\n1. **A**\n2. **B**\n";
        assert_eq!(
            introduction(text, &entry_blocks(text)),
            Some("Voici 2 options:")
        );
        assert_eq!(introduction("1. **A**", &entry_blocks("1. **A**")), Some(""));
        assert_eq!(introduction("Rien du tout.", &[]), None);
    }

    #[test]
    fn handles_multibyte_text_around_headings() {
        let text = "Résumé → 1. **Appartement à Lyon** né";
        let found = headings(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Appartement à Lyon");
        assert_eq!(&text[found[0].end..], " né");
    }
}
