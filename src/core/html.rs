// src/core/html.rs
//
// Tolerant, case-insensitive tag-block scanning. No tree, no selectors:
// the list pages are table soup and local scanning survives their noise
// better than a strict parser would.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<open ...> ... close` block at or after `from`.
/// Returns (start of open tag, end past the close tag).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Inner text of a block: past the open tag, before the final close tag.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Drop all tags, keep text, collapse whitespace. Hyperlinked cell content
/// (`<a>Name</a>`) falls out as plain text.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Alt text of the first `<img>` in a block. The list pages encode element
/// icons as images whose alt text names the element.
pub fn img_alt(block: &str) -> Option<String> {
    let lc = to_lower(block);
    let img = lc.find("<img")?;
    let alt = lc[img..].find("alt=")? + img + 4;
    let rest = &block[alt..];
    let mut chars = rest.chars();
    match chars.next()? {
        q @ ('"' | '\'') => {
            let inner = &rest[1..];
            let end = inner.find(q)?;
            Some(inner[..end].to_string())
        }
        _ => {
            // Unquoted attribute value.
            let end = rest.find(|c: char| c.is_whitespace() || c == '>')?;
            Some(rest[..end].to_string())
        }
    }
}

/// Offsets and text of every `<h2>` block. Used to attach section headings
/// (classification sub-headings) to the tables that follow them.
pub fn h2_headings(doc: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<h2", "</h2>", pos) {
        let text = strip_tags(inner_after_open_tag(&doc[s..e]));
        out.push((s, text));
        pos = e;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn img_alt_reads_quoted_and_unquoted() {
        assert_eq!(
            img_alt(r#"<td><a><img src="x.png" alt="BC Element Heat"></a></td>"#).as_deref(),
            Some("BC Element Heat")
        );
        assert_eq!(
            img_alt("<td><img alt=Aqua src=y.png></td>").as_deref(),
            Some("Aqua")
        );
        assert_eq!(img_alt("<td>40</td>"), None);
    }

    #[test]
    fn h2_headings_in_document_order() {
        let doc = "<h2><span>Standard Chips</span></h2><table></table><h2><span>Mega Chips</span></h2>";
        let hs = h2_headings(doc);
        assert_eq!(hs.len(), 2);
        assert_eq!(hs[0].1, "Standard Chips");
        assert_eq!(hs[1].1, "Mega Chips");
        assert!(hs[0].0 < hs[1].0);
    }
}
