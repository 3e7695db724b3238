// src/core/sanitize.rs
//
// Field normalization: the one place where vocabulary drift between the
// three sources is eliminated. Each rule set is an explicit ordered list of
// (match, replacement) pairs evaluated in sequence; order matters, see the
// notes on each table. Everything here is pure string work; an input token
// that no rule maps into the canonical vocabulary is an error, never passed
// through raw.

use std::collections::BTreeSet;

use crate::error::ChipError;

/* ---------------- generic cleanup ---------------- */

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/* ---------------- element ---------------- */

/// Closed element vocabulary. Everything leaving `element()` is one of
/// these, or a Vocabulary error.
pub const ELEMENTS: &[&str] = &[
    "null", "fire", "aqua", "electric", "wood", "wind", "sword", "breaking",
    "cursor", "invisible", "obstacle", "recovery", "terrain", "plus",
];

/// Ordered element substitutions. The compound "type" tokens must fold
/// before the bare "type" prefix strip, and the electrictric guard must run
/// after the elec fold (an already-renamed token would otherwise keep the
/// duplicated suffix).
const ELEMENT_RULES: &[(&str, &str)] = &[
    ("bc element ", ""),
    ("bc attribute ", ""),
    ("typecrack", "terrain"),
    ("typecursor", "cursor"),
    ("typerecover", "recovery"),
    ("type", ""),
    ("none", "null"),
    ("heat", "fire"),
    ("break", "breaking"),
    ("invis", "invisible"),
    ("elec", "electric"),
    ("electrictric", "electric"),
];

/// Map a raw element token (wiki image alt text or guide column) onto the
/// canonical vocabulary. Already-canonical tokens return unchanged, which
/// makes the transform idempotent. A blank cell means the entry has no
/// element.
pub fn element(raw: &str) -> Result<String, ChipError> {
    let mut t = raw.trim().to_ascii_lowercase();
    if t.is_empty() {
        return Ok(s!("null"));
    }
    if ELEMENTS.contains(&t.as_str()) {
        return Ok(t);
    }
    for (pat, rep) in ELEMENT_RULES {
        t = t.replace(pat, rep);
    }
    let t = t.trim().to_string();
    if ELEMENTS.contains(&t.as_str()) {
        Ok(t)
    } else {
        Err(ChipError::Vocabulary { kind: "element", token: s!(raw) })
    }
}

/* ---------------- damage ---------------- */

/// Damage as a sequence of possible values: `[]` none, `[-1]` variable,
/// `[n]` fixed. A textual range keeps only the lower bound.
pub fn damage(raw: &str) -> Result<Vec<i32>, ChipError> {
    let t = raw.trim();
    // Footnote markers trail the number on some list pages.
    let t = t.trim_end_matches(['*', '†', '+']).trim_end();
    if t.is_empty() {
        return Ok(Vec::new());
    }
    if t == "????" || t == "???" {
        return Ok(vec![-1]);
    }
    let t = t.replace('~', "-");
    let low = match t.split_once('-') {
        Some((lo, _)) => lo,
        None => t.as_str(),
    };
    low.trim()
        .parse::<i32>()
        .map(|v| vec![v])
        .map_err(|_| ChipError::Vocabulary { kind: "damage", token: s!(raw) })
}

/* ---------------- codes ---------------- */

/// Compatibility codes as a set. Comma-separated lists and fused runs
/// ("A, B, C" and "ABC*") both appear in the sources.
pub fn codes(raw: &str) -> Result<BTreeSet<char>, ChipError> {
    let mut out = BTreeSet::new();
    let t = raw.trim();
    if t.is_empty() {
        return Ok(out);
    }
    if t.contains(',') {
        for tok in t.split(',') {
            let tok = tok.trim();
            if tok.is_empty() { continue; }
            let mut it = tok.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => { out.insert(c); }
                _ => {
                    return Err(ChipError::Vocabulary { kind: "codes", token: s!(tok) });
                }
            }
        }
    } else {
        for c in t.chars() {
            if c.is_whitespace() { continue; }
            out.insert(c);
        }
    }
    Ok(out)
}

/* ---------------- size ---------------- */

/// Capacity in MB; the list pages append a unit suffix.
pub fn size(raw: &str) -> Result<Option<u32>, ChipError> {
    let t = raw.trim();
    let t = t.strip_suffix("MB").unwrap_or(t).trim_end();
    if t.is_empty() {
        return Ok(None);
    }
    t.parse::<u32>()
        .map(Some)
        .map_err(|_| ChipError::Vocabulary { kind: "size", token: s!(raw) })
}

/* ---------------- rarity ---------------- */

/// Rarity 1–5. Guides print a star run (one glyph per point) and both
/// placeholder glyphs (`-`, `?`) mean the maximum.
pub fn rarity(raw: &str) -> Result<u8, ChipError> {
    let t = raw.trim();
    if t.is_empty() || t == "-" || t == "?" {
        return Ok(5);
    }
    if t.chars().all(|c| c == '*') {
        return rarity_in_range(t.chars().count(), raw);
    }
    match t.parse::<usize>() {
        Ok(v) => rarity_in_range(v, raw),
        Err(_) => Err(ChipError::Vocabulary { kind: "rarity", token: s!(raw) }),
    }
}

fn rarity_in_range(v: usize, raw: &str) -> Result<u8, ChipError> {
    if (1..=5).contains(&v) {
        Ok(v as u8)
    } else {
        Err(ChipError::Vocabulary { kind: "rarity", token: s!(raw) })
    }
}
