// src/specs/faq.rs
//
// Secondary source: plain-text strategy guides. The list pages are missing
// rarity, elements, codes and sizes for whole titles at a time; each
// title's guide prints them, in its own layout, under its own addressing
// scheme, with its own transcription typos. One entry pattern per title;
// the typo tables below are corrections observed in the guides and must be
// applied before a name or index is used as a map key.
//
// Rarity in the guides is a star run (one '*' per point, '-' meaning 5);
// the raw run is kept in the supplement and counted by the normalizer.

use std::collections::HashMap;

use regex::Regex;

use crate::data::Supplement;
use crate::error::ChipError;
use crate::keys;
use crate::titles::Title;

/// Entry shape in the bn1 guide: one line per chip holding
/// index, name, element, damage, rarity digit, fused code run.
const BN1_PATTERN: &str = r"(?imx)
    ([0-9]+) \s+ ([-\w]+)
    \s+ ([A-Z]+)
    \s+ ([0-9?+*-]+)
    \s+ (\d+)
    \s+ ([A-Z*-]+)";

/// bn2: indexed line with a trailing star run. Only rarity is mined; the
/// bn2 list page is otherwise complete.
const BN2_PATTERN: &str = r"(?imx)
    (\d{3}) \s{2} [-\w+]+ \s+ [-\d?]+ \s+ \w+ \s+ ([-*]{1,5})";

/// bn3: "NNN. Name damage Element stars".
const BN3_PATTERN: &str = r"(?imx)
    [0-9]{1,3} \. [\t\s] ([-\w+]+) [\t\s]+ [0-9?+-]{0,4} \s (\w+) \s (\*{1,5})";

/// bn4: a tilde-fenced block per chip; fields wrap across lines.
const BN4_PATTERN: &str = r"(?imx)
    ~{3} \s+ \d+ \s ([-\w+()\ ]+) \s? ~{3} \n+
    - \w+ : \s ( [*\w\s]+ (?: , \s [*\w]* )* ) \n+
    - \w+ : \s [0-9?+-]+ [\n\s]+
    - [\w\ ]+ : \s [\w\ /?]+ \n+
    - [-\w+\ /()]+ : \s+ (\d+) \s? MB";

/// bn5: a dash-ruled header with the guide's own composite address
/// (class letters + index), then one labelled field per line.
const BN5_PATTERN: &str = r"(?imx)
    -{18} \n
    ([A-Z]{1,2}) ([0-9]+) : \s? ([-\w+()\s]+) \n
    -{18} \n
    \w+ : \s ( [*\w\s]+ (?: , \s? [*\w]* )* ) \s{0,3} \n
    \w+ : \s (.*) \n
    \w+ : \s [-+\w\s()]+ \s? \n
    \w+ : \s? [\w\s()]+ \n
    [\w\s]+ : \s+ [-\w+()\s.]+
    \w+ : \s ([*\w]+)";

/// bn6: "NNN. Name" then slash-separated code/rarity/size fields.
const BN6_PATTERN: &str = r"(?imx)
    (\d{3}) \. \s [\w+'\ ]+ \n
    \w+ :? \s ([\w*\s]+) / \s? \w+ : \s? (\*{1,5}) \s / \s \w+ : \s [-\w?\ ]+ \n
    \w+ : \s \w+ \s? / \s \w{2} : \s (\d+)";

/// Guide transcription typos, applied to names before keying.
const BN3_TYPOS: &[(&str, &str)] = &[
    ("Volcanoe", "Volcano"),
    ("AntiDamg", "AntiDmg"),
    ("Ligtning", "Lightning"),
    ("LifAura", "LifeAura"),
];

const BN4_TYPOS: &[(&str, &str)] = &[
    ("ICEELEM", "ELEMICE"),
    ("WHITEWEB", "WHITWEB"),
    ("PNLRETURN", "PNLRETRN"),
    ("HOLYPNL", "HOLYPANL"),
    ("ANTIAQUA", "ANTIWATR"),
    ("COLORPNT", "COLORPT"),
    ("DBLPNT", "DBLPOINT"),
    ("GREENWD1", "GREENWD"),
    ("Z-SAVER", "Z SAVER"),
    ("GRANDPRIXPOWER", "PRIXPOWR"),
    (" (RS)", ""),
    (" (BM)", ""),
];

/// The bn5 guide spells names out in full; the exclusivity sets use the
/// cartridge's abbreviated spellings. Shorten before membership checks.
const BN5_SHORTEN: &[(&str, &str)] = &[
    ("Tomahawk", "Tmhwk"),
    ("Shadow", "Shado"),
    ("Number", "Numbr"),
    ("Protoman", "ProtoMan"),
    ("Serch", "Search"),
];

/// Navi chip (SP/DS) forms abbreviate a little differently.
const BN5_SHORTEN_NAVI: &[(&str, &str)] = &[
    ("Knight", "Knigt"),
    ("Man", "Mn"),
];

/// bn5 guide typos: a doubled digit in one index, and two malformed size
/// tokens (a word where a number belongs, and a stray markup artifact).
const BN5_INDEX_TYPOS: &[(&str, &str)] = &[("1116", "116")];
const BN5_SIZE_TYPOS: &[(&str, &str)] = &[
    ("Invisible", "42"),
    ("80</span><span id=\"faqspan-2\">", "80"),
];

fn apply(table: &[(&str, &str)], s: &str) -> String {
    let mut out = s.to_string();
    for (pat, rep) in table {
        out = out.replace(pat, rep);
    }
    out
}

/// Mine one title's guide text into a keyed supplement map. Zero matches
/// is a warning, not an error: the map is simply empty and any later
/// required lookup will report the miss.
pub fn extract(title: Title, text: &str) -> Result<HashMap<String, Supplement>, ChipError> {
    let pattern = match title {
        Title::Bn1 => BN1_PATTERN,
        Title::Bn2 => BN2_PATTERN,
        Title::Bn3 => BN3_PATTERN,
        Title::Bn4 => BN4_PATTERN,
        Title::Bn5 => BN5_PATTERN,
        Title::Bn6 => BN6_PATTERN,
    };
    let re = Regex::new(pattern).map_err(|e| ChipError::Pattern {
        title,
        detail: e.to_string(),
    })?;

    let chips = match title {
        Title::Bn1 => bn1(&re, text),
        Title::Bn2 => bn2(&re, text),
        Title::Bn3 => bn3(&re, text),
        Title::Bn4 => bn4(&re, text),
        Title::Bn5 => bn5(&re, text),
        Title::Bn6 => bn6(&re, text),
    };

    if chips.is_empty() {
        logw!("{}: guide pattern matched nothing", title);
    } else {
        logd!("{}: mined {} guide entries", title, chips.len());
    }
    Ok(chips)
}

fn bn1(re: &Regex, text: &str) -> HashMap<String, Supplement> {
    let mut chips = HashMap::new();
    for cap in re.captures_iter(text) {
        // Rough element cleanup; the normalizer finishes the job.
        let element = cap[3]
            .to_ascii_lowercase()
            .replace("water", "aqua")
            .replace("elec", "electric")
            .replace("none", "null");
        let key = cap[1].trim_start_matches('0').to_string();
        chips.insert(
            key,
            Supplement {
                element: Some(element),
                rarity: Some(cap[5].to_string()),
                codes: Some(cap[6].to_string()),
                ..Supplement::default()
            },
        );
    }
    chips
}

fn bn2(re: &Regex, text: &str) -> HashMap<String, Supplement> {
    // Most of the bn2 listing is intact; all we need is the rarity.
    let mut chips = HashMap::new();
    for cap in re.captures_iter(text) {
        chips.insert(
            cap[1].to_string(),
            Supplement {
                rarity: Some(cap[2].to_string()),
                ..Supplement::default()
            },
        );
    }
    chips
}

fn bn3(re: &Regex, text: &str) -> HashMap<String, Supplement> {
    let mut chips = HashMap::new();
    for cap in re.captures_iter(text) {
        let name = apply(BN3_TYPOS, &cap[1]).to_ascii_lowercase();
        let element = cap[2].replace("Elec", "Electric").to_ascii_lowercase();
        chips.insert(
            name,
            Supplement {
                element: Some(element),
                rarity: Some(cap[3].to_string()),
                ..Supplement::default()
            },
        );
    }
    chips
}

fn bn4(re: &Regex, text: &str) -> HashMap<String, Supplement> {
    let mut chips = HashMap::new();
    for cap in re.captures_iter(text) {
        let name = apply(BN4_TYPOS, &cap[1]).trim().to_ascii_lowercase();
        chips.insert(
            name,
            Supplement {
                codes: Some(cap[2].to_string()),
                size: Some(cap[3].to_string()),
                ..Supplement::default()
            },
        );
    }
    chips
}

fn bn5(re: &Regex, text: &str) -> HashMap<String, Supplement> {
    let spec = Title::Bn5.spec();
    let mut chips = HashMap::new();
    for cap in re.captures_iter(text) {
        let mut short = apply(BN5_SHORTEN, cap[3].trim());
        if short.contains("SP") || short.contains("DS") {
            short = apply(BN5_SHORTEN_NAVI, &short);
        }
        let version = keys::resolve_version(spec, &short);

        let index = apply(BN5_INDEX_TYPOS, &cap[2]);
        let size = apply(BN5_SIZE_TYPOS, &cap[5]);

        // The guide's own composite address: class letters as printed,
        // index, version initial.
        let mut key = cap[1].to_string();
        key.push_str(&index);
        if let Some(tag) = version {
            if let Some(c) = tag.chars().next() {
                key.push(c);
            }
        }

        chips.insert(
            key,
            Supplement {
                codes: Some(cap[4].to_string()),
                size: Some(size),
                rarity: Some(cap[6].to_string()),
                ..Supplement::default()
            },
        );
    }
    chips
}

fn bn6(re: &Regex, text: &str) -> HashMap<String, Supplement> {
    let mut chips = HashMap::new();
    for cap in re.captures_iter(text) {
        // The guide restarts numbering past entry 200 for the higher
        // folders; only the standard listing is wanted.
        if chips.len() >= 200 {
            break;
        }
        let codes = cap[2].trim().replace(' ', ",");
        chips.insert(
            cap[1].to_string(),
            Supplement {
                codes: Some(codes),
                rarity: Some(cap[3].to_string()),
                size: Some(cap[4].to_string()),
                ..Supplement::default()
            },
        );
    }
    chips
}
