// src/curated.rs
//
// Tertiary source: curated reference tables maintained offline, one CSV
// per title under data/. Unlike the guides these are keyed with the
// canonical composite key, so the engine can join them directly.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::csv::parse_rows;
use crate::data::Supplement;
use crate::error::ChipError;
use crate::keys::chip_key;
use crate::params::DATA_DIR;
use crate::titles::{Classification, TitleSpec};

// Fixed column contract of the reference files.
const COL_INDEX: usize = 1;
const COL_NAME_JP: usize = 3;
const COL_CODES: usize = 4;
const COL_DAMAGE: usize = 5;
const COL_ELEMENT: usize = 6;
const COL_RARITY: usize = 7;
const COL_SIZE: usize = 8;
const COL_CLASS: usize = 9;
const COL_VERSION: usize = 10;
const COLUMNS: usize = 11;

/// Read `data/<slug>.csv` into a composite-keyed supplement map.
pub fn load(spec: &'static TitleSpec) -> Result<HashMap<String, Supplement>, Box<dyn Error>> {
    let path = PathBuf::from(DATA_DIR).join(join!(spec.slug, ".csv"));
    let text = fs::read_to_string(&path)?;
    let rows = parse_rows(&text, ',');
    Ok(build(spec, &rows)?)
}

/// Build the keyed map from parsed rows. Rows with a placeholder
/// title-local index or a non-catalog classification are excluded;
/// placeholder values are replaced with defaults, never stored.
pub fn build(
    spec: &'static TitleSpec,
    rows: &[Vec<String>],
) -> Result<HashMap<String, Supplement>, ChipError> {
    let mut out = HashMap::new();

    for row in rows {
        if row.len() < COLUMNS {
            logd!("{}: short reference row skipped ({} cols)", spec.title, row.len());
            continue;
        }
        let index = row[COL_INDEX].trim();
        if index.is_empty() || index == "-" || index == "??" {
            continue;
        }
        // Program advances and other non-catalog rows carry their own
        // classification marker.
        let class = match Classification::from_heading(&row[COL_CLASS]) {
            Some(c) => c,
            None => continue,
        };
        let version = version_tag(spec, &row[COL_VERSION])?;

        let supp = Supplement {
            codes: Some(default_blank(&row[COL_CODES])),
            damage: Some(default_blank(&row[COL_DAMAGE])),
            element: Some(default_blank(&row[COL_ELEMENT])),
            rarity: Some(default_token(&row[COL_RARITY], "5")),
            size: Some(default_token(&row[COL_SIZE], "99")),
            name_jp: Some(row[COL_NAME_JP].trim().to_string()),
        };

        let key = chip_key(spec, class, index, version);
        if out.insert(key.clone(), supp).is_some() {
            return Err(ChipError::KeyCollision { title: spec.title, key });
        }
    }

    Ok(out)
}

/// `-` and `?` mean "no value".
fn default_blank(raw: &str) -> String {
    let t = raw.trim();
    if t == "-" || t == "?" { s!() } else { t.to_string() }
}

/// `?` means "unknown"; these columns have a defined fallback.
fn default_token(raw: &str, default: &str) -> String {
    let t = raw.trim();
    if t == "?" || t == "-" || t.is_empty() {
        default.to_string()
    } else {
        t.to_string()
    }
}

/// Version column must name one of the title's exclusivity tags (or be
/// blank). Anything else is a defect in the reference file.
fn version_tag(spec: &TitleSpec, raw: &str) -> Result<Option<&'static str>, ChipError> {
    let t = raw.trim();
    if t.is_empty() || t == "-" {
        return Ok(None);
    }
    spec.exclusives
        .iter()
        .map(|(tag, _)| *tag)
        .find(|tag| tag.eq_ignore_ascii_case(t))
        .map(Some)
        .ok_or(ChipError::Vocabulary {
            kind: "version",
            token: t.to_string(),
        })
}
