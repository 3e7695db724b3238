// src/reconcile.rs
//
// The reconciliation engine. For each primary-source row, in source order:
// build the partial record, resolve the version tag, compute the canonical
// key, look up the supplement in the title's configured secondary source,
// fill every attribute the listing left blank, normalize, emit. Records
// come out one at a time; the first error fuses the iterator and aborts
// that title.

use std::collections::{HashMap, HashSet};

use crate::core::sanitize;
use crate::data::{ChipRecord, Supplement};
use crate::error::ChipError;
use crate::keys::{chip_key, guide_key, resolve_version};
use crate::specs::wiki::PrimaryRow;
use crate::titles::{Classification, JoinKey, TitleSpec};

pub fn reconcile<'a>(
    spec: &'static TitleSpec,
    rows: Vec<PrimaryRow>,
    secondary: &'a HashMap<String, Supplement>,
) -> Reconciler<'a> {
    Reconciler {
        spec,
        rows: rows.into_iter(),
        secondary,
        seen: HashSet::new(),
        done: false,
    }
}

pub struct Reconciler<'a> {
    spec: &'static TitleSpec,
    rows: std::vec::IntoIter<PrimaryRow>,
    secondary: &'a HashMap<String, Supplement>,
    seen: HashSet<String>,
    done: bool,
}

impl Iterator for Reconciler<'_> {
    type Item = Result<ChipRecord, ChipError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let row = self.rows.next()?;
            // Version-exclusive sub-headings are markers, not entries.
            if row.subheading {
                continue;
            }
            match self.build(&row) {
                Ok(rec) => return Some(Ok(rec)),
                Err(e) => {
                    loge!("{}", e);
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl Reconciler<'_> {
    fn build(&mut self, row: &PrimaryRow) -> Result<ChipRecord, ChipError> {
        let spec = self.spec;
        let class = row.classification;

        let name = required(row, spec, spec.cols.name, "name")?.to_string();
        let mut index = required(row, spec, spec.cols.index, "index")?.to_string();

        // Entries the listing can't number get assigned indices.
        if index == "??" {
            if let Some((_, idx)) = spec
                .synthetic_indices
                .iter()
                .find(|(n, _)| *n == name.as_str())
            {
                index = (*idx).to_string();
            }
        }

        let version = resolve_version(spec, &name);
        let key = chip_key(spec, class, &index, version);
        if !self.seen.insert(key.clone()) {
            return Err(ChipError::KeyCollision { title: spec.title, key });
        }

        let element_raw = optional(row, spec.cols.element);
        let mut damage_raw = optional(row, spec.cols.damage);
        let codes_raw = optional(row, spec.cols.codes);
        let size_raw = optional(row, spec.cols.size);
        let description = optional(row, Some(spec.cols.description));

        // Dual-release damage cells: keep the value carrying the note.
        if let Some(note) = spec.damage_note {
            if let Some(pos) = damage_raw.find(note) {
                let noted = damage_raw[..pos]
                    .split_whitespace()
                    .last()
                    .unwrap_or("")
                    .to_string();
                damage_raw = noted;
            }
        }

        let supp = if spec.defaulted.contains(&name.as_str()) {
            // The guide omits these entirely; known defaults apply.
            Supplement {
                rarity: Some(s!("5")),
                element: Some(s!("null")),
                ..Supplement::default()
            }
        } else {
            let jk = join_key(spec, &name, &index, class, version);
            match self.secondary.get(&jk) {
                Some(s) => s.clone(),
                None => {
                    return Err(ChipError::SupplementalMiss { title: spec.title, key: jk });
                }
            }
        };

        // Fill the blanks, then run everything through the normalizer.
        let element = sanitize::element(pick(&element_raw, supp.element.as_deref()))?;
        let damage = sanitize::damage(pick(&damage_raw, supp.damage.as_deref()))?;
        let codes = sanitize::codes(pick(&codes_raw, supp.codes.as_deref()))?;
        let size = sanitize::size(pick(&size_raw, supp.size.as_deref()))?;
        let rarity = sanitize::rarity(supp.rarity.as_deref().unwrap_or(""))?;

        Ok(ChipRecord {
            title: spec.title,
            index: index.trim_start_matches('0').to_string(),
            name,
            name_jp: supp.name_jp.unwrap_or_default(),
            classification: class,
            element,
            damage,
            codes,
            size,
            rarity,
            version,
            description,
        })
    }
}

fn required<'a>(
    row: &'a PrimaryRow,
    spec: &TitleSpec,
    col: usize,
    field: &'static str,
) -> Result<&'a str, ChipError> {
    row.cells
        .get(col)
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ChipError::SourceFormat {
            title: spec.title,
            row: row.ordinal,
            field,
        })
}

fn optional(row: &PrimaryRow, col: Option<usize>) -> String {
    col.and_then(|c| row.cells.get(c))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Primary-source value wins; the supplement fills blanks.
fn pick<'a>(primary: &'a str, supplement: Option<&'a str>) -> &'a str {
    if primary.is_empty() {
        supplement.unwrap_or("")
    } else {
        primary
    }
}

/// Address of one record in its title's secondary-source mapping.
fn join_key(
    spec: &'static TitleSpec,
    name: &str,
    index: &str,
    class: Classification,
    version: Option<&'static str>,
) -> String {
    match spec.join {
        JoinKey::IndexTrimmed => index.trim_start_matches('0').to_string(),
        JoinKey::Index => index.to_string(),
        JoinKey::NameFolded => name.replace(' ', "").to_ascii_lowercase(),
        JoinKey::NameLower => name.to_ascii_lowercase(),
        JoinKey::GuideComposite => guide_key(class, index, version),
        JoinKey::Canonical => chip_key(spec, class, index, version),
    }
}
