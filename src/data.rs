// src/data.rs
//
// The catalog record and the supplemental-attribute shape secondary
// sources produce. A ChipRecord is built once per primary-source row,
// filled and normalized by the engine, then emitted and never touched
// again.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::titles::{Classification, Title};

/// One canonical catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipRecord {
    pub title: Title,
    /// In-title ordinal as printed (leading zeros stripped). Synthetic for
    /// the two bn4 entries whose listing shows a placeholder.
    pub index: String,
    pub name: String,
    /// Localized name, filled when the curated source carries it.
    pub name_jp: String,
    pub classification: Classification,
    /// Canonical element; "null" means no element.
    pub element: String,
    /// Possible damage values: empty = none, [-1] = variable, [n] = fixed
    /// (a range keeps only its lower bound).
    pub damage: Vec<i32>,
    /// Compatibility codes. Order carries no meaning; the ordered set keeps
    /// dump output deterministic.
    pub codes: BTreeSet<char>,
    /// Capacity in MB.
    pub size: Option<u32>,
    /// 1–5.
    pub rarity: u8,
    /// Version tag, or None = available in all versions of the title.
    pub version: Option<&'static str>,
    pub description: String,
}

/// Attributes recovered from a secondary source for one entry. Values stay
/// raw-ish here; the engine runs every filled field through the normalizer
/// before emitting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Supplement {
    pub element: Option<String>,
    pub rarity: Option<String>,
    pub codes: Option<String>,
    pub size: Option<String>,
    pub damage: Option<String>,
    pub name_jp: Option<String>,
}
