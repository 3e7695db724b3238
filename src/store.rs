// src/store.rs
//
// Dump layer: the finished catalog is written as one JSON file per title,
// plus an optional merged file across all six. Records serialize exactly
// as data::ChipRecord reads.

use std::{fs, io, path::{Path, PathBuf}};

use crate::data::ChipRecord;

pub fn save_dump(dir: &Path, stem: &str, records: &[ChipRecord]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(join!(stem, ".json"));
    let json = serde_json::to_string_pretty(records).map_err(io::Error::other)?;
    fs::write(&path, json)?;
    logf!("wrote {} records to {}", records.len(), path.display());
    Ok(path)
}
