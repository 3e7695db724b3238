// src/params.rs
use std::path::PathBuf;

use crate::titles::Title;

pub const DEFAULT_OUT_DIR: &str = "dumps";
pub const DEFAULT_MERGED_FILENAME: &str = "chips.json";
pub const DATA_DIR: &str = "data";

#[derive(Clone)]
pub struct Params {
    pub titles: Option<Vec<Title>>, // None = all six
    pub out: Option<PathBuf>,       // output directory
    pub merged: bool,               // also write one merged catalog file
    pub list_titles: bool,          // list known titles then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            titles: None,
            out: None,
            merged: false,
            list_titles: false,
        }
    }
}
