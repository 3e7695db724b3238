// src/runner.rs
use std::error::Error;
use std::path::{PathBuf};

use crate::{
    curated,
    core::net,
    data::ChipRecord,
    params::{Params, DEFAULT_OUT_DIR, DEFAULT_MERGED_FILENAME},
    progress::Progress,
    reconcile,
    specs,
    store,
    titles::{Secondary, Title},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub records: usize,
}

/// Top-level runner: one title after another, in catalog order. Each title
/// is independent; a failure aborts that title and surfaces, it does not
/// poison the others' data.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let titles: Vec<Title> = params
        .titles
        .clone()
        .unwrap_or_else(|| Title::ALL.to_vec());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(titles.len());
    }

    let out_dir = params
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    let mut written = Vec::with_capacity(titles.len());
    let mut merged: Vec<ChipRecord> = Vec::new();
    let mut total = 0usize;

    for title in titles {
        let spec = title.spec();

        logf!("{}: fetching list page", title);
        let page = net::http_get(spec.list_page)?;
        let rows = specs::wiki::parse_list_page(spec, &page);
        logf!("{}: {} primary rows", title, rows.len());

        let supplements = match spec.secondary {
            Secondary::Guide => {
                logf!("{}: fetching guide", title);
                let guide = net::http_get(spec.guide_url)?;
                specs::faq::extract(title, &guide)?
            }
            Secondary::Curated => curated::load(spec)?,
        };

        let mut records = Vec::new();
        for item in reconcile::reconcile(spec, rows, &supplements) {
            records.push(item?);
        }
        total += records.len();

        let path = store::save_dump(&out_dir, spec.slug, &records)?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(title, &path);
        }
        written.push(path);

        if params.merged {
            merged.extend(records);
        }
    }

    if params.merged {
        let stem = DEFAULT_MERGED_FILENAME.trim_end_matches(".json");
        let path = store::save_dump(&out_dir, stem, &merged)?;
        written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { files_written: written, records: total })
}
