// src/cli.rs
use std::{env, path::{Path, PathBuf}};

use crate::params::Params;
use crate::progress::Progress;
use crate::titles::Title;

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Scraping {} title(s)...", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, title: Title, path: &Path) {
        eprintln!("{} -> {}", title, path.display());
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_titles {
        for t in Title::ALL {
            println!("{}", t);
        }
        return Ok(());
    }

    let summary = crate::runner::run(&params, Some(&mut CliProgress))?;
    eprintln!(
        "{} records across {} file(s)",
        summary.records,
        summary.files_written.len()
    );
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-t" | "--title" => {
                let v = args.next().ok_or("Missing value for --title")?;
                let t = Title::from_slug(&v.to_ascii_lowercase())
                    .ok_or_else(|| format!("Unknown title: {}", v))?;
                params.titles.get_or_insert_with(Vec::new).push(t);
            }
            "--all" | "-a" => params.titles = None,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--merged" => params.merged = true,
            "--list-titles" => params.list_titles = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
