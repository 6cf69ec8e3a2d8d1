//! Rank pages by information density
//!
//! Reads already-extracted page text, ranks the pages and prints the
//! extraction summary.
//!
//! Input is either a JSON file (`[{"page_number": 1, "text": "..."}, ...]`)
//! or a directory of `.txt` files, one per page, numbered by the last number
//! in each file name (`page2.txt` before `page10.txt`).
//!
//! Usage:
//!   cargo run --release --bin rank_pages -- --input pages.json
//!   cargo run --release --bin rank_pages -- --input pages/ --percentage 10 --csv summary.csv
//!   RUST_LOG=debug cargo run --bin rank_pages -- --input pages.json --json

use pdf_density::report::write_summary_csv_file;
use pdf_density::{summary_report, DensityAnalyzer, PageText, Result, SelectionCriteria};
use std::fs;
use std::path::{Path, PathBuf};

struct RankConfig {
    input: PathBuf,
    criteria: SelectionCriteria,
    csv_path: Option<PathBuf>,
    json: bool,
}

impl RankConfig {
    fn from_args() -> std::result::Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut criteria = SelectionCriteria::default();
        let mut csv_path = None;
        let mut json = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--input" | "-i" => {
                    i += 1;
                    input = args.get(i).map(PathBuf::from);
                },
                "--percentage" | "-p" => {
                    i += 1;
                    criteria.percentage = parse_number(args.get(i), "--percentage")?;
                },
                "--min-score" => {
                    i += 1;
                    criteria.min_score = parse_number(args.get(i), "--min-score")?;
                },
                "--include-filler" => {
                    criteria.exclude_filler = false;
                },
                "--csv" => {
                    i += 1;
                    csv_path = args.get(i).map(PathBuf::from);
                },
                "--json" => {
                    json = true;
                },
                other => return Err(format!("Unknown argument: {}", other)),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| "--input is required".to_string())?;
        Ok(Self {
            input,
            criteria,
            csv_path,
            json,
        })
    }
}

fn parse_number(value: Option<&String>, flag: &str) -> std::result::Result<f64, String> {
    value
        .ok_or_else(|| format!("{} needs a value", flag))?
        .parse::<f64>()
        .map_err(|e| format!("{}: {}", flag, e))
}

fn print_usage() {
    eprintln!("Usage: rank_pages --input <pages.json | dir> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --percentage <N>   Share of candidate pages to keep (default 20)");
    eprintln!("      --min-score <S>    Minimum total score (default 0)");
    eprintln!("      --include-filler   Keep TOC/reference/index pages as candidates");
    eprintln!("      --csv <path>       Write a per-page CSV summary of the selection");
    eprintln!("      --json             Print the selected pages as JSON");
}

/// Sort key for per-page text files: the last run of digits in the file
/// stem, then the file name. Files without a number sort last.
fn page_sort_key(path: &Path) -> (u64, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let digits: String = stem
        .chars()
        .rev()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let number = digits.parse::<u64>().unwrap_or(u64::MAX);
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    (number, name)
}

/// Load pages from a JSON array or a directory of per-page text files.
fn load_pages(input: &Path) -> Result<Vec<PageText>> {
    if input.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(input)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        files.sort_by_key(|p| page_sort_key(p));

        let texts = files
            .iter()
            .map(fs::read_to_string)
            .collect::<std::io::Result<Vec<String>>>()?;
        Ok(PageText::from_texts(texts))
    } else {
        let content = fs::read_to_string(input)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = match RankConfig::from_args() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            print_usage();
            std::process::exit(2);
        },
    };

    let pages = load_pages(&config.input)?;
    log::info!("Loaded {} pages from {}", pages.len(), config.input.display());

    let analysis = DensityAnalyzer::new().try_analyze(pages)?;
    let selected = analysis.select(&config.criteria)?;
    let stats = analysis.statistics();

    if let Some(csv_path) = &config.csv_path {
        write_summary_csv_file(csv_path, selected.iter().copied())?;
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        println!(
            "{}",
            summary_report(&selected, stats.as_ref(), config.criteria.percentage)
        );
    }

    Ok(())
}
