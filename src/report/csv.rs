//! Per-page CSV summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::scoring::PageScore;

use super::format_keywords_with_counts;

/// Column header line.
pub const CSV_HEADER: &str = "Page,Total Score,TF-IDF Score,Formula Score,Definition Score,Vocabulary Score,Is Filler,Top Keywords";

/// Write one row per page, scores rounded to 4 decimals.
pub fn write_summary_csv<'a, W, I>(writer: &mut W, pages: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a PageScore>,
{
    writeln!(writer, "{}", CSV_HEADER)?;
    for page in pages {
        writeln!(
            writer,
            "{},{:.4},{:.4},{:.4},{:.4},{:.4},{},{}",
            page.page_number,
            page.total_score,
            page.tfidf_score,
            page.formula_score,
            page.definition_score,
            page.vocabulary_score,
            page.is_filler,
            escape_field(&format_keywords_with_counts(&page.keywords)),
        )?;
    }
    Ok(())
}

/// Write the CSV summary to `path`, replacing any existing file.
pub fn write_summary_csv_file<'a, P, I>(path: P, pages: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a PageScore>,
{
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_summary_csv(&mut writer, pages)?;
    writer.flush()?;
    log::info!("Wrote CSV summary to {}", path.as_ref().display());
    Ok(())
}

/// Quote a field when it contains a delimiter, quote or newline.
fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
