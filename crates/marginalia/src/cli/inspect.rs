//! Inspect command handler.

use marginalia::{ExportFile, MarginaliaResult, group_by_book};
use std::path::Path;

/// Parse an export and print per-book counts without writing anything.
pub fn run_inspect(file: &Path) -> MarginaliaResult<()> {
    let export = ExportFile::from_file(file)?;

    if let Some(exported_at) = &export.exported_at {
        println!("Exported at: {}", exported_at);
    }

    let total = export.highlight_count();
    let groups = group_by_book(export.into_highlights());

    println!("Books in export:");
    println!("{:-<80}", "");
    for (key, bucket) in &groups {
        println!("{:>5}  {}", bucket.len(), key);
    }
    println!("{:-<80}", "");
    println!("Total: {} highlights in {} books", total, groups.len());

    Ok(())
}
