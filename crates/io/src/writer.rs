//! Delimited artifact writing.

use std::path::Path;

use serde::Serialize;

use crate::error::IoError;

/// Writes a delimited UTF-8 artifact: one header record followed by one
/// comma-separated record per row, each terminated by `\n`.
///
/// The output file is created up front, truncating any prior content, so
/// an empty `rows` iterator still produces a header-only artifact. The
/// writer is flushed before returning. Given identical rows, the artifact
/// is byte-identical across runs.
///
/// Returns the number of data rows written (the header is not counted).
///
/// # Errors
///
/// Returns [`IoError::Create`] if the output file cannot be created,
/// [`IoError::Csv`] if a record fails to serialize or write, and
/// [`IoError::Io`] if the final flush fails. A failure mid-write may
/// leave a partially written artifact behind.
pub fn write_delimited<S, I>(path: &Path, header: &[&str], rows: I) -> Result<usize, IoError>
where
    S: Serialize,
    I: IntoIterator<Item = S>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| IoError::Create {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    writer.write_record(header)?;

    let mut n_rows = 0_usize;
    for row in rows {
        writer.serialize(row)?;
        n_rows += 1;
    }

    writer.flush()?;
    Ok(n_rows)
}
