//! External collaborators: the spreadsheet and PDF writers that turn the
//! current simulation into a downloadable file.

use std::{io, path::PathBuf};

use thiserror::Error;
use time::OffsetDateTime;

pub mod report;
pub mod spreadsheet;

pub use report::save_report;
pub use spreadsheet::save_spreadsheet;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("spreadsheet writer error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
    #[error("pdf writer error: {0}")]
    Pdf(String),
}

/// Target path for an export: `margin_lab_<date>.<ext>` in the user's
/// download directory, or the temp directory when the platform has none.
pub fn export_path(extension: &str) -> PathBuf {
    let date = OffsetDateTime::now_utc().date();
    export_dir().join(format!("margin_lab_{date}.{extension}"))
}

fn export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(std::env::temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_path_carries_date_and_extension() {
        let path = export_path("xlsx");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("margin_lab_"));
        assert!(name.ends_with(".xlsx"));
    }
}
