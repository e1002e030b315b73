//! Plain-text export of the guide.
//!
//! The terminal has no print dialog, so "printing" means writing the
//! guide out as a text file (or to stdout via `--dump`) and letting the
//! host do whatever it does with text, such as piping it to `lpr`.
use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::content;

/// File name of the exported copy.
pub const EXPORT_FILE_NAME: &str = "sales-training-guide.txt";

/// Renders the export payload: a metadata banner followed by the full
/// guide body.
#[must_use]
pub fn render_export() -> String
{
    format!(
        "Ezmedtech Training Hub - Sales Team Guide\nVersion {} | Last Updated: {}\n\n{}",
        content::GUIDE_VERSION,
        content::LAST_UPDATED,
        content::GUIDE_TEXT,
    )
}

/// Writes the guide into `dir` and returns the path of the written file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn export_guide(dir: &Path) -> Result<PathBuf>
{
    let path = dir.join(EXPORT_FILE_NAME);

    let mut file = File::create(&path).context(format!(
        "Failed to create export file at {}",
        path.display()
    ))?;

    file.write_all(render_export().as_bytes())
        .context("Failed to write the guide to the export file")?;

    Ok(path)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use super::*;
    use crate::content::SECTIONS;

    #[test]
    fn export_contains_every_section_heading()
    {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let path = export_guide(dir.path()).expect("Export failed");
        let written = fs::read_to_string(&path).expect("Failed to read export");

        for section in &SECTIONS
        {
            assert!(
                written.contains(section.title),
                "exported guide is missing '{}'",
                section.title
            );
        }
    }

    #[test]
    fn export_carries_the_metadata_banner()
    {
        let rendered = render_export();

        assert!(rendered.starts_with("Ezmedtech Training Hub"));
        assert!(rendered.contains(crate::content::GUIDE_VERSION));
        assert!(rendered.contains(crate::content::LAST_UPDATED));
    }

    #[test]
    fn export_fails_for_missing_directory()
    {
        let result = export_guide(Path::new("/no/such/directory/anywhere"));

        assert!(result.is_err());
    }
}
