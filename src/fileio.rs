//! fileio.rs
//!
//! The only place the crate touches the filesystem. Uploaded forms are
//! UTF-8, sometimes with a byte order mark left by the exporting editor.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Reads a document as UTF-8 text, without a leading byte order mark.
///
/// ```no_run
/// use case_plan_import::fileio::read_document;
///
/// # fn main() -> std::io::Result<()> {
/// let text = read_document("uploads/plan.txt")?;
/// println!("{} bytes", text.len());
/// # Ok(())
/// # }
/// ```
pub fn read_document<P: AsRef<Path>>(filename: P) -> io::Result<String> {
    let filename = filename.as_ref();
    let content = fs::read_to_string(filename)?;
    debug!(path = %filename.display(), bytes = content.len(), "read document");
    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_strips_bom() -> io::Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "\u{FEFF}申請日期 110/05/24")?;
        assert_eq!(read_document(file.path())?, "申請日期 110/05/24");
        Ok(())
    }

    #[test]
    fn test_plain_and_empty() -> io::Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "a\r\nb")?;
        assert_eq!(read_document(file.path())?, "a\r\nb");

        let empty = NamedTempFile::new()?;
        assert_eq!(read_document(empty.path())?, "");
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
