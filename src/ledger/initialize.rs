use super::HEADER;
use crate::errors::AppResult;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Create the file if needed and write the header when it is empty.
/// A file whose last line lacks its newline gets one, so the next row
/// never lands on the end of the previous line.
pub fn ensure_header(path: &Path) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    let len = file.metadata()?.len();
    if len == 0 {
        file.write_all(HEADER.as_bytes())?;
        file.flush()?;
        tracing::debug!(path = %path.display(), "ledger initialized");
        return Ok(());
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        file.seek(SeekFrom::End(0))?;
        file.write_all(b"\n")?;
        file.flush()?;
        tracing::debug!(path = %path.display(), "missing trailing newline restored");
    }

    Ok(())
}

/// Reset the file to exactly the header line.
pub fn truncate_to_header(path: &Path) -> AppResult<()> {
    fs::write(path, HEADER)?;
    Ok(())
}
