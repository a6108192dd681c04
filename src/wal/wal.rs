use crate::models::course::Course;
use crate::models::user::UserRecord;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// WAL operation types
///
/// Each operation carries the full document after the mutation, so replay is
/// a sequence of overwrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalOperation {
    PutUser { user: UserRecord },
    PutCourse { course: Course },
}

impl WalOperation {
    fn encode(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to encode WAL operation")
    }

    fn decode(line: &str) -> Result<Self> {
        serde_json::from_str(line).context("Invalid WAL operation")
    }
}

pub struct Wal {
    file: Mutex<File>,
    path: PathBuf,
}

impl Wal {
    pub fn new(path: PathBuf) -> Result<Self> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)
            .context(format!("Failed to open WAL file: {}", path.display()))?;

        if seal_torn_tail(&mut file).context("Failed to check WAL tail")? {
            tracing::warn!(
                path = %path.display(),
                "WAL ended in a partial line, appending after a line break"
            );
        }

        Ok(Wal {
            file: Mutex::new(file),
            path,
        })
    }

    /// Append one operation and flush it before returning
    ///
    /// A failed append is cut back to the previous length so the next record
    /// starts on a fresh line.
    pub fn log_operation(&self, op: &WalOperation) -> Result<()> {
        let mut line = op.encode()?;
        line.push('\n');

        let mut file = self.file.lock().map_err(|_| anyhow!("WAL lock poisoned"))?;
        let committed_len = file.metadata().context("Failed to stat WAL")?.len();

        if let Err(e) = file.write_all(line.as_bytes()).and_then(|()| file.flush()) {
            if let Err(truncate_err) = file.set_len(committed_len) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %truncate_err,
                    "Failed to roll back partial WAL write"
                );
            }
            return Err(e).context("Failed to write to WAL");
        }

        Ok(())
    }

    pub fn replay(&self) -> Result<Vec<WalOperation>> {
        let file = File::open(&self.path).context("Failed to open WAL for replay")?;
        let reader = BufReader::new(file);
        let mut operations = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result.context("Failed to read line from WAL")?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            match WalOperation::decode(line) {
                Ok(op) => operations.push(op),
                Err(e) => {
                    tracing::warn!(
                        line_num = line_num + 1,
                        error = %e,
                        "Failed to parse WAL line, skipping"
                    );
                }
            }
        }

        Ok(operations)
    }
}

/// Terminate a trailing partial line left by an interrupted write
fn seal_torn_tail(file: &mut File) -> std::io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    if last[0] == b'\n' {
        return Ok(false);
    }

    file.write_all(b"\n")?;
    file.flush()?;
    Ok(true)
}
