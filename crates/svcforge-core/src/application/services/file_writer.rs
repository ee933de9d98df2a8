//! File Writer - create-or-replace a single file.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, error::ForgeResult};

/// What a write did to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    /// No file existed at the path.
    Created,
    /// A file existed and its content was fully replaced.
    Overwritten,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
        })
    }
}

/// Writes one file at a time through the [`Filesystem`] port.
///
/// Overwriting is never refused; it is reported as
/// [`WriteOutcome::Overwritten`] so the caller can warn.
pub struct FileWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Ensure the parent directory exists, then replace the file content.
    #[instrument(skip(self, content), fields(path = %path.display(), bytes = content.len()))]
    pub fn write(&self, path: &Path, content: &str) -> ForgeResult<WriteOutcome> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.filesystem.is_dir(parent) {
                debug!(dir = %parent.display(), "Creating parent directory");
                self.filesystem.create_dir_all(parent)?;
            }
        }

        let outcome = if self.filesystem.exists(path) {
            WriteOutcome::Overwritten
        } else {
            WriteOutcome::Created
        };

        self.filesystem.write_file(path, content)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    #[test]
    fn creates_missing_parent_first() {
        let mut fs = MockFilesystem::new();
        let mut seq = mockall::Sequence::new();

        fs.expect_is_dir()
            .withf(|p| p == Path::new("app/Services"))
            .return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("app/Services"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let outcome = FileWriter::new(&fs)
            .write(Path::new("app/Services/UserService.php"), "<?php")
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Created);
    }

    #[test]
    fn existing_parent_is_not_recreated() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_exists().return_const(false);
        fs.expect_write_file().returning(|_, _| Ok(()));

        FileWriter::new(&fs)
            .write(Path::new("app/Services/UserService.php"), "<?php")
            .unwrap();
    }

    #[test]
    fn existing_file_reports_overwrite() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().return_const(true);
        fs.expect_write_file().returning(|_, _| Ok(()));

        let outcome = FileWriter::new(&fs)
            .write(Path::new("app/Services/UserService.php"), "<?php")
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Overwritten);
    }

    #[test]
    fn directory_failure_stops_the_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::WriteFailed {
                path: p.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        assert!(
            FileWriter::new(&fs)
                .write(Path::new("ro/Services/X.php"), "")
                .is_err()
        );
    }
}
