//! Writing artifacts to the destination directory.
//!
//! Files are overwritten in place (no temp file and rename). An existing
//! file is only replaced when the run forces overwrites or the injected
//! [`OverwriteDecider`] agrees.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::Error, traits::OverwriteDecider, types::ConversionOutput};

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// The file existed and the decider declined to replace it.
    Skipped(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written(path) | WriteOutcome::Skipped(path) => path,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written(_))
    }
}

/// Writes `output` into `destination_dir` under its artifact file name.
pub fn write_output<D>(
    output: &ConversionOutput,
    destination_dir: &Path,
    force_overwrite: bool,
    decider: &mut D,
) -> Result<WriteOutcome, Error>
where
    D: OverwriteDecider + ?Sized,
{
    if !destination_dir.is_dir() {
        return Err(Error::InvalidDestination(format!(
            "{} is not an existing directory",
            destination_dir.display()
        )));
    }

    write_file(
        &output.contents,
        &destination_dir.join(output.file_name()),
        force_overwrite,
        decider,
    )
}

/// Writes `contents` to `path` as UTF-8, asking `decider` first if the file exists.
pub fn write_file<D>(
    contents: &str,
    path: &Path,
    force_overwrite: bool,
    decider: &mut D,
) -> Result<WriteOutcome, Error>
where
    D: OverwriteDecider + ?Sized,
{
    if !force_overwrite && path.try_exists()? && !decider.should_overwrite(path) {
        tracing::info!(path = %path.display(), "keeping existing file");
        return Ok(WriteOutcome::Skipped(path.to_path_buf()));
    }

    fs::write(path, contents.as_bytes()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");

    Ok(WriteOutcome::Written(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArtifactKind;
    use tempfile::TempDir;

    fn strings_output(contents: &str) -> ConversionOutput {
        ConversionOutput {
            kind: ArtifactKind::StringsTable,
            contents: contents.to_string(),
        }
    }

    #[test]
    fn test_writes_new_file_without_asking() {
        let dir = TempDir::new().unwrap();
        let mut asked = 0;
        let mut decider = |_: &Path| {
            asked += 1;
            false
        };

        let outcome = write_output(
            &strings_output("a = \"b\";"),
            dir.path(),
            false,
            &mut decider,
        )
        .unwrap();

        assert_eq!(asked, 0);
        assert!(outcome.is_written());
        assert_eq!(outcome.path(), dir.path().join("Localizable.strings"));
        assert_eq!(
            fs::read_to_string(dir.path().join("Localizable.strings")).unwrap(),
            "a = \"b\";"
        );
    }

    #[test]
    fn test_existing_file_is_kept_when_declined() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Localizable.strings");
        fs::write(&path, "old").unwrap();
        let mut asked = Vec::new();
        let mut decider = |p: &Path| {
            asked.push(p.to_path_buf());
            false
        };

        let outcome = write_output(&strings_output("new"), dir.path(), false, &mut decider).unwrap();

        assert_eq!(asked, vec![path.clone()]);
        assert_eq!(outcome, WriteOutcome::Skipped(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn test_existing_file_is_replaced_when_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Localizable.strings");
        fs::write(&path, "old").unwrap();

        let outcome =
            write_output(&strings_output("new"), dir.path(), false, &mut |_: &Path| true).unwrap();

        assert!(outcome.is_written());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_force_overwrite_never_asks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Localizable.strings");
        fs::write(&path, "old").unwrap();
        let mut decider = |_: &Path| -> bool { panic!("decider must not be asked") };

        write_output(&strings_output("new"), dir.path(), true, &mut decider).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_destination_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = write_output(&strings_output("x"), &missing, true, &mut |_: &Path| true)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidDestination(_)));
    }

    #[test]
    fn test_write_failure_is_propagated() {
        let dir = TempDir::new().unwrap();
        // A directory squatting on the target path makes the write fail.
        let path = dir.path().join("Localizable.strings");
        fs::create_dir(&path).unwrap();

        let err = write_file("x", &path, true, &mut |_: &Path| true).unwrap_err();

        assert!(matches!(err, Error::Write { .. }));
    }
}
