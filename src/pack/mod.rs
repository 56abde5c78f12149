pub mod archive;

use std::path::{Path, PathBuf};

use crate::config::{with_extension_suffix, ArchiveFormat};
use crate::error::DistError;

/// Writes the contents of `root` to `<output_stem><ext>`, replacing any
/// archive of the same name. Returns the archive path.
pub fn create_binary_archive(
    root: &Path,
    output_stem: &Path,
    format: ArchiveFormat,
) -> Result<PathBuf, DistError> {
    let output = with_extension_suffix(output_stem, format.extension());

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!("creating binary archive '{}'", output.display());
    match format {
        ArchiveFormat::Zip => archive::write_zip(root, &output)?,
        ArchiveFormat::TarGz => archive::write_tar_gz(root, &output)?,
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn appends_extension_and_overwrites() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        std::fs::create_dir_all(root.join("ltex-ls-1.0.0")).unwrap();
        std::fs::write(root.join("ltex-ls-1.0.0").join("README.md"), b"readme").unwrap();

        let stem = dir.path().join("out").join("ltex-ls-1.0.0-windows-x64");
        let expected = dir.path().join("out").join("ltex-ls-1.0.0-windows-x64.zip");
        std::fs::create_dir_all(dir.path().join("out")).unwrap();
        std::fs::write(&expected, b"stale").unwrap();

        let output = create_binary_archive(&root, &stem, ArchiveFormat::Zip).unwrap();

        assert_eq!(output, expected);
        let zip = zip::ZipArchive::new(std::fs::File::open(&output).unwrap()).unwrap();
        assert!(zip.file_names().any(|n| n == "ltex-ls-1.0.0/README.md"));
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("file.txt"), b"data").unwrap();

        let stem = dir.path().join("nested").join("target").join("ltex-ls-1.0.0-linux-x64");
        let output = create_binary_archive(&root, &stem, ArchiveFormat::TarGz).unwrap();

        assert!(output.ends_with("ltex-ls-1.0.0-linux-x64.tar.gz"));
        assert!(output.is_file());
    }
}
