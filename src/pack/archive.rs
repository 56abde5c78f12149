use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::DistError;

/// Direct children of `dir`, sorted by name.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, DistError> {
    let mut entries = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();
    Ok(entries)
}

fn entry_name(prefix: &str, path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if prefix.is_empty() {
        name
    } else {
        format!("{prefix}/{name}")
    }
}

/// Packs the contents of `root` (not `root` itself) into a gzipped tarball.
pub fn write_tar_gz(root: &Path, dest: &Path) -> Result<(), DistError> {
    let file = File::create(dest)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(encoder);

    for path in sorted_entries(root)? {
        let name = entry_name("", &path);
        if path.is_dir() {
            tar.append_dir_all(&name, &path)?;
        } else {
            tar.append_path_with_name(&path, &name)?;
        }
    }

    let encoder = tar.into_inner()?;
    encoder.finish()?;
    Ok(())
}

/// Packs the contents of `root` (not `root` itself) into a zip file.
pub fn write_zip(root: &Path, dest: &Path) -> Result<(), DistError> {
    let file = File::create(dest)?;
    let mut zip = ZipWriter::new(file);
    add_dir_to_zip(&mut zip, root, "")?;
    zip.finish()?;
    Ok(())
}

fn add_dir_to_zip(
    zip: &mut ZipWriter<File>,
    dir: &Path,
    prefix: &str,
) -> Result<(), DistError> {
    for path in sorted_entries(dir)? {
        let name = entry_name(prefix, &path);
        let meta = fs::metadata(&path)?;
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(file_mode(&meta))
            .last_modified_time(modified_time(&meta));

        if meta.is_dir() {
            zip.add_directory(format!("{name}/"), options)?;
            add_dir_to_zip(zip, &path, &name)?;
        } else {
            zip.start_file(name, options)?;
            let mut file = File::open(&path)?;
            std::io::copy(&mut file, zip)?;
        }
    }
    Ok(())
}

/// The entry's own mtime; zip's default is the time of writing.
fn modified_time(meta: &fs::Metadata) -> zip::DateTime {
    meta.modified()
        .ok()
        .map(time::OffsetDateTime::from)
        .and_then(|t| zip::DateTime::try_from(t).ok())
        .unwrap_or_default()
}

#[cfg(unix)]
fn file_mode(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn file_mode(meta: &fs::Metadata) -> u32 {
    if meta.is_dir() {
        0o755
    } else {
        0o644
    }
}
