use std::path::Path;

use crate::error::DistError;

/// Unpacks a `.tar.gz`/`.tgz` or `.zip` archive into `dest`, picked by file name.
pub fn extract(archive: &Path, dest: &Path) -> Result<(), DistError> {
    let file_name = archive
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DistError::UnknownArchive(archive.to_path_buf()))?;

    if file_name.ends_with(".tar.gz") || file_name.ends_with(".tgz") {
        extract_tar_gz(archive, dest)
    } else if file_name.ends_with(".zip") {
        extract_zip(archive, dest)
    } else {
        Err(DistError::UnknownArchive(archive.to_path_buf()))
    }
}

pub fn extract_tar_gz(archive: &Path, dest: &Path) -> Result<(), DistError> {
    let file = std::fs::File::open(archive)?;
    let decoder = flate2::read::GzDecoder::new(file);
    let mut tar = tar::Archive::new(decoder);
    tar.set_preserve_permissions(true);
    tar.unpack(dest)?;
    Ok(())
}

pub fn extract_zip(archive: &Path, dest: &Path) -> Result<(), DistError> {
    let file = std::fs::File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;
    zip.extract(dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_tar_gz(path: &Path, entries: &[(&str, &[u8])]) {
        let file = std::fs::File::create(path).unwrap();
        let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        let mut tar = tar::Builder::new(encoder);
        for (name, data) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            tar.append_data(&mut header, name, *data).unwrap();
        }
        tar.into_inner().unwrap().finish().unwrap();
    }

    #[test]
    fn extracts_tar_gz_by_name() {
        let dir = tempdir().unwrap();
        let archive = dir.path().join("jdk.tar.gz");
        write_tar_gz(&archive, &[("jdk-11/jmods/java.base.jmod", b"jmod")]);

        let out = dir.path().join("out");
        extract(&archive, &out).unwrap();

        let jmod = out.join("jdk-11").join("jmods").join("java.base.jmod");
        assert_eq!(std::fs::read(jmod).unwrap(), b"jmod");
    }

    #[test]
    fn extracts_zip_by_name() {
        let dir = tempdir().unwrap();
        let archive = dir.path().join("jdk.zip");
        {
            let file = std::fs::File::create(&archive).unwrap();
            let mut zip = zip::ZipWriter::new(file);
            let options = zip::write::SimpleFileOptions::default();
            zip.start_file("jdk-11/bin/java.exe", options).unwrap();
            zip.write_all(b"MZ").unwrap();
            zip.finish().unwrap();
        }

        let out = dir.path().join("out");
        extract(&archive, &out).unwrap();

        assert!(out.join("jdk-11").join("bin").join("java.exe").exists());
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let archive = dir.path().join("jdk.7z");
        std::fs::write(&archive, b"??").unwrap();

        let err = extract(&archive, dir.path()).unwrap_err();
        assert!(matches!(err, DistError::UnknownArchive(_)));
    }

    #[test]
    fn corrupt_archive_is_an_error() {
        let dir = tempdir().unwrap();
        let archive = dir.path().join("broken.tar.gz");
        std::fs::write(&archive, b"not gzip at all").unwrap();

        assert!(extract_tar_gz(&archive, &dir.path().join("out")).is_err());
    }
}
