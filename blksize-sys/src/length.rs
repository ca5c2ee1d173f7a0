// SPDX-License-Identifier: GPL-3.0-only

//! File length that looks through device nodes
//!
//! `Metadata::len` is zero for block devices. [`file_length`] asks the
//! device itself and only falls back to the metadata length when that fails.

use std::fs::{FileType, Metadata};
use std::path::Path;

/// Whether `file_type` names something other than a regular file, directory
/// or symlink.
#[cfg(unix)]
pub fn is_device(file_type: &FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;

    file_type.is_block_device()
        || file_type.is_char_device()
        || file_type.is_fifo()
        || file_type.is_socket()
}

#[cfg(not(unix))]
pub fn is_device(_: &FileType) -> bool {
    false
}

/// Length of `path` in bytes, querying the device when it is one
#[cfg(unix)]
pub fn file_length(meta: &Metadata, path: impl AsRef<Path>) -> u64 {
    use std::fs::OpenOptions;
    use std::os::unix::fs::OpenOptionsExt;

    if !is_device(&meta.file_type()) {
        return meta.len();
    }

    let path = path.as_ref();
    // Non-blocking so opening a FIFO without a writer does not hang.
    let file = match OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
    {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot open device, using metadata length");
            return meta.len();
        }
    };

    match crate::device::query_device_size(&file) {
        Ok(size) => size,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "using metadata length");
            meta.len()
        }
    }
}

#[cfg(not(unix))]
pub fn file_length(meta: &Metadata, _: impl AsRef<Path>) -> u64 {
    meta.len()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn regular_file_uses_metadata_length() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(&[0xAB; 12345]).expect("write temp file");
        file.flush().expect("flush temp file");

        let meta = file.path().metadata().expect("stat temp file");
        assert!(!is_device(&meta.file_type()));
        assert_eq!(file_length(&meta, file.path()), 12345);
    }

    #[test]
    fn directory_is_not_a_device() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let meta = dir.path().metadata().expect("stat temp dir");

        assert!(!is_device(&meta.file_type()));
    }

    #[cfg(unix)]
    #[test]
    fn character_device_falls_back_to_metadata_length() {
        let meta = std::fs::metadata("/dev/null").expect("stat /dev/null");

        assert!(is_device(&meta.file_type()));
        assert_eq!(file_length(&meta, "/dev/null"), 0);
    }

    #[cfg(unix)]
    #[test]
    fn fifo_does_not_block() {
        use nix::sys::stat::Mode;

        let dir = tempfile::tempdir().expect("create temp dir");
        let fifo = dir.path().join("fifo");
        nix::unistd::mkfifo(fifo.as_path(), Mode::S_IRUSR | Mode::S_IWUSR).expect("mkfifo");

        let meta = fifo.metadata().expect("stat fifo");
        assert!(is_device(&meta.file_type()));
        assert_eq!(file_length(&meta, &fifo), 0);
    }
}
