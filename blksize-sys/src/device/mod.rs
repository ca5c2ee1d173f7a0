// SPDX-License-Identifier: GPL-3.0-only

//! Device size query over a borrowed descriptor
//!
//! Exactly one backend in [`platform`] is compiled for each target. All of
//! them report through [`DeviceSizeError`]; [`device_size_or_sentinel`]
//! collapses that back into the in-band `u64::MAX` form for callers that
//! still speak it.

pub mod geometry;
mod platform;

use std::os::fd::{AsFd, AsRawFd};

use nix::errno::Errno;
use thiserror::Error;

pub use crate::SIZE_UNKNOWN;
pub use geometry::BlockGeometry;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceSizeError {
    #[error("device size query failed: {0}")]
    Query(#[from] Errno),

    #[error("device size overflows 64 bits: {block_count} blocks of {block_size} bytes")]
    Overflow { block_count: u64, block_size: u64 },

    #[error("no device size query is available on this platform")]
    Unsupported,
}

impl DeviceSizeError {
    /// The in-band value every failure cause maps to.
    pub const fn sentinel(&self) -> u64 {
        SIZE_UNKNOWN
    }
}

/// Query the size in bytes of the block device behind `fd`.
///
/// The descriptor is only borrowed. On a descriptor that is not a block
/// device the platform's own failure is returned as
/// [`DeviceSizeError::Query`].
pub fn query_device_size<Fd: AsFd>(fd: Fd) -> Result<u64, DeviceSizeError> {
    let raw = fd.as_fd().as_raw_fd();

    match platform::query(raw) {
        Ok(size) => {
            tracing::debug!(fd = raw, size, "queried device size");
            Ok(size)
        }
        Err(e) => {
            tracing::debug!(fd = raw, error = %e, "device size query failed");
            Err(e)
        }
    }
}

/// Like [`query_device_size`], but failures become [`SIZE_UNKNOWN`].
///
/// A failed query and an overflowing geometry are indistinguishable here,
/// as is a device that really is `u64::MAX` bytes long.
pub fn device_size_or_sentinel<Fd: AsFd>(fd: Fd) -> u64 {
    query_device_size(fd).unwrap_or_else(|e| e.sentinel())
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;

    #[test]
    fn sentinel_is_all_ones_for_every_cause() {
        let causes = [
            DeviceSizeError::Query(Errno::ENOTTY),
            DeviceSizeError::Overflow {
                block_count: u64::MAX,
                block_size: 512,
            },
            DeviceSizeError::Unsupported,
        ];

        for cause in causes {
            assert_eq!(cause.sentinel(), u64::MAX);
            assert_eq!(cause.sentinel(), !0u64);
        }
    }

    #[test]
    fn regular_file_is_not_a_device() {
        let mut file = tempfile::tempfile().expect("create temp file");
        file.write_all(&[0u8; 4096]).expect("write temp file");

        assert!(query_device_size(&file).is_err());
        assert_eq!(device_size_or_sentinel(&file), SIZE_UNKNOWN);
    }

    #[test]
    fn character_device_is_rejected() {
        let null = File::open("/dev/null").expect("open /dev/null");

        assert!(matches!(
            query_device_size(&null),
            Err(DeviceSizeError::Query(_)) | Err(DeviceSizeError::Unsupported)
        ));
        assert_eq!(device_size_or_sentinel(&null), SIZE_UNKNOWN);
    }

    #[test]
    fn closed_descriptor_fails() {
        let fd = {
            let file = tempfile::tempfile().expect("create temp file");
            file.as_raw_fd()
        };

        // The descriptor number is stale once `file` is dropped.
        let result = platform::query(fd);
        assert!(result.is_err());
        assert_eq!(result.unwrap_or_else(|e| e.sentinel()), SIZE_UNKNOWN);
    }

    #[test]
    fn invalid_descriptor_fails() {
        assert!(matches!(
            platform::query(-1),
            Err(DeviceSizeError::Query(Errno::EBADF)) | Err(DeviceSizeError::Unsupported)
        ));
    }
}
