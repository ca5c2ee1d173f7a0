// SPDX-License-Identifier: GPL-3.0-only

//! Path-level helpers that open a device before asking for its size

use crate::error::{Result, SysError};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open a block device read-only
///
/// Missing paths and permission failures are reported as their own
/// [`SysError`] variants so callers can tell them apart from I/O errors.
pub fn open_device(device: impl AsRef<Path>) -> Result<File> {
    let device = device.as_ref();
    let mut options = OpenOptions::new();
    options.read(true);
    // Non-blocking so opening a FIFO without a writer does not hang.
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NONBLOCK);
    }

    options.open(device).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            SysError::PermissionDenied(format!("Cannot open {} for reading", device.display()))
        } else if e.kind() == std::io::ErrorKind::NotFound {
            SysError::DeviceNotFound(device.display().to_string())
        } else {
            SysError::Io(e)
        }
    })
}

/// Open `device` and return its size in bytes
#[cfg(unix)]
pub fn device_size_at(device: impl AsRef<Path>) -> Result<u64> {
    let device = device.as_ref();
    let file = open_device(device)?;

    crate::device::query_device_size(&file).map_err(|source| SysError::DeviceSize {
        path: device.display().to_string(),
        source,
    })
}

#[cfg(not(unix))]
pub fn device_size_at(device: impl AsRef<Path>) -> Result<u64> {
    let device = device.as_ref();
    open_device(device)?;
    Err(SysError::Unsupported(device.display().to_string()))
}
