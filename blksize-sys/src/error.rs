// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

#[cfg(unix)]
use crate::device::DeviceSizeError;

/// Error types for path-level device operations
#[derive(Error, Debug)]
pub enum SysError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Device size queries are not supported on this platform: {0}")]
    Unsupported(String),

    #[cfg(unix)]
    #[error("Cannot determine size of {path}: {source}")]
    DeviceSize {
        path: String,
        #[source]
        source: DeviceSizeError,
    },
}

/// Result type alias for path-level device operations
pub type Result<T> = std::result::Result<T, SysError>;
