// SPDX-License-Identifier: GPL-3.0-only

//! Block device size queries
//!
//! This crate asks the kernel how large a block device is, through whichever
//! control request the target platform provides:
//! - `BLKGETSIZE64` on Linux
//! - `DIOCGMEDIASIZE` on FreeBSD and NetBSD
//! - `DIOCGDINFO` (disk label geometry) on OpenBSD
//! - `DKIOCGMEDIAINFO` (media info) on illumos
//! - `DKIOCGETBLOCKCOUNT`/`DKIOCGETBLOCKSIZE` on macOS
//!
//! The backend is chosen at build time. Callers own the descriptor; nothing
//! here opens or closes it except the path-level helpers.

#[cfg(unix)]
pub mod device;
pub mod error;
pub mod format;
pub mod length;
pub mod open;

/// In-band "size unavailable" value: all 64 bits set.
pub const SIZE_UNKNOWN: u64 = u64::MAX;

#[cfg(unix)]
pub use device::{device_size_or_sentinel, query_device_size, BlockGeometry, DeviceSizeError};
pub use error::{Result, SysError};
pub use format::format_bytes;
pub use length::{file_length, is_device};
pub use open::{device_size_at, open_device};
