// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Write;
use std::path::Path;

use blksize_sys::{format_bytes, SysError, SIZE_UNKNOWN};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub bytes: Option<u64>,
    pub human: Option<String>,
    pub error: Option<String>,
}

impl Entry {
    pub fn new(path: &Path, result: blksize_sys::Result<u64>) -> Self {
        let path = path.display().to_string();
        match result {
            Ok(bytes) => Self {
                path,
                bytes: Some(bytes),
                human: Some(format_bytes(bytes)),
                error: None,
            },
            Err(e) => Self {
                path,
                bytes: None,
                human: None,
                error: Some(describe(&e)),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Error text for an entry, which already carries the path.
fn describe(error: &SysError) -> String {
    match error {
        SysError::DeviceNotFound(_) => "No such device".to_string(),
        SysError::PermissionDenied(_) => "Permission denied".to_string(),
        #[cfg(unix)]
        SysError::DeviceSize { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    pub human: bool,
    pub sentinel: bool,
}

/// Tab-separated `<size>\t<path>` lines. Failed entries are omitted unless
/// `style.sentinel` asks for the in-band value.
pub fn render_plain(entries: &[Entry], style: Style) -> String {
    let mut out = String::new();

    for entry in entries {
        let size = match (entry.bytes, style.human) {
            (Some(_), true) => entry.human.clone().unwrap_or_default(),
            (Some(bytes), false) => bytes.to_string(),
            (None, _) if style.sentinel => SIZE_UNKNOWN.to_string(),
            (None, _) => continue,
        };
        let _ = writeln!(out, "{size}\t{}", entry.path);
    }

    out
}

pub fn render_json(entries: &[Entry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
