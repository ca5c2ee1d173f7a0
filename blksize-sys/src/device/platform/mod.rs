// SPDX-License-Identifier: GPL-3.0-only

//! One size query per platform family, picked at build time.

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(super) use linux::query;

#[cfg(any(target_os = "freebsd", target_os = "netbsd"))]
mod media_size;
#[cfg(any(target_os = "freebsd", target_os = "netbsd"))]
pub(super) use media_size::query;

#[cfg(target_os = "openbsd")]
mod disklabel;
#[cfg(target_os = "openbsd")]
pub(super) use disklabel::query;

#[cfg(any(target_os = "illumos", target_os = "solaris"))]
mod media_info;
#[cfg(any(target_os = "illumos", target_os = "solaris"))]
pub(super) use media_info::query;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod apple;
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(super) use apple::query;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "illumos",
    target_os = "solaris",
    target_os = "macos",
    target_os = "ios",
)))]
mod unsupported;
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "illumos",
    target_os = "solaris",
    target_os = "macos",
    target_os = "ios",
)))]
pub(super) use unsupported::query;
