// SPDX-License-Identifier: GPL-3.0-only

// disk(4) on FreeBSD, disk(9) on NetBSD

use std::os::fd::RawFd;

use nix::errno::Errno;

use crate::device::DeviceSizeError;

mod ioctl {
    #[cfg(target_os = "freebsd")]
    nix::ioctl_read!(diocgmediasize, b'd', 129, libc::off_t);
    #[cfg(target_os = "netbsd")]
    nix::ioctl_read!(diocgmediasize, b'd', 132, libc::off_t);
}

pub(in crate::device) fn query(fd: RawFd) -> Result<u64, DeviceSizeError> {
    let mut size: libc::off_t = 0;
    unsafe { ioctl::diocgmediasize(fd, &mut size) }?;

    tracing::trace!(fd, size, "DIOCGMEDIASIZE");
    u64::try_from(size).map_err(|_| DeviceSizeError::Query(Errno::EINVAL))
}
