// SPDX-License-Identifier: GPL-3.0-only

use std::os::fd::RawFd;

use crate::device::DeviceSizeError;

mod ioctl {
    // `BLKGETSIZE64` is declared `_IOR(0x12, 114, size_t)` but always fills a u64.
    nix::ioctl_read_bad!(
        blkgetsize64,
        nix::request_code_read!(0x12, 114, std::mem::size_of::<libc::size_t>()),
        u64
    );
}

pub(in crate::device) fn query(fd: RawFd) -> Result<u64, DeviceSizeError> {
    let mut size: u64 = 0;
    unsafe { ioctl::blkgetsize64(fd, &mut size) }?;

    tracing::trace!(fd, size, "BLKGETSIZE64");
    Ok(size)
}
