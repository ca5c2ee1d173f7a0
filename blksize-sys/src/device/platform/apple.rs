// SPDX-License-Identifier: GPL-3.0-only

use std::os::fd::RawFd;

use crate::device::{BlockGeometry, DeviceSizeError};

mod ioctl {
    nix::ioctl_read!(dkiocgetblocksize, b'd', 24, u32);
    nix::ioctl_read!(dkiocgetblockcount, b'd', 25, u64);
}

pub(in crate::device) fn query(fd: RawFd) -> Result<u64, DeviceSizeError> {
    let mut block_size: u32 = 0;
    let mut block_count: u64 = 0;
    unsafe { ioctl::dkiocgetblocksize(fd, &mut block_size) }?;
    unsafe { ioctl::dkiocgetblockcount(fd, &mut block_count) }?;

    tracing::trace!(fd, block_count, block_size, "DKIOCGETBLOCKCOUNT");
    BlockGeometry::new(block_count, block_size as u64).byte_size()
}
