// SPDX-License-Identifier: GPL-3.0-only

use std::mem;
use std::os::fd::RawFd;

use crate::device::{BlockGeometry, DeviceSizeError};

const DKIOC: u32 = 0x04 << 8;
const DKIOCGMEDIAINFO: u32 = DKIOC | 42;

/// `struct dk_minfo` from `<sys/dkio.h>`
#[repr(C)]
#[allow(dead_code)]
struct DkMinfo {
    dki_media_type: u32,
    dki_lbsize: u32,
    dki_capacity: u64,
}

mod ioctl {
    // dkio(4I) request numbers are plain integers, not `_IOR` encodings.
    nix::ioctl_read_bad!(dkiocgmediainfo, super::DKIOCGMEDIAINFO, super::DkMinfo);
}

pub(in crate::device) fn query(fd: RawFd) -> Result<u64, DeviceSizeError> {
    let mut info = mem::MaybeUninit::<DkMinfo>::zeroed();
    unsafe { ioctl::dkiocgmediainfo(fd, info.as_mut_ptr()) }?;
    let info = unsafe { info.assume_init() };

    let geometry = BlockGeometry::new(info.dki_capacity, info.dki_lbsize as u64);
    tracing::trace!(
        fd,
        blocks = geometry.block_count,
        block_size = geometry.block_size,
        "DKIOCGMEDIAINFO"
    );
    geometry.byte_size()
}
