// SPDX-License-Identifier: GPL-3.0-only

use std::mem;
use std::os::fd::RawFd;

use crate::device::{BlockGeometry, DeviceSizeError};

const NDDATA: usize = 5;
const NSPARE: usize = 4;
const MAXPARTITIONS: usize = 16;

/// `struct partition` from `<sys/disklabel.h>`
#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
struct Partition {
    p_size: u32,
    p_offset: u32,
    p_offseth: u16,
    p_sizeh: u16,
    p_fstype: u8,
    p_fragblock: u8,
    p_cpg: u16,
}

/// `struct disklabel` from `<sys/disklabel.h>`
#[repr(C)]
#[allow(dead_code)]
struct Disklabel {
    d_magic: u32,
    d_type: u16,
    d_subtype: u16,
    d_typename: [u8; 16],
    d_packname: [u8; 16],
    d_secsize: u32,
    d_nsectors: u32,
    d_ntracks: u32,
    d_ncylinders: u32,
    d_secpercyl: u32,
    d_secperunit: u32,
    d_uid: [u8; 8],
    d_acylinders: u32,
    d_bstarth: u16,
    d_bendh: u16,
    d_bstart: u32,
    d_bend: u32,
    d_flags: u32,
    d_drivedata: [u32; NDDATA],
    d_secperunith: u16,
    d_version: u16,
    d_spare: [u32; NSPARE],
    d_magic2: u32,
    d_checksum: u16,
    d_npartitions: u16,
    d_bbsize: u32,
    d_sbsize: u32,
    d_partitions: [Partition; MAXPARTITIONS],
}

impl Disklabel {
    /// `DL_GETDSIZE` sectors of `d_secsize` bytes
    fn geometry(&self) -> BlockGeometry {
        BlockGeometry::from_split_count(self.d_secperunith, self.d_secperunit, self.d_secsize)
    }
}

mod ioctl {
    nix::ioctl_read!(diocgdinfo, b'd', 101, super::Disklabel);
}

pub(in crate::device) fn query(fd: RawFd) -> Result<u64, DeviceSizeError> {
    let mut label = mem::MaybeUninit::<Disklabel>::zeroed();
    unsafe { ioctl::diocgdinfo(fd, label.as_mut_ptr()) }?;
    let label = unsafe { label.assume_init() };

    let geometry = label.geometry();
    tracing::trace!(
        fd,
        sectors = geometry.block_count,
        sector_size = geometry.block_size,
        "DIOCGDINFO"
    );
    geometry.byte_size()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_sys_disklabel_h() {
        assert_eq!(mem::size_of::<Partition>(), 16);
        assert_eq!(mem::size_of::<Disklabel>(), 404);
    }

    #[test]
    fn geometry_joins_split_sector_count() {
        let mut label = unsafe { mem::MaybeUninit::<Disklabel>::zeroed().assume_init() };
        label.d_secsize = 512;
        label.d_secperunit = 0x0000_0010;
        label.d_secperunith = 0x0001;

        let geometry = label.geometry();
        assert_eq!(geometry, BlockGeometry::new((1u64 << 32) + 16, 512));
        assert_eq!(geometry.byte_size(), Ok(((1u64 << 32) + 16) * 512));
    }
}
