// SPDX-License-Identifier: GPL-3.0-only

use super::DeviceSizeError;

/// Block count and block size as reported by a label or media-info query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGeometry {
    pub block_count: u64,
    pub block_size: u64,
}

impl BlockGeometry {
    pub const fn new(block_count: u64, block_size: u64) -> Self {
        Self {
            block_count,
            block_size,
        }
    }

    /// Disk label geometry, where the sector count is split into a 16-bit
    /// high half and a 32-bit low half.
    pub const fn from_split_count(count_high: u16, count_low: u32, sector_size: u32) -> Self {
        Self::new(
            ((count_high as u64) << 32) | count_low as u64,
            sector_size as u64,
        )
    }

    /// Total capacity in bytes. Never wraps.
    pub fn byte_size(&self) -> Result<u64, DeviceSizeError> {
        self.block_count
            .checked_mul(self.block_size)
            .ok_or(DeviceSizeError::Overflow {
                block_count: self.block_count,
                block_size: self.block_size,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_count_by_size() {
        assert_eq!(BlockGeometry::new(976_562, 512).byte_size(), Ok(499_999_744));
        assert_eq!(BlockGeometry::new(122_070, 4096).byte_size(), Ok(499_998_720));
        assert_eq!(BlockGeometry::new(0, 512).byte_size(), Ok(0));
    }

    #[test]
    fn overflow_is_an_error_not_a_wrapped_value() {
        let geometry = BlockGeometry::new(u64::MAX / 512 + 1, 512);
        let err = geometry.byte_size().expect_err("should overflow");

        assert_eq!(
            err,
            DeviceSizeError::Overflow {
                block_count: u64::MAX / 512 + 1,
                block_size: 512,
            }
        );
        assert_eq!(err.sentinel(), u64::MAX);
    }

    #[test]
    fn largest_exact_product_still_fits() {
        let geometry = BlockGeometry::new(u64::MAX / 4096, 4096);
        assert_eq!(geometry.byte_size(), Ok(u64::MAX / 4096 * 4096));
    }

    #[test]
    fn split_count_joins_high_and_low_halves() {
        let geometry = BlockGeometry::from_split_count(0x0001, 0x0000_0010, 512);
        assert_eq!(geometry.block_count, (1u64 << 32) + 16);
        assert_eq!(geometry.byte_size(), Ok(((1u64 << 32) + 16) * 512));

        let max = BlockGeometry::from_split_count(u16::MAX, u32::MAX, u32::MAX);
        assert_eq!(max.block_count, (1u64 << 48) - 1);
        assert!(max.byte_size().is_err());
    }
}
