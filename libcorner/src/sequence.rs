use crate::corner::{apply_corner32, apply_corner64};
use crate::error::CornerError;

/// Element width of the operand lanes (the vector unit's SEW).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementWidth {
    Bits32,
    Bits64,
}

impl ElementWidth {
    pub fn bits(&self) -> u32 {
        match self {
            ElementWidth::Bits32 => 32,
            ElementWidth::Bits64 => 64,
        }
    }

    /// Number of lanes the three 64-bit operand words split into.
    pub fn lane_count(&self) -> u8 {
        match self {
            ElementWidth::Bits32 => 6,
            ElementWidth::Bits64 => 3,
        }
    }

    /// Validates a corner lane selector against this width's pool:
    /// 0 selects all-lanes mode, 1..=lane_count selects a single lane.
    pub fn check_setcorner(&self, setcorner: u8) -> Result<(), CornerError> {
        if setcorner > self.lane_count() {
            return Err(CornerError::LaneOutOfRange {
                setcorner,
                lanes: self.lane_count(),
            });
        }
        Ok(())
    }
}

impl TryFrom<u32> for ElementWidth {
    type Error = CornerError;

    fn try_from(bits: u32) -> Result<Self, CornerError> {
        match bits {
            32 => Ok(ElementWidth::Bits32),
            64 => Ok(ElementWidth::Bits64),
            other => Err(CornerError::UnsupportedWidth(other)),
        }
    }
}

/// Builds one three-operand test vector from raw randomness.
///
/// The three seed words form the lane pool: three 64-bit lanes, or six
/// 32-bit lanes with seed `i` supplying lane `2i` (low half) and lane
/// `2i+1` (high half). With `setcorner == 0` every lane is forced into
/// the corner picked by its own selector nibble (nibble `i` for lane
/// `i`); with `setcorner == k` only lane `k-1` is patched, from the
/// selector's lowest nibble, and the rest stay random. Selector bits
/// above the active nibbles are ignored.
///
/// Returns the three output words; in 32-bit mode output `j` packs lane
/// `2j` into its low half and lane `2j+1` into its high half.
pub fn assemble(
    seeds: [u64; 3],
    selector: u64,
    width: ElementWidth,
    setcorner: u8,
) -> Result<[u64; 3], CornerError> {
    width.check_setcorner(setcorner)?;

    match width {
        ElementWidth::Bits64 => {
            let mut pool = seeds;
            if setcorner == 0 {
                for (i, lane) in pool.iter_mut().enumerate() {
                    apply_corner64(lane, nibble(selector, i));
                }
            } else {
                apply_corner64(&mut pool[setcorner as usize - 1], nibble(selector, 0));
            }
            Ok(pool)
        }
        ElementWidth::Bits32 => {
            let mut pool = [0u32; 6];
            for (i, seed) in seeds.iter().enumerate() {
                pool[2 * i] = *seed as u32;
                pool[2 * i + 1] = (*seed >> 32) as u32;
            }
            if setcorner == 0 {
                for (i, lane) in pool.iter_mut().enumerate() {
                    apply_corner32(lane, nibble(selector, i));
                }
            } else {
                apply_corner32(&mut pool[setcorner as usize - 1], nibble(selector, 0));
            }
            let mut out = [0u64; 3];
            for (j, word) in out.iter_mut().enumerate() {
                *word = pool[2 * j] as u64 | ((pool[2 * j + 1] as u64) << 32);
            }
            Ok(out)
        }
    }
}

fn nibble(selector: u64, lane: usize) -> u8 {
    ((selector >> (4 * lane)) & 0xf) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEEDS: [u64; 3] = [
        0x1111_1111_1111_1111,
        0x2222_2222_2222_2222,
        0x3333_3333_3333_3333,
    ];

    #[test]
    fn test_single_lane_64() {
        // Lane 0 forced to -inf, the other two operands pass through.
        let out = assemble(SEEDS, 0x9, ElementWidth::Bits64, 1).unwrap();
        assert_eq!(out[0], 0xfff0_0000_0000_0000);
        assert_eq!(out[1], 0x2222_2222_2222_2222);
        assert_eq!(out[2], 0x3333_3333_3333_3333);
    }

    #[test]
    fn test_single_lane_64_middle_and_last() {
        let out = assemble(SEEDS, 0x7, ElementWidth::Bits64, 2).unwrap();
        assert_eq!(out[0], SEEDS[0]);
        assert_eq!(out[1], 0x7ff0_0000_0000_0000);
        assert_eq!(out[2], SEEDS[2]);

        let out = assemble(SEEDS, 0x2, ElementWidth::Bits64, 3).unwrap();
        assert_eq!(out[0], SEEDS[0]);
        assert_eq!(out[1], SEEDS[1]);
        assert_eq!(out[2], 0x8000_0000_0000_0000);
    }

    #[test]
    fn test_all_lanes_64() {
        // Nibbles (lane0, lane1, lane2) = (9, 7, 0); bits above nibble 2
        // must be ignored.
        let selector = 0xffff_ffff_ffff_f079;
        let out = assemble(SEEDS, selector, ElementWidth::Bits64, 0).unwrap();
        assert_eq!(out[0], 0xfff0_0000_0000_0000);
        assert_eq!(out[1], 0x7ff0_0000_0000_0000);
        assert_eq!(out[2], 0);
    }

    #[test]
    fn test_all_lanes_32() {
        // Nibbles for lanes 0..5 = (1, 2, 9, 0, 7, 0).
        let selector = 0x0007_0921;
        let out = assemble(SEEDS, selector, ElementWidth::Bits32, 0).unwrap();
        // lane0 = +0, lane1 = -0
        assert_eq!(out[0], 0x8000_0000_0000_0000);
        // lane2 = -inf, lane3 = +0
        assert_eq!(out[1], 0x0000_0000_ff80_0000);
        // lane4 = +inf, lane5 = +0
        assert_eq!(out[2], 0x0000_0000_7f80_0000);
    }

    #[test]
    fn test_all_lanes_32_masked_categories_pack_per_half() {
        // Quiet NaN in every lane: each half keeps its own random bits.
        let out = assemble(SEEDS, 0x33_3333, ElementWidth::Bits32, 0).unwrap();
        for (j, word) in out.iter().enumerate() {
            let lo = (SEEDS[j] as u32) as u64 | 0x7fc0_0000;
            let hi = (SEEDS[j] >> 32) | 0x7fc0_0000;
            assert_eq!(*word, lo | (hi << 32));
        }
    }

    #[test]
    fn test_single_lane_32_leaves_other_lanes_untouched() {
        // Lane 3 is the high half of the second output word.
        let out = assemble(SEEDS, 0x9, ElementWidth::Bits32, 4).unwrap();
        assert_eq!(out[0], SEEDS[0]);
        assert_eq!(out[1], 0xff80_0000_2222_2222);
        assert_eq!(out[2], SEEDS[2]);

        // Lane 6 is the high half of the third.
        let out = assemble(SEEDS, 0x7, ElementWidth::Bits32, 6).unwrap();
        assert_eq!(out[0], SEEDS[0]);
        assert_eq!(out[1], SEEDS[1]);
        assert_eq!(out[2], 0x7f80_0000_3333_3333);
    }

    #[test]
    fn test_single_lane_reads_only_the_low_nibble() {
        let out = assemble(SEEDS, 0xabc9, ElementWidth::Bits64, 1).unwrap();
        assert_eq!(out[0], 0xfff0_0000_0000_0000);
    }

    #[test]
    fn test_zero_selector_word_zeroes_every_lane() {
        let out = assemble(SEEDS, 0, ElementWidth::Bits32, 0).unwrap();
        assert_eq!(out, [0, 0, 0]);
        let out = assemble(SEEDS, 0, ElementWidth::Bits64, 0).unwrap();
        assert_eq!(out, [0, 0, 0]);
    }

    #[test]
    fn test_width_rejection() {
        for bits in [0u32, 8, 16, 128] {
            assert_eq!(
                ElementWidth::try_from(bits),
                Err(CornerError::UnsupportedWidth(bits))
            );
        }
        assert_eq!(ElementWidth::try_from(32), Ok(ElementWidth::Bits32));
        assert_eq!(ElementWidth::try_from(64), Ok(ElementWidth::Bits64));
    }

    #[test]
    fn test_setcorner_rejection() {
        assert_eq!(
            assemble(SEEDS, 0, ElementWidth::Bits64, 4),
            Err(CornerError::LaneOutOfRange {
                setcorner: 4,
                lanes: 3
            })
        );
        assert_eq!(
            assemble(SEEDS, 0, ElementWidth::Bits32, 7),
            Err(CornerError::LaneOutOfRange {
                setcorner: 7,
                lanes: 6
            })
        );
        // The 32-bit pool accepts selectors the 64-bit pool rejects.
        assert!(assemble(SEEDS, 0, ElementWidth::Bits32, 6).is_ok());
    }
}
