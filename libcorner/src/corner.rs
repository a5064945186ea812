use crate::format::{FP32, FP64, FpFormat};

/// A special-value category a lane can be forced into.
///
/// The 4-bit selector code space maps onto these many-to-one: the paired
/// codes (0/1, 3/4, 5/6, 7/8, 12/13, 14/15) give their category twice the
/// weight when selector nibbles are drawn uniformly. The pairing is part
/// of the generator's contract with the testbench, keep it as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    PosZero,
    NegZero,
    QuietNan,
    SignalingNan,
    PosInf,
    NegInf,
    PosMaxNormal,
    NegMaxNormal,
    PosSubnormal,
    NegSubnormal,
}

impl Corner {
    /// Maps a selector nibble to its category. Only the low 4 bits of
    /// `code` are read, so every input is valid.
    pub fn from_nibble(code: u8) -> Corner {
        match code & 0xf {
            0 | 1 => Corner::PosZero,
            2 => Corner::NegZero,
            3 | 4 => Corner::QuietNan,
            5 | 6 => Corner::SignalingNan,
            7 | 8 => Corner::PosInf,
            9 => Corner::NegInf,
            10 => Corner::PosMaxNormal,
            11 => Corner::NegMaxNormal,
            12 | 13 => Corner::PosSubnormal,
            // 14 | 15
            _ => Corner::NegSubnormal,
        }
    }

    /// Applies the category's bit transformation to `lane`, interpreted in
    /// format `fmt`. Exact categories overwrite the whole lane; masked
    /// categories (NaNs, subnormals) pass surviving input bits through.
    pub fn patch(self, fmt: &FpFormat, lane: u64) -> u64 {
        match self {
            Corner::PosZero => 0,
            Corner::NegZero => fmt.sign_bit(),
            Corner::QuietNan => lane | fmt.exp_mask() | fmt.quiet_bit(),
            Corner::SignalingNan => {
                (lane & !(fmt.sign_bit() | fmt.quiet_bit())) | fmt.exp_mask()
            }
            Corner::PosInf => fmt.exp_mask(),
            Corner::NegInf => fmt.sign_bit() | fmt.exp_mask(),
            Corner::PosMaxNormal => fmt.max_normal(),
            Corner::NegMaxNormal => fmt.sign_bit() | fmt.max_normal(),
            Corner::PosSubnormal => lane & fmt.mant_mask(),
            Corner::NegSubnormal => (lane & fmt.mant_mask()) | fmt.sign_bit(),
        }
    }
}

/// Forces a 64-bit lane into the corner selected by the low nibble of `code`.
pub fn apply_corner64(lane: &mut u64, code: u8) {
    *lane = Corner::from_nibble(code).patch(&FP64, *lane);
}

/// Forces a 32-bit lane into the corner selected by the low nibble of `code`.
pub fn apply_corner32(lane: &mut u32, code: u8) {
    *lane = Corner::from_nibble(code).patch(&FP32, *lane as u64) as u32;
}
