use libcorner::format::{FP32, FP64, FpFormat};
use libcorner::sequence::ElementWidth;

/// Renders one output word as its binary encoding split into
/// sign/exponent/mantissa groups. In 32-bit mode the word holds two
/// lanes; the high lane is printed first, separated by a bar.
pub fn format_word(word: u64, width: ElementWidth) -> String {
    match width {
        ElementWidth::Bits64 => format_lane(word, &FP64),
        ElementWidth::Bits32 => format!(
            "{} | {}",
            format_lane(word >> 32, &FP32),
            format_lane(word & 0xffff_ffff, &FP32),
        ),
    }
}

fn format_lane(lane: u64, fmt: &FpFormat) -> String {
    let sign = (lane >> (fmt.width - 1)) & 1;
    let exp = (lane & fmt.exp_mask()) >> fmt.mant_bits;
    let mant = lane & fmt.mant_mask();
    format!(
        "{sign} {exp:0ew$b} {mant:0mw$b}",
        ew = fmt.exp_bits as usize,
        mw = fmt.mant_bits as usize,
    )
}
