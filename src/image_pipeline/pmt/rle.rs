//! Byte-oriented run-length decoding of PMT groups.
//!
//! Each control byte selects one of two operations by its high bit:
//!
//! - `1nnn_nnnn`: run. The next byte is written `n` times.
//! - `0nnn_nnnn`: literal. The next `n` bytes are copied verbatim.
//!
//! Both counts are limited to 127 by the encoding. Decoding stops once the
//! raw input is consumed, and the output must then be exactly full.

use tracing::trace;

use crate::image_pipeline::common::error::{ConversionError, Result};

const RUN_FLAG: u8 = 0x80;
const COUNT_MASK: u8 = 0x7F;

/// Decodes `raw` into `decoded`, which must end up completely filled.
///
/// Returns the number of bytes written, always `decoded.len()` on success.
///
/// # Errors
///
/// * [`ConversionError::InputOverrun`] if a run value or literal bytes lie past the end of `raw`
/// * [`ConversionError::OutputOverrun`] if an opcode would write past the end of `decoded`
/// * [`ConversionError::SizeMismatch`] if `raw` is exhausted before `decoded` is full
pub fn decode_rle(raw: &[u8], decoded: &mut [u8]) -> Result<usize> {
    let capacity = decoded.len();
    let mut src = 0;
    let mut dst = 0;

    while src < raw.len() {
        let control = raw[src];
        let count = usize::from(control & COUNT_MASK);
        let is_run = control & RUN_FLAG != 0;
        let operand_len = if is_run { 1 } else { count };

        if raw.len() - (src + 1) < operand_len {
            return Err(ConversionError::InputOverrun {
                offset: src,
                needed: operand_len,
                len: raw.len(),
            });
        }
        if capacity - dst < count {
            return Err(ConversionError::OutputOverrun {
                written: dst,
                requested: count,
                capacity,
            });
        }

        let operand = &raw[src + 1..src + 1 + operand_len];
        let out = &mut decoded[dst..dst + count];
        if is_run {
            out.fill(operand[0]);
        } else {
            out.copy_from_slice(operand);
        }
        trace!(offset = src, is_run, count, "rle opcode");

        src += 1 + operand_len;
        dst += count;
    }

    if dst != capacity {
        return Err(ConversionError::SizeMismatch {
            decoded: dst,
            expected: capacity,
        });
    }
    Ok(dst)
}
