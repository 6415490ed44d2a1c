use core::fmt::{self, Display};

use crate::law::Law;
use crate::segment::{find_segment, SEG_END};
use crate::{BIAS, CLIP};

use super::Encode;

/// Compresses a 16-bit linear sample to an 8-bit µ-law code.
///
/// Magnitudes past [`CLIP`] saturate to the largest code for their sign.
pub fn linear_to_ulaw(sample: i16) -> u8 {
    let mut value = sample >> 2;

    let mask: u8 = if value < 0 {
        value = -value;
        0x7F
    } else {
        0xFF
    };

    let value = value.min(CLIP) + BIAS;

    let seg = find_segment(value, &SEG_END);
    if seg >= SEG_END.len() {
        return 0x7F ^ mask;
    }

    let mantissa = ((value >> (seg + 3)) & 0x0F) as u8;
    let code = ((seg as u8) << 4) | mantissa;
    code ^ mask
}

pub struct MuLawEncoder;

impl Display for MuLawEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mu-law")
    }
}

impl Encode for MuLawEncoder {
    fn law(&self) -> Law {
        Law::MuLaw
    }

    fn encode_sample(&self, sample: i16) -> u8 {
        linear_to_ulaw(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_vectors() {
        let vectors: &[(i16, u8)] = &[
            (0, 0xFB),
            (1, 0xFB),
            (4, 0xFB),
            (32, 0xFA),
            (64, 0xF9),
            (100, 0xF8),
            (-100, 0x78),
            (1000, 0xEE),
            (-1000, 0x6E),
            (1024, 0xED),
            (8000, 0xC0),
            (-8000, 0x40),
            (30000, 0xA2),
            (i16::MAX, 0xA0),
            (i16::MIN, 0x20),
        ];

        for &(sample, code) in vectors {
            assert_eq!(linear_to_ulaw(sample), code, "sample {sample}");
        }
    }

    #[test]
    fn small_negatives_share_code() {
        // -1..=-4 all shift down to -1
        for sample in -4..=-1 {
            assert_eq!(linear_to_ulaw(sample), 0x7B);
        }
    }

    #[test]
    fn sign_bit_tracks_sample_sign() {
        for sample in i16::MIN..=i16::MAX {
            let code = linear_to_ulaw(sample);
            let negative = code & 0x80 == 0;
            assert_eq!(negative, sample < 0, "sample {sample} -> {code:#04x}");
        }
    }

    #[test]
    fn saturates_at_clip() {
        for sample in 32636..=i16::MAX {
            assert_eq!(linear_to_ulaw(sample), 0xA0);
        }

        for sample in i16::MIN..=-32636 {
            assert_eq!(linear_to_ulaw(sample), 0x20);
        }
    }

    #[test]
    fn only_reaches_lower_six_segments() {
        for sample in i16::MIN..=i16::MAX {
            let seg = ((!linear_to_ulaw(sample)) >> 4) & 0x07;
            assert!(seg <= 5, "sample {sample} reached segment {seg}");
        }
    }

    #[test]
    fn encoder_describes_itself() {
        assert_eq!(MuLawEncoder.to_string(), "mu-law");
        assert_eq!(MuLawEncoder.law(), Law::MuLaw);
    }
}
