use core::fmt::{self, Display};

use crate::law::Law;
use crate::BIAS;

use super::Decode;

/// Expands an 8-bit µ-law code to a 16-bit linear sample.
pub fn ulaw_to_linear(code: u8) -> i16 {
    let code = !code;

    let mantissa = i16::from(code & 0x0F);
    let seg = (code >> 4) & 0x07;
    let t = ((mantissa << 3) + BIAS) << seg;

    if code & 0x80 != 0 {
        BIAS - t
    } else {
        t - BIAS
    }
}

pub struct MuLawDecoder;

impl Display for MuLawDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mu-law")
    }
}

impl Decode for MuLawDecoder {
    fn law(&self) -> Law {
        Law::MuLaw
    }

    fn decode_sample(&self, byte: u8) -> i16 {
        ulaw_to_linear(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::ulaw::linear_to_ulaw;

    #[test]
    fn reference_vectors() {
        let vectors: &[(u8, i16)] = &[
            (0xFF, 0),
            (0x7F, 0),
            (0xFB, 32),
            (0x7B, -32),
            (0xEF, 33),
            (0xDF, 99),
            (0xCF, 231),
            (0xD2, 515),
            (0xAF, 1023),
            (0x9F, 2079),
            (0xA0, 4863),
            (0x8F, 4191),
            (0x90, 9759),
            (0x80, 19551),
            (0x00, -19551),
        ];

        for &(code, sample) in vectors {
            assert_eq!(ulaw_to_linear(code), sample, "code {code:#04x}");
        }
    }

    #[test]
    fn sign_bit_is_symmetric() {
        for code in 0..=u8::MAX {
            assert_eq!(ulaw_to_linear(code), -ulaw_to_linear(code ^ 0x80), "code {code:#04x}");
        }
    }

    #[test]
    fn decoded_silence_is_stable() {
        // the idle codes expand to zero, and zero compresses to the smallest
        // positive code, which expands within one bias of zero
        let zero = ulaw_to_linear(0xFF);
        let code = linear_to_ulaw(zero);
        assert!(ulaw_to_linear(code).abs() <= BIAS);
    }

    #[test]
    fn decoder_describes_itself() {
        assert_eq!(MuLawDecoder.to_string(), "mu-law");
        assert_eq!(MuLawDecoder.law(), Law::MuLaw);
    }
}
