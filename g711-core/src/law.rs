use derive_more::{Display, FromStr};
use thiserror::Error;

use crate::decode::ulaw::ulaw_to_linear;
use crate::encode::ulaw::linear_to_ulaw;

/// Companding law selector.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Law {
    #[display("mulaw")]
    MuLaw,
    #[display("alaw")]
    ALaw,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{0} companding is not implemented")]
pub struct UnsupportedFormat(pub Law);

/// Compresses one linear sample with the given law.
pub fn linear_to_g711(sample: i16, law: Law) -> Result<u8, UnsupportedFormat> {
    match law {
        Law::MuLaw => Ok(linear_to_ulaw(sample)),
        Law::ALaw => Err(UnsupportedFormat(law)),
    }
}

/// Expands one compressed sample with the given law.
pub fn g711_to_linear(byte: u8, law: Law) -> Result<i16, UnsupportedFormat> {
    match law {
        Law::MuLaw => Ok(ulaw_to_linear(byte)),
        Law::ALaw => Err(UnsupportedFormat(law)),
    }
}
