pub mod ulaw;

use core::fmt::Display;

use thiserror::Error;

use crate::law::{Law, UnsupportedFormat};

use self::ulaw::MuLawDecoder;

#[derive(Debug, Error)]
pub enum NewDecoderError {
    #[error("creating decoder: {0}")]
    Unsupported(#[from] UnsupportedFormat),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("output buffer too small, need at least {need} samples")]
    OutputBufferTooSmall { need: usize },
}

pub trait Decode: Display + Send + Sync {
    fn law(&self) -> Law;

    fn decode_sample(&self, byte: u8) -> i16;

    /// Expands `bytes` into the front of `out`, one sample per byte,
    /// returning the number of samples written.
    fn decode_samples(&self, bytes: &[u8], out: &mut [i16]) -> Result<usize, DecodeError> {
        let out = check_length(out, bytes.len())?;

        for (output, input) in out.iter_mut().zip(bytes) {
            *output = self.decode_sample(*input);
        }

        Ok(out.len())
    }
}

pub fn new_decoder(law: Law) -> Result<Box<dyn Decode>, NewDecoderError> {
    let decoder: Box<dyn Decode> = match law {
        Law::MuLaw => Box::new(MuLawDecoder),
        Law::ALaw => return Err(UnsupportedFormat(law).into()),
    };

    log::debug!("instantiated decoder: {decoder}");
    Ok(decoder)
}

fn check_length(out: &mut [i16], need: usize) -> Result<&mut [i16], DecodeError> {
    if out.len() >= need {
        Ok(&mut out[0..need])
    } else {
        Err(DecodeError::OutputBufferTooSmall { need })
    }
}
