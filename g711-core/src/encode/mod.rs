pub mod ulaw;

use core::fmt::Display;

use thiserror::Error;

use crate::law::{Law, UnsupportedFormat};

use self::ulaw::MuLawEncoder;

#[derive(Debug, Error)]
pub enum NewEncoderError {
    #[error("creating encoder: {0}")]
    Unsupported(#[from] UnsupportedFormat),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("output buffer too small, need at least {need} bytes")]
    OutputBufferTooSmall { need: usize },
}

pub trait Encode: Display + Send + Sync {
    fn law(&self) -> Law;

    fn encode_sample(&self, sample: i16) -> u8;

    /// Compresses `samples` into the front of `out`, one byte per sample,
    /// returning the number of bytes written.
    fn encode_samples(&self, samples: &[i16], out: &mut [u8]) -> Result<usize, EncodeError> {
        let out = check_length(out, samples.len())?;

        for (output, input) in out.iter_mut().zip(samples) {
            *output = self.encode_sample(*input);
        }

        Ok(out.len())
    }
}

pub fn new_encoder(law: Law) -> Result<Box<dyn Encode>, NewEncoderError> {
    let encoder: Box<dyn Encode> = match law {
        Law::MuLaw => Box::new(MuLawEncoder),
        Law::ALaw => return Err(UnsupportedFormat(law).into()),
    };

    log::debug!("instantiated encoder: {encoder}");
    Ok(encoder)
}

fn check_length(out: &mut [u8], need: usize) -> Result<&mut [u8], EncodeError> {
    if out.len() >= need {
        Ok(&mut out[0..need])
    } else {
        Err(EncodeError::OutputBufferTooSmall { need })
    }
}
