//! Raw byte buffer entry points. Linear samples are 16-bit signed integers
//! in host byte order; compressed samples are single bytes.

use std::borrow::Cow;

use crate::decode::{Decode, DecodeError};
use crate::encode::{Encode, EncodeError};

const SAMPLE_BYTES: usize = core::mem::size_of::<i16>();

/// Views `bytes` as native-endian samples. A trailing odd byte is not part
/// of any sample. Borrows when `bytes` is aligned for `i16`, copies
/// otherwise.
pub fn pcm_samples(bytes: &[u8]) -> Cow<'_, [i16]> {
    let whole = bytes.len() - bytes.len() % SAMPLE_BYTES;
    let bytes = &bytes[..whole];

    match bytemuck::try_cast_slice(bytes) {
        Ok(samples) => Cow::Borrowed(samples),
        Err(_) => {
            log::trace!("copying unaligned pcm buffer: length={whole}");
            Cow::Owned(bytemuck::pod_collect_to_vec(bytes))
        }
    }
}

/// Compresses `pcm.len() / 2` samples from `pcm` into `out`, returning the
/// number of bytes written.
pub fn encode_pcm<E: Encode + ?Sized>(encoder: &E, pcm: &[u8], out: &mut [u8]) -> Result<usize, EncodeError> {
    if pcm.len() % SAMPLE_BYTES != 0 {
        log::warn!("pcm buffer has odd length, ignoring trailing byte: length={}", pcm.len());
    }

    let samples = pcm_samples(pcm);
    encoder.encode_samples(&samples, out)
}

/// Expands every byte of `ulaw` into a native-endian sample in `out`,
/// returning the number of bytes written.
pub fn decode_pcm<D: Decode + ?Sized>(decoder: &D, ulaw: &[u8], out: &mut [u8]) -> Result<usize, DecodeError> {
    let need = ulaw.len();
    if out.len() / SAMPLE_BYTES < need {
        return Err(DecodeError::OutputBufferTooSmall { need });
    }

    let out = &mut out[..need * SAMPLE_BYTES];

    for (output, input) in out.chunks_exact_mut(SAMPLE_BYTES).zip(ulaw) {
        let sample = decoder.decode_sample(*input);
        output.copy_from_slice(&sample.to_ne_bytes());
    }

    Ok(out.len())
}
