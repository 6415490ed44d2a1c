use std::io::{Read, Write};

use g711_core::encode::{new_encoder, Encode};
use g711_core::{pcm, Law};
use structopt::StructOpt;

use crate::stream::{self, StreamOpt};
use crate::RunError;

#[derive(StructOpt)]
pub struct EncodeOpt {
    #[structopt(flatten)]
    pub stream: StreamOpt,

    /// Companding law (mulaw, alaw)
    #[structopt(long, env = "G711_LAW", default_value = "mulaw")]
    pub law: Law,
}

pub fn run(opt: EncodeOpt) -> Result<(), RunError> {
    let encoder = new_encoder(opt.law)?;
    let block_size = opt.stream.block_size()?;

    let mut input = opt.stream.open_input()?;
    let mut output = opt.stream.open_output()?;

    let samples = transcode(&*encoder, &mut input, &mut output, block_size)?;

    log::info!("encoded stream: samples={samples}, law={}", opt.law);
    Ok(())
}

/// Compresses native-endian PCM from `input` to `output` one block at a
/// time, returning the number of samples encoded.
pub fn transcode<R, W>(encoder: &dyn Encode, input: &mut R, output: &mut W, block_size: usize) -> Result<usize, RunError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut pcm = vec![0u8; block_size * 2];
    let mut ulaw = vec![0u8; block_size];
    let mut total = 0;

    loop {
        let n = stream::read_block(input, &mut pcm).map_err(RunError::Read)?;
        if n == 0 {
            break;
        }

        let written = pcm::encode_pcm(encoder, &pcm[..n], &mut ulaw)?;
        output.write_all(&ulaw[..written]).map_err(RunError::Write)?;
        total += written;

        if n < pcm.len() {
            break;
        }
    }

    output.flush().map_err(RunError::Write)?;
    Ok(total)
}
