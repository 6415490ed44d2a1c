use std::io::{Read, Write};

use g711_core::decode::{new_decoder, Decode};
use g711_core::{pcm, Law};
use structopt::StructOpt;

use crate::stream::{self, StreamOpt};
use crate::RunError;

#[derive(StructOpt)]
pub struct DecodeOpt {
    #[structopt(flatten)]
    pub stream: StreamOpt,

    /// Companding law (mulaw, alaw)
    #[structopt(long, env = "G711_LAW", default_value = "mulaw")]
    pub law: Law,
}

pub fn run(opt: DecodeOpt) -> Result<(), RunError> {
    let decoder = new_decoder(opt.law)?;
    let block_size = opt.stream.block_size()?;

    let mut input = opt.stream.open_input()?;
    let mut output = opt.stream.open_output()?;

    let samples = transcode(&*decoder, &mut input, &mut output, block_size)?;

    log::info!("decoded stream: samples={samples}, law={}", opt.law);
    Ok(())
}

/// Expands compressed samples from `input` into native-endian PCM on
/// `output` one block at a time, returning the number of samples decoded.
pub fn transcode<R, W>(decoder: &dyn Decode, input: &mut R, output: &mut W, block_size: usize) -> Result<usize, RunError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut ulaw = vec![0u8; block_size];
    let mut pcm = vec![0u8; block_size * 2];
    let mut total = 0;

    loop {
        let n = stream::read_block(input, &mut ulaw).map_err(RunError::Read)?;
        if n == 0 {
            break;
        }

        let written = pcm::decode_pcm(decoder, &ulaw[..n], &mut pcm)?;
        output.write_all(&pcm[..written]).map_err(RunError::Write)?;
        total += n;

        if n < ulaw.len() {
            break;
        }
    }

    output.flush().map_err(RunError::Write)?;
    Ok(total)
}
