use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::PathBuf;

use structopt::StructOpt;

use crate::RunError;

#[derive(StructOpt)]
pub struct StreamOpt {
    /// Input file, stdin if omitted
    #[structopt(short, long, parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Output file, stdout if omitted
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Samples per processing block
    #[structopt(long, env = "G711_BLOCK_SIZE", default_value = "160")]
    pub block_size: usize,
}

impl StreamOpt {
    pub fn open_input(&self) -> Result<Box<dyn Read>, RunError> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .map_err(|source| RunError::OpenInput { path: path.clone(), source })?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }

    pub fn open_output(&self) -> Result<Box<dyn Write>, RunError> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .map_err(|source| RunError::OpenOutput { path: path.clone(), source })?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }

    pub fn block_size(&self) -> Result<usize, RunError> {
        match self.block_size {
            0 => Err(RunError::ZeroBlockSize),
            n => Ok(n),
        }
    }
}

/// Reads until `buf` is full or the reader is exhausted. Returns the number
/// of bytes read, which is only short of `buf.len()` at end of stream.
pub fn read_block<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Hands out at most `chunk` bytes per read call.
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn fills_block_across_short_reads() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = Trickle { data: &data, chunk: 2 };
        let mut buf = [0u8; 4];

        assert_eq!(read_block(&mut reader, &mut buf).unwrap(), 4);
        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(read_block(&mut reader, &mut buf).unwrap(), 1);
        assert_eq!(buf[0], 5);
        assert_eq!(read_block(&mut reader, &mut buf).unwrap(), 0);
    }

    #[test]
    fn empty_reader() {
        let mut buf = [0u8; 4];
        assert_eq!(read_block(&mut Cursor::new(Vec::new()), &mut buf).unwrap(), 0);
    }

    #[test]
    fn zero_block_size_is_rejected() {
        let opt = StreamOpt { input: None, output: None, block_size: 0 };
        assert!(matches!(opt.block_size(), Err(RunError::ZeroBlockSize)));
    }
}
