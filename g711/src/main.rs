mod config;
mod decode;
mod encode;
mod stream;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use g711_core::decode::{DecodeError, NewDecoderError};
use g711_core::encode::{EncodeError, NewEncoderError};
use log::LevelFilter;
use structopt::StructOpt;
use thiserror::Error;

/// G.711 companding for raw 16-bit PCM
#[derive(StructOpt)]
enum Opt {
    /// Compress native-endian 16-bit PCM
    Encode(encode::EncodeOpt),
    /// Expand compressed samples to native-endian 16-bit PCM
    Decode(decode::DecodeOpt),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("reading config: {0}")]
    Config(#[from] config::ConfigError),
    #[error("opening input {}: {source}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },
    #[error("opening output {}: {source}", .path.display())]
    OpenOutput { path: PathBuf, source: io::Error },
    #[error("reading input: {0}")]
    Read(io::Error),
    #[error("writing output: {0}")]
    Write(io::Error),
    #[error("block size must be at least one sample")]
    ZeroBlockSize,
    #[error(transparent)]
    NewEncoder(#[from] NewEncoderError),
    #[error(transparent)]
    NewDecoder(#[from] NewDecoderError),
    #[error("encoding: {0}")]
    Encode(#[from] EncodeError),
    #[error("decoding: {0}")]
    Decode(#[from] DecodeError),
}

fn main() -> Result<(), ExitCode> {
    init_log();

    let result = run();

    result.map_err(|err| {
        log::error!("fatal: {err}");
        ExitCode::FAILURE
    })
}

fn run() -> Result<(), RunError> {
    if let Some(config) = config::read()? {
        config::load_into_env(&config);
    }

    let opt = Opt::from_args();

    match opt {
        Opt::Encode(opt) => encode::run(opt),
        Opt::Decode(opt) => decode::run(opt),
    }
}

fn init_log() {
    // stdout may carry audio, keep logs on stderr
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .format_timestamp_millis()
        .filter_level(default_log_level())
        .parse_default_env()
        .init();
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
