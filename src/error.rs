//! Crate-wide error type.

use std::io;

use flexi_logger::FlexiLoggerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Tag read error: {0}")]
    Tag(#[from] metaflac::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Audio output error: {0}")]
    Output(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Logger initialization error: {0}")]
    Logger(#[from] FlexiLoggerError),

    #[error("GUI error: {0}")]
    Gui(#[from] iced::Error),
}
