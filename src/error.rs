use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FikaError {
    #[error("executable does not have admin rights")]
    NotElevated,

    #[error("unable to resolve the running executable's directory")]
    ExecDirUnavailable,

    #[error("missing companion executable: {0}")]
    MissingCompanion(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FikaError>;
