use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArmigerError {
    #[error("Stats cannot be negative: {stat} = {value}")]
    NegativeStat { stat: &'static str, value: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArmigerError>;
