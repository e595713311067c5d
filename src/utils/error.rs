use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No numeric conversion possible for {input:?}")]
    InvalidFormat { input: String },

    #[error("Value {value:?} is out of range for {target}")]
    OutOfRange {
        value: String,
        target: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
