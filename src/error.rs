use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid time '{0}': expected epoch seconds or YYYY-MM-DDTHH:MM[:SS]")]
    InvalidTime(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
