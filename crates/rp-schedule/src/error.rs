use rp_core::{BookId, CoreError, DayNumber};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A caller-supplied argument violates a precondition (e.g. zero duration).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("book {0} is not in the catalog")]
    UnknownBook(BookId),

    #[error("no book named {0:?} in the catalog")]
    UnknownBookName(String),

    #[error("{day} has no reading in this plan")]
    UnknownDay { day: DayNumber },

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
