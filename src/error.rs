use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JournalError {
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i64),

    #[error("month {0} is not between 1 and 12")]
    MonthOutOfRange(i64),

    #[error("unknown record kind: {0:?} (expected \"futures\" or \"trades\")")]
    UnknownRecordKind(String),

    #[error("unknown market type: {0:?} (expected \"futures\", \"spot\" or \"all\")")]
    UnknownMarketType(String),

    #[error("unknown trade direction: {0:?}")]
    UnknownDirection(String),

    #[error("invalid seed {0:?} (expected an unsigned integer)")]
    InvalidSeed(String),

    #[error("unknown timezone: {0:?}")]
    UnknownTimezone(String),

    #[error("no route matches {0:?}")]
    UnknownRoute(String),

    #[error("redirect loop starting at {start:?} after {hops} hops")]
    RedirectLoop { start: String, hops: usize },
}
