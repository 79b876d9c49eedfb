//! Input validation for the requested array size.

use std::fmt;
use thiserror::Error;

/// Smallest accepted array size.
pub const MIN_ARRAY_SIZE: usize = 0;

/// Largest accepted array size.
pub const MAX_ARRAY_SIZE: usize = 100_000;

/// Longest raw input the front end accepts.
pub const MAX_INPUT_LEN: usize = 6;

/// Message shown to the user whenever input is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid number between 0 and 100,000.";

/// Title shown above [`INVALID_INPUT_MESSAGE`].
pub const INVALID_INPUT_TITLE: &str = "Invalid Input";

/// Result type for input validation.
pub type InputResult<T> = Result<T, InvalidInputError>;

/// Why a raw input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputKind {
    /// Nothing but whitespace.
    Empty,
    /// Not a base-10 integer.
    NotANumber,
    /// An integer outside `[MIN_ARRAY_SIZE, MAX_ARRAY_SIZE]`.
    OutOfRange {
        /// The parsed value.
        value: i64,
    },
    /// Longer than [`MAX_INPUT_LEN`] characters.
    TooLong {
        /// Character count after trimming.
        len: usize,
    },
}

impl fmt::Display for InvalidInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::NotANumber => write!(f, "not a number"),
            Self::OutOfRange { value } => write!(f, "{value} is out of range"),
            Self::TooLong { len } => write!(f, "{len} characters exceeds {MAX_INPUT_LEN}"),
        }
    }
}

/// Raw input could not be turned into an [`ArraySize`].
///
/// Always recoverable. The `Display` output is the fixed user-facing message;
/// use [`InvalidInputError::kind`] for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_INPUT_MESSAGE)]
pub struct InvalidInputError {
    kind: InvalidInputKind,
}

impl InvalidInputError {
    /// Create an error of the given kind.
    #[must_use]
    pub fn new(kind: InvalidInputKind) -> Self {
        Self { kind }
    }

    /// The reason the input was rejected.
    #[must_use]
    pub fn kind(&self) -> &InvalidInputKind {
        &self.kind
    }

    /// The fixed message shown to the user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// A validated array size in `[MIN_ARRAY_SIZE, MAX_ARRAY_SIZE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArraySize(usize);

impl ArraySize {
    /// Zero elements.
    pub const ZERO: ArraySize = ArraySize(MIN_ARRAY_SIZE);

    /// The largest accepted size.
    pub const MAX: ArraySize = ArraySize(MAX_ARRAY_SIZE);

    /// Wrap `size`, rejecting values above [`MAX_ARRAY_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputKind::OutOfRange`] when `size` is too large.
    pub fn new(size: usize) -> InputResult<Self> {
        if size > MAX_ARRAY_SIZE {
            return Err(InvalidInputError::new(InvalidInputKind::OutOfRange {
                value: i64::try_from(size).unwrap_or(i64::MAX),
            }));
        }
        Ok(Self(size))
    }

    /// Number of elements.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ArraySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ArraySize> for usize {
    fn from(size: ArraySize) -> Self {
        size.0
    }
}

/// Parse raw text into an [`ArraySize`].
///
/// Surrounding whitespace is ignored and a leading sign is allowed, so
/// `" +42 "` and `"-0"` are accepted. Anything that is not a base-10 integer
/// in `[0, 100000]` is rejected.
///
/// # Errors
///
/// Returns [`InvalidInputError`] for empty, non-numeric or out-of-range input.
pub fn validate(raw: &str) -> InputResult<ArraySize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError::new(InvalidInputKind::Empty));
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| InvalidInputError::new(InvalidInputKind::NotANumber))?;

    match usize::try_from(value) {
        Ok(size) if size <= MAX_ARRAY_SIZE => Ok(ArraySize(size)),
        _ => Err(InvalidInputError::new(InvalidInputKind::OutOfRange { value })),
    }
}

/// Reject input longer than [`MAX_INPUT_LEN`] characters, then [`validate`].
///
/// Mirrors a six-character text field: the limit applies to the trimmed text.
///
/// # Errors
///
/// Returns [`InvalidInputError`] for over-long input or anything [`validate`]
/// rejects.
pub fn validate_field(raw: &str) -> InputResult<ArraySize> {
    let len = raw.trim().chars().count();
    if len > MAX_INPUT_LEN {
        return Err(InvalidInputError::new(InvalidInputKind::TooLong { len }));
    }
    validate(raw)
}
