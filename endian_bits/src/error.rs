//! Errors reported by the conversions.

/// The reason a conversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// The start index is at or past the end of the buffer.
    InvalidStartIndex,
    /// The buffer ends before the value starting at the start index does.
    InsufficientBytes,
    /// UTF-16 text was requested from an odd number of bytes.
    OddByteCount,
    /// The words of a decimal have reserved bits set or a scale above 28.
    InvalidDecimal,
}

/// A conversion error together with the item it was raised for.
///
/// The item is the name of the type being decoded, such as `u32` or `string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    kind: ErrorKind,
    item: Option<&'static str>,
}

//------------------------------------------------------------------------------
// Error implementations
//------------------------------------------------------------------------------

impl Error {
    /// The reason of the failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The item the error was raised for, if known.
    pub fn item(&self) -> Option<&'static str> {
        self.item
    }

    /// Attach the name of the item being converted.
    ///
    /// The innermost item wins: enclosing an error that already names an
    /// item leaves it unchanged.
    pub fn enclose(self, ident: &'static str) -> Self {
        Self { kind: self.kind, item: Some(self.item.unwrap_or(ident)) }
    }
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.item {
            Some(item) => write!(f, "{}: {}", item, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(value: ErrorKind) -> Self {
        Self { kind: value, item: None }
    }
}

//------------------------------------------------------------------------------
// ErrorKind implementations
//------------------------------------------------------------------------------

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ErrorKind::*;
        match self {
            InvalidStartIndex => write!(f, "the start index is outside the buffer"),
            InsufficientBytes => write!(f, "the buffer does not have enough bytes to convert"),
            OddByteCount => write!(f, "UTF-16 text must span an even number of bytes"),
            InvalidDecimal => write!(f, "the decimal has reserved bits set or its scale exceeds 28"),
        }
    }
}
