use std::error::Error as StdError;
use std::fmt;

/// `EwmhResult<T>` provides a simplified result type with a common error type
pub type EwmhResult<T> = std::result::Result<T, ErrorWrapper>;

/// EwmhError defines all the internal errors that `ewmh` might return
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EwmhError {
    PropertyNotFound(String),
    UnknownProperty(String),
    UnknownStateAtom(String),
    UnknownWindowType(String),
    UnknownStateAction(u32),
    InvalidPropertyFormat(String),
}
impl std::error::Error for EwmhError {}
impl fmt::Display for EwmhError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EwmhError::PropertyNotFound(ref err) => write!(f, "property {} was not found", err),
            EwmhError::UnknownProperty(ref err) => write!(f, "unknown property was given: {}", err),
            EwmhError::UnknownStateAtom(ref err) => write!(f, "unknown state atom was given: {}", err),
            EwmhError::UnknownWindowType(ref err) => write!(f, "unknown window type was given: {}", err),
            EwmhError::UnknownStateAction(ref err) => write!(f, "unknown state action was given: {}", err),
            EwmhError::InvalidPropertyFormat(ref err) => write!(f, "property {} has an invalid format", err),
        }
    }
}

/// ErrorWrapper provides a wrapper around all the underlying library dependencys that `ewmh` uses
/// such that we can easily surface all errors from `x11rb` in a single easy way.
#[derive(Debug)]
pub enum ErrorWrapper {
    Ewmh(EwmhError),

    // std::str::Utf8Error
    Utf8(std::str::Utf8Error),

    // x11rb errors
    Connect(x11rb::errors::ConnectError),
    Connection(x11rb::errors::ConnectionError),
    Reply(x11rb::errors::ReplyError),
}
impl ErrorWrapper {
    /// Implemented directly on the `Error` type to reduce casting required
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.as_ref().is::<T>()
    }

    /// Implemented directly on the `Error` type to reduce casting required
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.as_ref().downcast_ref::<T>()
    }

    /// Implemented directly on the `Error` type to reduce casting required
    pub fn downcast_mut<T: StdError + 'static>(&mut self) -> Option<&mut T> {
        self.as_mut().downcast_mut::<T>()
    }

    /// Implemented directly on the `Error` type to reduce casting required
    /// which allows for using as_ref to get the correct pass through.
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.as_ref().source()
    }

    /// Check for the recoverable "window manager never set this property" case
    /// so that callers can treat it as an empty/default value.
    pub fn is_property_not_found(&self) -> bool {
        matches!(self, ErrorWrapper::Ewmh(EwmhError::PropertyNotFound(_)))
    }
}
impl StdError for ErrorWrapper {}

impl fmt::Display for ErrorWrapper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorWrapper::Ewmh(ref err) => write!(f, "{}", err),
            ErrorWrapper::Utf8(ref err) => write!(f, "{}", err),
            ErrorWrapper::Connect(ref err) => write!(f, "{}", err),
            ErrorWrapper::Connection(ref err) => write!(f, "{}", err),
            ErrorWrapper::Reply(ref err) => write!(f, "{}", err),
        }
    }
}

impl AsRef<dyn StdError> for ErrorWrapper {
    fn as_ref(&self) -> &(dyn StdError + 'static) {
        match *self {
            ErrorWrapper::Ewmh(ref err) => err,
            ErrorWrapper::Utf8(ref err) => err,
            ErrorWrapper::Connect(ref err) => err,
            ErrorWrapper::Connection(ref err) => err,
            ErrorWrapper::Reply(ref err) => err,
        }
    }
}

impl AsMut<dyn StdError> for ErrorWrapper {
    fn as_mut(&mut self) -> &mut (dyn StdError + 'static) {
        match *self {
            ErrorWrapper::Ewmh(ref mut err) => err,
            ErrorWrapper::Utf8(ref mut err) => err,
            ErrorWrapper::Connect(ref mut err) => err,
            ErrorWrapper::Connection(ref mut err) => err,
            ErrorWrapper::Reply(ref mut err) => err,
        }
    }
}

impl From<EwmhError> for ErrorWrapper {
    fn from(err: EwmhError) -> ErrorWrapper {
        ErrorWrapper::Ewmh(err)
    }
}

impl From<std::str::Utf8Error> for ErrorWrapper {
    fn from(err: std::str::Utf8Error) -> ErrorWrapper {
        ErrorWrapper::Utf8(err)
    }
}

// x11rb errors
//--------------------------------------------------------------------------------------------------
impl From<x11rb::errors::ConnectError> for ErrorWrapper {
    fn from(err: x11rb::errors::ConnectError) -> ErrorWrapper {
        ErrorWrapper::Connect(err)
    }
}

impl From<x11rb::errors::ConnectionError> for ErrorWrapper {
    fn from(err: x11rb::errors::ConnectionError) -> ErrorWrapper {
        ErrorWrapper::Connection(err)
    }
}

impl From<x11rb::errors::ReplyError> for ErrorWrapper {
    fn from(err: x11rb::errors::ReplyError) -> ErrorWrapper {
        ErrorWrapper::Reply(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_not_found_is_recoverable() {
        let err: ErrorWrapper = EwmhError::PropertyNotFound("_NET_ACTIVE_WINDOW".to_owned()).into();
        assert!(err.is_property_not_found());
        assert!(err.is::<EwmhError>());
        assert_eq!(err.to_string(), "property _NET_ACTIVE_WINDOW was not found");
    }

    #[test]
    fn validation_errors_are_not_property_not_found() {
        let err: ErrorWrapper = EwmhError::UnknownStateAtom("_NET_WM_STATE_BOGUS".to_owned()).into();
        assert!(!err.is_property_not_found());
    }
}
