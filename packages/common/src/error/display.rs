//! Display, conversion and `std::error::Error` implementations

use super::types::{Error, ErrorKind};
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.kind)?;

        if let Some(context) = &self.inner.context {
            write!(f, ": {context}")?;
        }

        // Walk the whole chain so a fatal abort message carries every cause
        let mut cause = self.inner.source.as_deref().map(|e| e as &dyn std::error::Error);
        while let Some(err) = cause {
            write!(f, "\nCaused by: {err}")?;
            cause = err.source();
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl PartialEq<ErrorKind> for Error {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind() == other
    }
}
