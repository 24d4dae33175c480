/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use sdk_http::GenericError;

macro_rules! exception {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            pub message: Option<String>,
            /// The `x-amzn-requestid` of the failed response.
            pub request_id: Option<String>,
        }

        impl $name {
            pub fn new(message: impl Into<String>) -> Self {
                $name {
                    message: Some(message.into()),
                    request_id: None,
                }
            }

            pub fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }

            pub fn request_id(&self) -> Option<&str> {
                self.request_id.as_deref()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($name))?;
                if let Some(inner_1) = &self.message {
                    write!(f, ": {}", inner_1)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}
    };
}

exception! {
    /// The operation failed because of a system problem, even though the request was valid.
    InternalErrorException
}

exception! {
    /// The parameters of the request were invalid.
    InvalidInputException
}

exception! {
    /// The operation failed because there is nothing to do or the operation was not possible,
    /// for example when the administrator account is already set.
    InvalidOperationException
}

exception! {
    /// The value of the `Type` parameter is invalid.
    InvalidTypeException
}

exception! {
    /// The operation exceeds a resource limit, for example the maximum number of policies.
    LimitExceededException
}

exception! {
    /// The specified resource was not found.
    ResourceNotFoundException
}

/// Every error a Firewall Manager operation can return.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    InternalErrorException(InternalErrorException),
    InvalidInputException(InvalidInputException),
    InvalidOperationException(InvalidOperationException),
    InvalidTypeException(InvalidTypeException),
    LimitExceededException(LimitExceededException),
    ResourceNotFoundException(ResourceNotFoundException),

    /// An error code this crate does not model.
    Unhandled(GenericError),
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::InternalErrorException(_) => Some("InternalErrorException"),
            Error::InvalidInputException(_) => Some("InvalidInputException"),
            Error::InvalidOperationException(_) => Some("InvalidOperationException"),
            Error::InvalidTypeException(_) => Some("InvalidTypeException"),
            Error::LimitExceededException(_) => Some("LimitExceededException"),
            Error::ResourceNotFoundException(_) => Some("ResourceNotFoundException"),
            Error::Unhandled(inner) => inner.code(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Error::InternalErrorException(inner) => inner.message(),
            Error::InvalidInputException(inner) => inner.message(),
            Error::InvalidOperationException(inner) => inner.message(),
            Error::InvalidTypeException(inner) => inner.message(),
            Error::LimitExceededException(inner) => inner.message(),
            Error::ResourceNotFoundException(inner) => inner.message(),
            Error::Unhandled(inner) => inner.message(),
        }
    }

    /// The request id of the failed response, for modeled and unhandled errors alike.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::InternalErrorException(inner) => inner.request_id(),
            Error::InvalidInputException(inner) => inner.request_id(),
            Error::InvalidOperationException(inner) => inner.request_id(),
            Error::InvalidTypeException(inner) => inner.request_id(),
            Error::LimitExceededException(inner) => inner.request_id(),
            Error::ResourceNotFoundException(inner) => inner.request_id(),
            Error::Unhandled(inner) => inner.request_id(),
        }
    }

    pub fn is_internal_error_exception(&self) -> bool {
        matches!(self, Error::InternalErrorException(_))
    }

    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(self, Error::InvalidInputException(_))
    }

    pub fn is_invalid_operation_exception(&self) -> bool {
        matches!(self, Error::InvalidOperationException(_))
    }

    pub fn is_invalid_type_exception(&self) -> bool {
        matches!(self, Error::InvalidTypeException(_))
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(self, Error::LimitExceededException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(self, Error::ResourceNotFoundException(_))
    }
}

impl From<GenericError> for Error {
    fn from(err: GenericError) -> Self {
        let message = err.message.clone();
        let request_id = err.request_id.clone();
        match err.code() {
            Some("InternalErrorException") => {
                Error::InternalErrorException(InternalErrorException {
                    message,
                    request_id,
                })
            }
            Some("InvalidInputException") => {
                Error::InvalidInputException(InvalidInputException {
                    message,
                    request_id,
                })
            }
            Some("InvalidOperationException") => {
                Error::InvalidOperationException(InvalidOperationException {
                    message,
                    request_id,
                })
            }
            Some("InvalidTypeException") => {
                Error::InvalidTypeException(InvalidTypeException {
                    message,
                    request_id,
                })
            }
            Some("LimitExceededException") => {
                Error::LimitExceededException(LimitExceededException {
                    message,
                    request_id,
                })
            }
            Some("ResourceNotFoundException") => {
                Error::ResourceNotFoundException(ResourceNotFoundException {
                    message,
                    request_id,
                })
            }
            _ => Error::Unhandled(err),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InternalErrorException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidInputException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidOperationException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidTypeException(inner) => std::fmt::Display::fmt(inner, f),
            Error::LimitExceededException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InternalErrorException(inner) => Some(inner),
            Error::InvalidInputException(inner) => Some(inner),
            Error::InvalidOperationException(inner) => Some(inner),
            Error::InvalidTypeException(inner) => Some(inner),
            Error::LimitExceededException(inner) => Some(inner),
            Error::ResourceNotFoundException(inner) => Some(inner),
            Error::Unhandled(inner) => Some(inner),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, InvalidOperationException};
    use sdk_http::GenericError;

    fn generic(code: &str, message: &str) -> GenericError {
        GenericError {
            code: Some(code.to_owned()),
            message: Some(message.to_owned()),
            request_id: None,
        }
    }

    #[test]
    fn modeled_codes() {
        let err = Error::from(generic("InvalidOperationException", "admin account already set"));
        assert!(err.is_invalid_operation_exception());
        assert_eq!(err.code(), Some("InvalidOperationException"));
        assert_eq!(err.message(), Some("admin account already set"));
        assert_eq!(
            err.to_string(),
            "InvalidOperationException: admin account already set"
        );
        match err {
            Error::InvalidOperationException(inner) => assert_eq!(
                inner,
                InvalidOperationException::new("admin account already set")
            ),
            other => panic!("unexpected variant {:?}", other),
        }
    }

    #[test]
    fn modeled_codes_keep_the_request_id() {
        let err = Error::from(GenericError {
            request_id: Some("req-42".to_owned()),
            ..generic("ResourceNotFoundException", "no such policy")
        });
        assert!(err.is_resource_not_found_exception());
        assert_eq!(err.request_id(), Some("req-42"));
        assert!(format!("{:?}", err).contains("req-42"));
        assert_eq!(Error::from(generic("InvalidTypeException", "m")).request_id(), None);
    }

    #[test]
    fn unmodeled_codes() {
        let err = Error::from(generic("ThrottlingException", "slow down"));
        assert!(matches!(err, Error::Unhandled(_)));
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.message(), Some("slow down"));
        assert!(!err.is_resource_not_found_exception());
    }

    #[test]
    fn exception_display_without_message() {
        assert_eq!(
            InvalidOperationException::default().to_string(),
            "InvalidOperationException"
        );
    }
}
