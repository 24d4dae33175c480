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
            /// The `Code` member of the error body.
            pub code: Option<String>,
            /// The `x-amzn-requestid` of the failed response.
            pub request_id: Option<String>,
        }

        impl $name {
            pub fn new(message: impl Into<String>) -> Self {
                $name {
                    message: Some(message.into()),
                    code: Some(stringify!($name).to_owned()),
                    request_id: None,
                }
            }

            pub fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }

            pub fn code(&self) -> Option<&str> {
                self.code.as_deref()
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
    /// The caller does not have permission to perform the action.
    AccessDeniedException
}

exception! {
    /// Internal server error.
    InternalException
}

exception! {
    /// The account is not subscribed to Security Hub, or the resource is not accessible.
    InvalidAccessException
}

exception! {
    InvalidInputException
}

exception! {
    /// The request was rejected because it would exceed a service limit or quota.
    LimitExceededException
}

exception! {
    /// The resource already exists.
    ResourceConflictException
}

exception! {
    ResourceNotFoundException
}

/// Every error a Security Hub operation can return.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    AccessDeniedException(AccessDeniedException),
    InternalException(InternalException),
    InvalidAccessException(InvalidAccessException),
    InvalidInputException(InvalidInputException),
    LimitExceededException(LimitExceededException),
    ResourceConflictException(ResourceConflictException),
    ResourceNotFoundException(ResourceNotFoundException),

    /// An error code this crate does not model.
    Unhandled(GenericError),
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::AccessDeniedException(_) => Some("AccessDeniedException"),
            Error::InternalException(_) => Some("InternalException"),
            Error::InvalidAccessException(_) => Some("InvalidAccessException"),
            Error::InvalidInputException(_) => Some("InvalidInputException"),
            Error::LimitExceededException(_) => Some("LimitExceededException"),
            Error::ResourceConflictException(_) => Some("ResourceConflictException"),
            Error::ResourceNotFoundException(_) => Some("ResourceNotFoundException"),
            Error::Unhandled(inner) => inner.code(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Error::AccessDeniedException(inner) => inner.message(),
            Error::InternalException(inner) => inner.message(),
            Error::InvalidAccessException(inner) => inner.message(),
            Error::InvalidInputException(inner) => inner.message(),
            Error::LimitExceededException(inner) => inner.message(),
            Error::ResourceConflictException(inner) => inner.message(),
            Error::ResourceNotFoundException(inner) => inner.message(),
            Error::Unhandled(inner) => inner.message(),
        }
    }

    /// The request id of the failed response, for modeled and unhandled errors alike.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::AccessDeniedException(inner) => inner.request_id(),
            Error::InternalException(inner) => inner.request_id(),
            Error::InvalidAccessException(inner) => inner.request_id(),
            Error::InvalidInputException(inner) => inner.request_id(),
            Error::LimitExceededException(inner) => inner.request_id(),
            Error::ResourceConflictException(inner) => inner.request_id(),
            Error::ResourceNotFoundException(inner) => inner.request_id(),
            Error::Unhandled(inner) => inner.request_id(),
        }
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(self, Error::AccessDeniedException(_))
    }

    pub fn is_internal_exception(&self) -> bool {
        matches!(self, Error::InternalException(_))
    }

    pub fn is_invalid_access_exception(&self) -> bool {
        matches!(self, Error::InvalidAccessException(_))
    }

    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(self, Error::InvalidInputException(_))
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(self, Error::LimitExceededException(_))
    }

    pub fn is_resource_conflict_exception(&self) -> bool {
        matches!(self, Error::ResourceConflictException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(self, Error::ResourceNotFoundException(_))
    }
}

impl From<GenericError> for Error {
    fn from(err: GenericError) -> Self {
        let message = err.message.clone();
        let code = err.code.clone();
        let request_id = err.request_id.clone();
        match err.code() {
            Some("AccessDeniedException") => {
                Error::AccessDeniedException(AccessDeniedException {
                    message,
                    code,
                    request_id,
                })
            }
            Some("InternalException") => {
                Error::InternalException(InternalException {
                    message,
                    code,
                    request_id,
                })
            }
            Some("InvalidAccessException") => {
                Error::InvalidAccessException(InvalidAccessException {
                    message,
                    code,
                    request_id,
                })
            }
            Some("InvalidInputException") => {
                Error::InvalidInputException(InvalidInputException {
                    message,
                    code,
                    request_id,
                })
            }
            Some("LimitExceededException") => {
                Error::LimitExceededException(LimitExceededException {
                    message,
                    code,
                    request_id,
                })
            }
            Some("ResourceConflictException") => {
                Error::ResourceConflictException(ResourceConflictException {
                    message,
                    code,
                    request_id,
                })
            }
            Some("ResourceNotFoundException") => {
                Error::ResourceNotFoundException(ResourceNotFoundException {
                    message,
                    code,
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
            Error::AccessDeniedException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InternalException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidAccessException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidInputException(inner) => std::fmt::Display::fmt(inner, f),
            Error::LimitExceededException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceConflictException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::AccessDeniedException(inner) => Some(inner),
            Error::InternalException(inner) => Some(inner),
            Error::InvalidAccessException(inner) => Some(inner),
            Error::InvalidInputException(inner) => Some(inner),
            Error::LimitExceededException(inner) => Some(inner),
            Error::ResourceConflictException(inner) => Some(inner),
            Error::ResourceNotFoundException(inner) => Some(inner),
            Error::Unhandled(inner) => Some(inner),
        }
    }
}
