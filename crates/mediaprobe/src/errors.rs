use std::borrow::Cow;

#[derive(Debug, Clone, derive_more::Display, derive_more::IsVariant)]
enum ErrorPayload {
    #[display(fmt = "MediaInfo could not be initialized: {}", _0)]
    InitializationFailure(Cow<'static, str>),

    #[display(fmt = "Invalid argument: {}", _0)]
    InvalidArgument(Cow<'static, str>),

    #[display(fmt = "MediaInfo can't open {}", _0)]
    OpenError(Cow<'static, str>),

    #[display(fmt = "This handle already has an open media source")]
    AlreadyOpen,
}

#[derive(thiserror::Error, Debug)]
#[error("{payload}")]
pub struct Error {
    payload: ErrorPayload,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn initialization<T>(msg: T) -> Error
    where
        Cow<'static, str>: From<T>,
    {
        Error {
            payload: ErrorPayload::InitializationFailure(msg.into()),
        }
    }

    pub(crate) fn invalid_argument<T>(msg: T) -> Error
    where
        Cow<'static, str>: From<T>,
    {
        Error {
            payload: ErrorPayload::InvalidArgument(msg.into()),
        }
    }

    pub(crate) fn open<T>(what: T) -> Error
    where
        Cow<'static, str>: From<T>,
    {
        Error {
            payload: ErrorPayload::OpenError(what.into()),
        }
    }

    pub(crate) fn already_open() -> Error {
        Error {
            payload: ErrorPayload::AlreadyOpen,
        }
    }

    pub(crate) fn clone_internal(&self) -> Self {
        Self {
            payload: self.payload.clone(),
        }
    }

    /// The native library could not be loaded, or refused to allocate a handle.
    ///
    /// Nothing else in this crate can work after this; it is not worth retrying.
    pub fn is_initialization_failure(&self) -> bool {
        self.payload.is_initialization_failure()
    }

    /// The caller passed something which cannot be handed to the native library, e.g. an empty buffer.
    pub fn is_invalid_argument(&self) -> bool {
        self.payload.is_invalid_argument()
    }

    /// The native library could not open the file or buffer.
    ///
    /// MediaInfo does not say why: a missing file and an unsupported format look the same.
    pub fn is_open_error(&self) -> bool {
        self.payload.is_open_error()
    }

    /// The handle already has a media source open; make a new handle for another one.
    pub fn is_already_open(&self) -> bool {
        self.payload.is_already_open()
    }
}
