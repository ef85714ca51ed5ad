use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    /// The backend answered but reported a failure (`success: false`).
    #[error("backend error: {0}")]
    Api(String),
    #[error("can't search an empty string")]
    EmptyQuery,
    #[error("system error: {0}")]
    System(#[from] SystemError),
}

/// Wraps the transport error types, which differ between the wasm fetch path
/// and the server-side fetch path.
#[derive(Clone, Debug)]
pub enum SystemError {
    #[cfg(feature = "ssr")]
    Reqwest(Rc<reqwest::Error>),
    #[cfg(not(feature = "ssr"))]
    Gloo(Rc<gloo_net::Error>),
    Json(Rc<serde_json::Error>),
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::Reqwest(Rc::new(value))
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Gloo(Rc::new(value))
    }
}

impl From<serde_json::Error> for SystemError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(Rc::new(value))
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "ssr")]
            SystemError::Reqwest(reqwest) => write!(f, "{}", reqwest),
            #[cfg(not(feature = "ssr"))]
            SystemError::Gloo(gloo) => write!(f, "{}", gloo),
            SystemError::Json(json) => write!(f, "{}", json),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            #[cfg(feature = "ssr")]
            SystemError::Reqwest(reqwest) => Some(reqwest.as_ref()),
            #[cfg(not(feature = "ssr"))]
            SystemError::Gloo(gloo) => Some(gloo.as_ref()),
            SystemError::Json(json) => Some(json.as_ref()),
        }
    }
}

pub(crate) type AppResult<T> = Result<T, AppError>;
