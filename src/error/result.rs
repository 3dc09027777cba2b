//! Result alias for backend calls.

use super::ClientError;

pub type ClientResult<T> = Result<T, ClientError>;
