//! Types used in the library, for the moment limited to [errors](err).

pub mod err;
