//! Error types for the toolkit.
//!
//! Almost everything in this crate fails soft: matching functions return
//! `false`, lookups return `None`, and a malformed mode line parses to the
//! empty [`ModeLine`](crate::mode::ModeLine). Wire input is untrusted and
//! continuous, so a bad mask or mode string is ordinary data, not an
//! exceptional condition. The one genuine error is a caller handing us a
//! casemapping name we do not recognize.

use thiserror::Error;

/// An explicitly supplied casemapping name was not recognized.
///
/// Returned by [`Casemapping::from_str`](crate::Casemapping) when an
/// ISUPPORT `CASEMAPPING` value is neither `ascii`, `rfc1459`, nor
/// `strict-rfc1459`. Carries the offending token.
///
/// Note that this error only exists for *explicit* values; every function
/// taking a [`Casemapping`](crate::Casemapping) directly has an
/// RFC 1459-defaulted convenience form that cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid casemapping: {0}")]
pub struct InvalidCasemapping(pub String);
