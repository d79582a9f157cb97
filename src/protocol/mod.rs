//! Textual form of the viewer protocol.
//!
//! [`format`] turns semantic values into wire tokens, [`line`] assembles one command line with the
//! sparse `key=value` option encoding.

pub(crate) mod format;
pub(crate) mod line;
