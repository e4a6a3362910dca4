//! X.509 certificate decoding.
//!
//! This module provides types and functions for parsing X.509 certificates
//! from their standard PEM/DER file form.
//!
//! ## Modules
//!
//! - [`certificate`]: X.509 certificate structure parsing
//! - [`time`]: Validity period and timestamp handling
//! - [`name`]: X.500 Distinguished Name support
//! - [`attr`]: X.509 attribute types
//! - [`serial_number`]: Certificate serial number handling
//! - [`pem`]: PEM armor discovery and decoding

pub mod attr;
pub mod certificate;
mod macros;
pub mod name;
pub mod pem;
pub mod serial_number;
pub mod time;
