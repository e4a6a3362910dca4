use core::fmt;
use std::io;

/// An error type covering every way a certificate decode can fail.
///
/// A failed decode is terminal: no partial [`CertificateRecord`] is ever
/// produced, and the caller is expected to surface the error as-is.
///
/// [`CertificateRecord`]: crate::CertificateRecord
#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// The byte source could not be read.
    Io(io::Error),

    /// The input contains no PEM encapsulation boundary at all.
    NoPemBlock,

    /// The first PEM block carries a type label other than `CERTIFICATE`.
    ///
    /// The offending label is preserved for diagnostics. Non-certificate
    /// blocks are rejected rather than skipped, so a file whose first block
    /// is e.g. a private key fails loudly instead of silently loading a
    /// later block.
    WrongBlockType(String),

    /// The DER payload is not a well-formed X.509 certificate.
    ///
    /// Covers truncated or overrunning lengths, invalid tags, and
    /// distinguished names that do not parse as an RDNSequence.
    MalformedDer(der::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(err) => write!(f, "read error: {}", err),
            DecodeError::NoPemBlock => write!(f, "no PEM block found in input"),
            DecodeError::WrongBlockType(label) => {
                write!(f, "expected a CERTIFICATE block, found {:?}", label)
            }
            DecodeError::MalformedDer(err) => write!(f, "malformed certificate: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(err) => Some(err),
            DecodeError::MalformedDer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> DecodeError {
        DecodeError::Io(err)
    }
}

impl From<der::Error> for DecodeError {
    fn from(err: der::Error) -> DecodeError {
        DecodeError::MalformedDer(err)
    }
}

impl From<pem_rfc7468::Error> for DecodeError {
    fn from(_: pem_rfc7468::Error) -> DecodeError {
        // Armor-level corruption (bad base64, missing post-encapsulation
        // boundary) is reported through the same structural error as DER
        // violations.
        DecodeError::MalformedDer(der::ErrorKind::Failed.into())
    }
}

/// Result type for decode operations.
pub type Result<T> = core::result::Result<T, DecodeError>;
