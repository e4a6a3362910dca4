//! Decode one PEM-armored X.509 certificate and expose its fields as a
//! lazily-queried tree for viewers.
//!
//! [`decode`] turns raw file bytes into a [`CertificateRecord`];
//! [`FieldTree`] maps the record into identifier-addressable nodes that a
//! presentation layer expands one at a time. Trust is never evaluated: the
//! crate describes certificate structure, it does not validate chains,
//! signatures or revocation.

pub mod cert;
pub mod error;
mod record;
mod source;
mod tree;

pub use cert::certificate::Version;
pub use error::{DecodeError, Result};
pub use record::{CertificateRecord, DistinguishedNameRecord};
pub use source::{load_certificate, ByteSource, FileSource};
pub use tree::{FieldTree, ListRendering};

use cert::certificate::Certificate;
use der::Decode;

/// Decode the first PEM `CERTIFICATE` block in `pem` into a
/// [`CertificateRecord`].
///
/// Pure function over its input bytes: no I/O, no logging, no retries. A
/// failed decode returns an error and nothing else; partial records are
/// never produced.
pub fn decode(pem: &[u8]) -> Result<CertificateRecord> {
    let der_bytes = cert::pem::decode_certificate(pem)?;
    decode_der(&der_bytes)
}

/// Decode a bare DER-encoded certificate (no PEM armor).
pub fn decode_der(der_bytes: &[u8]) -> Result<CertificateRecord> {
    let cert = Certificate::from_der(der_bytes)?;
    CertificateRecord::from_certificate(&cert)
}

#[cfg(test)]
mod tests {
    use super::{decode, decode_der, DecodeError};

    const CERT_PEM: &[u8] = include_bytes!("../testdata/example.pem");
    const CERT_DER: &[u8] = include_bytes!("../testdata/example.der");

    #[test]
    fn pem_and_der_forms_decode_identically() {
        assert_eq!(decode(CERT_PEM).unwrap(), decode_der(CERT_DER).unwrap());
    }

    #[test]
    fn ecdsa_certificate_decodes() {
        let record = decode(include_bytes!("../testdata/p256.pem")).unwrap();
        assert_eq!(record.signature_algorithm, "ecdsa-with-SHA256");
        assert_eq!(record.public_key_algorithm, "id-ecPublicKey");
        assert_eq!(record.subject.common_name, "ecc.example");
        assert_eq!(record.serial_number, "42");
    }

    #[test]
    fn non_certificate_block_is_rejected() {
        let result = decode(include_bytes!("../testdata/private_key.pem"));
        match result {
            Err(DecodeError::WrongBlockType(label)) => assert_eq!(label, "PRIVATE KEY"),
            other => panic!("expected WrongBlockType, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn plain_text_has_no_pem_block() {
        assert!(matches!(
            decode(b"hello, certificates\n"),
            Err(DecodeError::NoPemBlock)
        ));
    }

    #[test]
    fn overrunning_length_is_malformed() {
        // Outer SEQUENCE claims 0x0400 bytes of content, buffer holds 4.
        let der_bytes = [0x30, 0x82, 0x04, 0x00, 0x30, 0x82, 0x01, 0x02];
        assert!(matches!(
            decode_der(&der_bytes),
            Err(DecodeError::MalformedDer(_))
        ));
    }

    #[test]
    fn truncated_certificate_is_malformed() {
        for cut in [1, CERT_DER.len() / 2, CERT_DER.len() - 1] {
            assert!(matches!(
                decode_der(&CERT_DER[..cut]),
                Err(DecodeError::MalformedDer(_))
            ));
        }
    }

    #[test]
    fn garbage_tag_is_malformed() {
        assert!(matches!(
            decode_der(&[0xFF, 0xFF, 0xFF, 0xFF]),
            Err(DecodeError::MalformedDer(_))
        ));
    }
}
