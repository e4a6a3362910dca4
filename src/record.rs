//! Owned certificate record decoded from a single X.509 certificate.

use const_oid::db::DB;
use der::asn1::ObjectIdentifier;
use der::DateTime;

use crate::cert::certificate::{Certificate, Version};
use crate::cert::name::Name;
use crate::error::Result;

/// One distinguished name (issuer or subject), reduced to the attributes the
/// viewer describes.
///
/// `organization` and `country` are multi-valued in X.501 and are kept in
/// full here; truncation to a single value is a display policy applied by
/// the field tree, not a property of the record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistinguishedNameRecord {
    /// commonName, or empty when the name carries none.
    pub common_name: String,
    /// All organizationName values, in RDN order.
    pub organization: Vec<String>,
    /// All countryName values, in RDN order.
    pub country: Vec<String>,
}

impl DistinguishedNameRecord {
    fn from_name(name: &Name<'_>) -> Self {
        Self {
            common_name: name.common_name().unwrap_or_default().to_owned(),
            organization: name.organization(),
            country: name.country(),
        }
    }
}

/// The decoded certificate, immutable once constructed.
///
/// Every value is copied out of the DER parse, so the record stands on its
/// own and can be read concurrently without touching the input bytes again.
/// Validity timestamps are carried exactly as encoded; in particular a
/// `not_before` later than `not_after` is preserved, never corrected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateRecord {
    /// Certificate version (v1, v2 or v3).
    pub version: Version,
    /// Serial number magnitude as colon-separated uppercase hex.
    pub serial_number: String,
    /// Name of the signature algorithm, or its dotted OID when unknown.
    pub signature_algorithm: String,
    /// Name of the subject public key algorithm, or its dotted OID.
    pub public_key_algorithm: String,
    /// Issuer distinguished name.
    pub issuer: DistinguishedNameRecord,
    /// Subject distinguished name.
    pub subject: DistinguishedNameRecord,
    /// Start of the validity period, as encoded.
    pub not_before: DateTime,
    /// End of the validity period, as encoded.
    pub not_after: DateTime,
    /// Raw signature bytes, in full.
    pub signature: Vec<u8>,
}

impl CertificateRecord {
    /// Copy all viewer-relevant fields out of a parsed certificate.
    pub fn from_certificate(cert: &Certificate<'_>) -> Result<Self> {
        let tbs = &cert.tbs_certificate;

        Ok(Self {
            version: tbs.version,
            serial_number: tbs.serial_number.to_string(),
            signature_algorithm: algorithm_name(&tbs.signature.oid),
            public_key_algorithm: algorithm_name(&tbs.subject_public_key_info.algorithm.oid),
            issuer: DistinguishedNameRecord::from_name(&tbs.issuer),
            subject: DistinguishedNameRecord::from_name(&tbs.subject),
            not_before: tbs.validity.not_before.to_date_time(),
            not_after: tbs.validity.not_after.to_date_time(),
            signature: cert.signature.raw_bytes().to_vec(),
        })
    }
}

/// Look up a registered name for an algorithm OID, falling back to the
/// dotted-decimal form.
fn algorithm_name(oid: &ObjectIdentifier) -> String {
    match DB.by_oid(oid) {
        Some(name) => name.to_owned(),
        None => oid.to_string(),
    }
}
