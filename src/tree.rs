//! Identifier-addressable field tree over a decoded certificate.
//!
//! The tree shape is a fixed schema declared in source; only leaf values
//! depend on the certificate. A presentation layer expands nodes one at a
//! time by asking for children and display values, so nothing beyond a flat
//! value map is ever materialized.

use std::collections::BTreeMap;

use crate::record::CertificateRecord;

/// Number of signature bytes rendered before truncating.
const SIGNATURE_PREFIX_LEN: usize = 10;

/// Marker appended to a truncated signature rendering.
const TRUNCATION_MARKER: &str = "...";

/// How multi-valued name attributes (organization, country) render as leaf
/// values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListRendering {
    /// Only the first value, or the empty string for an empty list.
    #[default]
    FirstOnly,
    /// All values, comma-separated.
    Full,
}

impl ListRendering {
    fn render(self, values: &[String]) -> String {
        match self {
            ListRendering::FirstOnly => values.first().cloned().unwrap_or_default(),
            ListRendering::Full => values.join(", "),
        }
    }
}

/// The static schema: every node identifier and its ordered children.
///
/// Identifiers not listed here are leaves (or unknown), with no children.
/// Because the table is a finite tree declared in source, traversal cannot
/// cycle and terminates within three levels of the root.
fn schema_children(id: &str) -> &'static [&'static str] {
    match id {
        "" => &["TBSCertificate", "AlgorithmIdentifier", "signatureValue"],
        "TBSCertificate" => &[
            "Version",
            "SerialNumber",
            "Signature",
            "Issuer",
            "Validity",
            "Subject",
        ],
        "Issuer" => &["I-CommonName", "I-Organization", "I-Country"],
        "Subject" => &["S-CommonName", "S-Organization", "S-Country"],
        "Validity" => &["notBefore", "notAfter"],
        "AlgorithmIdentifier" => &["algorithm"],
        _ => &[],
    }
}

/// A navigable hierarchy of certificate fields.
///
/// Constructed once over a [`CertificateRecord`], which it owns; all queries
/// are read-only lookups, so shared references to the tree may be used from
/// multiple threads at once.
///
/// The `Signature` node displays the signature algorithm, since that is what
/// the TBSCertificate `signature` field holds. Viewers that showed the
/// public key algorithm under this label mislabeled the field; the public
/// key algorithm remains available as
/// [`CertificateRecord::public_key_algorithm`].
#[derive(Clone, Debug)]
pub struct FieldTree {
    record: CertificateRecord,
    values: BTreeMap<&'static str, String>,
}

impl FieldTree {
    /// Build the field tree with the default display policy
    /// ([`ListRendering::FirstOnly`]).
    pub fn new(record: CertificateRecord) -> Self {
        Self::with_list_rendering(record, ListRendering::default())
    }

    /// Build the field tree with an explicit list rendering policy.
    pub fn with_list_rendering(record: CertificateRecord, rendering: ListRendering) -> Self {
        let mut values = BTreeMap::new();

        values.insert("Version", record.version.number().to_string());
        values.insert("SerialNumber", record.serial_number.clone());
        values.insert("Signature", record.signature_algorithm.clone());

        values.insert("I-CommonName", record.issuer.common_name.clone());
        values.insert("I-Organization", rendering.render(&record.issuer.organization));
        values.insert("I-Country", rendering.render(&record.issuer.country));

        values.insert("S-CommonName", record.subject.common_name.clone());
        values.insert("S-Organization", rendering.render(&record.subject.organization));
        values.insert("S-Country", rendering.render(&record.subject.country));

        values.insert("notBefore", record.not_before.to_string());
        values.insert("notAfter", record.not_after.to_string());

        values.insert("algorithm", record.signature_algorithm.clone());
        values.insert("signatureValue", signature_prefix(&record.signature));

        Self { record, values }
    }

    /// Ordered child identifiers of `id`.
    ///
    /// Leaves and unknown identifiers alike have no children; asking for
    /// them is not an error, it simply expands to nothing.
    pub fn children_of(&self, id: &str) -> &'static [&'static str] {
        schema_children(id)
    }

    /// Whether `id` has children. Always agrees with [`Self::children_of`].
    pub fn is_expandable(&self, id: &str) -> bool {
        !self.children_of(id).is_empty()
    }

    /// Human-readable value of a leaf node, `None` for branches and unknown
    /// identifiers.
    pub fn display_value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// The underlying record, for consumers needing full, untruncated
    /// values.
    pub fn record(&self) -> &CertificateRecord {
        &self.record
    }
}

/// Uppercase hex of at most the first [`SIGNATURE_PREFIX_LEN`] bytes,
/// followed by the truncation marker. Keeps node labels bounded no matter
/// how large the signing key was.
fn signature_prefix(signature: &[u8]) -> String {
    let prefix_len = signature.len().min(SIGNATURE_PREFIX_LEN);
    let mut out = String::with_capacity(prefix_len * 2 + TRUNCATION_MARKER.len());
    for byte in &signature[..prefix_len] {
        out.push_str(&format!("{:02X}", byte));
    }
    out.push_str(TRUNCATION_MARKER);
    out
}

#[cfg(test)]
mod tests {
    use super::{FieldTree, ListRendering, SIGNATURE_PREFIX_LEN, TRUNCATION_MARKER};
    use crate::record::{CertificateRecord, DistinguishedNameRecord};
    use std::collections::BTreeSet;

    const CERT_PEM: &[u8] = include_bytes!("../testdata/example.pem");
    const RSA4096_PEM: &[u8] = include_bytes!("../testdata/rsa4096.pem");
    const NO_ORG_PEM: &[u8] = include_bytes!("../testdata/no_org.pem");

    fn tree(pem: &[u8]) -> FieldTree {
        FieldTree::new(crate::decode(pem).unwrap())
    }

    #[test]
    fn schema_is_a_tree_of_bounded_depth() {
        let tree = tree(CERT_PEM);
        let mut seen = BTreeSet::new();
        let mut level: Vec<&str> = vec![""];
        let mut depth = 0;

        while !level.is_empty() {
            assert!(depth <= 3, "expansion exceeded three levels");
            let mut next = Vec::new();
            for id in level {
                assert!(seen.insert(id), "identifier {:?} reachable twice", id);
                next.extend_from_slice(tree.children_of(id));
            }
            level = next;
            depth += 1;
        }

        // Root, 3 top-level nodes, 6 + 1 mid-level, 3 + 3 + 2 leaves.
        assert_eq!(seen.len(), 19);
    }

    #[test]
    fn expandability_matches_children() {
        let tree = tree(CERT_PEM);
        for id in [
            "",
            "TBSCertificate",
            "AlgorithmIdentifier",
            "signatureValue",
            "Issuer",
            "Subject",
            "Validity",
            "Version",
            "notBefore",
            "algorithm",
            "I-CommonName",
            "no-such-node",
        ] {
            assert_eq!(tree.is_expandable(id), !tree.children_of(id).is_empty());
        }
        assert!(!tree.is_expandable("no-such-node"));
        assert!(tree.children_of("no-such-node").is_empty());
    }

    #[test]
    fn queries_are_idempotent() {
        let tree = tree(CERT_PEM);
        for id in ["", "TBSCertificate", "S-Organization", "signatureValue"] {
            assert_eq!(tree.children_of(id), tree.children_of(id));
            assert_eq!(tree.display_value(id), tree.display_value(id));
        }
    }

    #[test]
    fn leaf_values_match_certificate() {
        let tree = tree(CERT_PEM);

        assert_eq!(tree.display_value("Version"), Some("3"));
        assert_eq!(
            tree.display_value("SerialNumber"),
            Some("01:23:45:67:89:AB:CD:EF")
        );
        assert_eq!(tree.display_value("Signature"), Some("sha256WithRSAEncryption"));
        assert_eq!(tree.display_value("algorithm"), Some("sha256WithRSAEncryption"));

        assert_eq!(tree.display_value("S-CommonName"), Some("Example Server"));
        assert_eq!(tree.display_value("S-Organization"), Some("Example Org"));
        assert_eq!(tree.display_value("S-Country"), Some("JP"));
        assert_eq!(tree.display_value("I-CommonName"), Some("Example Server"));

        let not_before = tree.display_value("notBefore").unwrap();
        let not_after = tree.display_value("notAfter").unwrap();
        assert!(not_before.starts_with("2024-01-01T00:00:00"));
        assert!(not_after.starts_with("2034-01-01T00:00:00"));
    }

    #[test]
    fn branches_and_unknown_ids_have_no_display_value() {
        let tree = tree(CERT_PEM);
        for id in ["", "TBSCertificate", "Issuer", "Subject", "Validity"] {
            assert_eq!(tree.display_value(id), None);
        }
        assert_eq!(tree.display_value("no-such-node"), None);
    }

    #[test]
    fn signature_rendering_is_bounded() {
        // First 10 signature bytes per `openssl x509 -text` for the fixture.
        assert_eq!(
            tree(CERT_PEM).display_value("signatureValue"),
            Some("1FF1BDC314B071FE2752...")
        );

        let max_len = 2 * SIGNATURE_PREFIX_LEN + TRUNCATION_MARKER.len();
        for pem in [CERT_PEM, RSA4096_PEM] {
            let model = tree(pem);
            let rendered = model.display_value("signatureValue").unwrap();
            assert!(rendered.len() <= max_len);
            assert!(rendered.ends_with(TRUNCATION_MARKER));
        }

        // The full bytes stay available on the record.
        assert_eq!(tree(RSA4096_PEM).record().signature.len(), 512);
    }

    #[test]
    fn empty_organization_renders_as_empty_string() {
        let tree = tree(NO_ORG_PEM);
        assert_eq!(tree.display_value("S-Organization"), Some(""));
        assert_eq!(tree.display_value("S-Country"), Some(""));
        assert_eq!(tree.display_value("S-CommonName"), Some("Lonely"));
    }

    #[test]
    fn full_list_rendering_joins_all_values() {
        let mut record = multi_org_record();
        let tree = FieldTree::with_list_rendering(record.clone(), ListRendering::Full);
        assert_eq!(tree.display_value("S-Organization"), Some("Alpha, Beta"));

        record.subject.organization.truncate(1);
        let tree = FieldTree::new(record);
        assert_eq!(tree.display_value("S-Organization"), Some("Alpha"));
    }

    #[test]
    fn short_signature_renders_without_panicking() {
        let mut record = multi_org_record();
        record.signature = vec![0xAB, 0xCD];
        let tree = FieldTree::new(record);
        assert_eq!(tree.display_value("signatureValue"), Some("ABCD..."));
    }

    fn multi_org_record() -> CertificateRecord {
        let record = crate::decode(CERT_PEM).unwrap();
        CertificateRecord {
            subject: DistinguishedNameRecord {
                organization: vec!["Alpha".to_owned(), "Beta".to_owned()],
                ..record.subject.clone()
            },
            ..record
        }
    }
}
