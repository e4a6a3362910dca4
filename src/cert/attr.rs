//! Attribute-related definitions as defined in X.501 (and updated by RFC 5280).

use der::asn1::{AnyRef, Ia5StringRef, ObjectIdentifier, PrintableStringRef, Utf8StringRef};
use der::{Sequence, ValueOrd};

/// X.501 `AttributeType` as defined in [RFC 5280 Appendix A.1].
///
/// ```text
/// AttributeType           ::= OBJECT IDENTIFIER
/// ```
///
/// [RFC 5280 Appendix A.1]: https://datatracker.ietf.org/doc/html/rfc5280#appendix-A.1
pub type AttributeType = ObjectIdentifier;

/// X.501 `AttributeValue` as defined in [RFC 5280 Appendix A.1].
///
/// ```text
/// AttributeValue          ::= ANY
/// ```
///
/// [RFC 5280 Appendix A.1]: https://datatracker.ietf.org/doc/html/rfc5280#appendix-A.1
pub type AttributeValue<'a> = AnyRef<'a>;

/// X.501 `AttributeTypeAndValue` as defined in [RFC 5280 Appendix A.1].
///
/// ```text
/// AttributeTypeAndValue ::= SEQUENCE {
///   type     AttributeType,
///   value    AttributeValue
/// }
/// ```
///
/// [RFC 5280 Appendix A.1]: https://datatracker.ietf.org/doc/html/rfc5280#appendix-A.1
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Sequence, ValueOrd)]
pub struct AttributeTypeAndValue<'a> {
    pub oid: AttributeType,
    pub value: AnyRef<'a>,
}

impl<'a> AttributeTypeAndValue<'a> {
    /// Extract the attribute value as a string, if it uses one of the
    /// DirectoryString encodings found in practice (PrintableString,
    /// UTF8String, IA5String).
    ///
    /// Returns `None` for other value types rather than failing; a rare
    /// TeletexString attribute simply contributes no value.
    pub fn value_str(&self) -> Option<&'a str> {
        if let Ok(s) = PrintableStringRef::try_from(self.value) {
            Some(s.as_str())
        } else if let Ok(s) = Utf8StringRef::try_from(self.value) {
            Some(s.as_str())
        } else if let Ok(s) = Ia5StringRef::try_from(self.value) {
            Some(s.as_str())
        } else {
            None
        }
    }
}
