//! Name-related definitions as defined in X.501 (and updated by RFC 5280).

use crate::impl_newtype;

use super::attr::{AttributeType, AttributeTypeAndValue};
use const_oid::db::rfc4519;
use der::asn1::SetOfVec;

/// X.501 Name as defined in [RFC 5280 Section 4.1.2.4]. X.501 Name is used to represent distinguished names.
///
/// ```text
/// Name ::= CHOICE { rdnSequence  RDNSequence }
/// ```
///
/// [RFC 5280 Section 4.1.2.4]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.4
pub type Name<'a> = RdnSequence<'a>;

/// X.501 RDNSequence as defined in [RFC 5280 Section 4.1.2.4].
///
/// ```text
/// RDNSequence ::= SEQUENCE OF RelativeDistinguishedName
/// ```
///
/// [RFC 5280 Section 4.1.2.4]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.4
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RdnSequence<'a>(pub Vec<RelativeDistinguishedName<'a>>);

impl<'a> RdnSequence<'a> {
    /// Is this [`RdnSequence`] empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over every [`AttributeTypeAndValue`] in RDN order.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeTypeAndValue<'a>> {
        self.0.iter().flat_map(|rdn| rdn.0.iter())
    }

    /// The first string value of the given attribute type, if present.
    pub fn attribute(&self, oid: AttributeType) -> Option<&'a str> {
        self.attributes()
            .filter(|atv| atv.oid == oid)
            .find_map(|atv| atv.value_str())
    }

    /// All string values of the given attribute type, in RDN order.
    pub fn attribute_values(&self, oid: AttributeType) -> Vec<String> {
        self.attributes()
            .filter(|atv| atv.oid == oid)
            .filter_map(|atv| atv.value_str())
            .map(str::to_owned)
            .collect()
    }

    /// The commonName attribute, or `None` when the name carries none.
    pub fn common_name(&self) -> Option<&'a str> {
        self.attribute(rfc4519::CN)
    }

    /// Every organizationName attribute value.
    pub fn organization(&self) -> Vec<String> {
        self.attribute_values(rfc4519::O)
    }

    /// Every countryName attribute value.
    pub fn country(&self) -> Vec<String> {
        self.attribute_values(rfc4519::C)
    }
}

impl_newtype!(RdnSequence<'a>, Vec<RelativeDistinguishedName<'a>>);

/// X.501 DistinguishedName as defined in [RFC 5280 Section 4.1.2.4].
///
/// ```text
/// DistinguishedName ::=   RDNSequence
/// ```
///
/// [RFC 5280 Section 4.1.2.4]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.4
pub type DistinguishedName<'a> = RdnSequence<'a>;

/// RelativeDistinguishedName as defined in [RFC 5280 Section 4.1.2.4].
///
/// ```text
/// RelativeDistinguishedName ::= SET SIZE (1..MAX) OF AttributeTypeAndValue
/// ```
///
/// [RFC 5280 Section 4.1.2.4]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.4
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelativeDistinguishedName<'a>(pub SetOfVec<AttributeTypeAndValue<'a>>);

impl_newtype!(
    RelativeDistinguishedName<'a>,
    SetOfVec<AttributeTypeAndValue<'a>>
);
