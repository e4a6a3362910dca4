//! X.501 time types as defined in RFC 5280.

use der::asn1::{GeneralizedTime, UtcTime};
use der::{Choice, DateTime, Sequence, ValueOrd};

/// X.501 `Time` as defined in [RFC 5280 Section 4.1.2.5].
///
/// Schema definition from [RFC 5280 Appendix A]:
///
/// ```text
/// Time ::= CHOICE {
///      utcTime        UTCTime,
///      generalTime    GeneralizedTime
/// }
/// ```
///
/// [RFC 5280 Section 4.1.2.5]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.5
/// [RFC 5280 Appendix A]: https://datatracker.ietf.org/doc/html/rfc5280#page-117
#[derive(Choice, Copy, Clone, Debug, Eq, PartialEq, ValueOrd)]
pub enum Time {
    /// Legacy UTC time (has 2-digit year, valid only through 2049).
    #[asn1(type = "UTCTime")]
    UtcTime(UtcTime),

    /// Modern [`GeneralizedTime`] encoding with 4-digit year.
    #[asn1(type = "GeneralizedTime")]
    GeneralTime(GeneralizedTime),
}

impl Time {
    /// The calendar date-time this value encodes.
    pub fn to_date_time(self) -> DateTime {
        match self {
            Time::UtcTime(t) => t.to_date_time(),
            Time::GeneralTime(t) => t.to_date_time(),
        }
    }
}

/// X.501 `Validity` as defined in [RFC 5280 Section 4.1.2.5].
///
/// ```text
/// Validity ::= SEQUENCE {
///     notBefore      Time,
///     notAfter       Time
/// }
/// ```
///
/// The pair is carried exactly as encoded. A certificate whose `notBefore`
/// lies after its `notAfter` decodes without complaint; judging the window
/// is a validation concern and out of scope here.
///
/// [RFC 5280 Section 4.1.2.5]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.5
#[derive(Copy, Clone, Debug, Eq, PartialEq, Sequence, ValueOrd)]
#[allow(missing_docs)]
pub struct Validity {
    pub not_before: Time,
    pub not_after: Time,
}

#[cfg(test)]
mod tests {
    use super::Time;
    use der::Decode;

    #[test]
    fn decode_utc_time() {
        // UTCTime "240101000000Z"
        let der_bytes = b"\x17\x0d240101000000Z";
        let time = Time::from_der(der_bytes).unwrap();
        let dt = time.to_date_time();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
    }

    #[test]
    fn decode_generalized_time() {
        // GeneralizedTime "20520101000000Z", beyond the UTCTime range
        let der_bytes = b"\x18\x0f20520101000000Z";
        let time = Time::from_der(der_bytes).unwrap();
        assert_eq!(time.to_date_time().year(), 2052);
    }
}
