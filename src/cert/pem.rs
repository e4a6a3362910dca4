//! PEM block discovery and armor removal.
//!
//! `pem-rfc7468` alone cannot tell "this input has no PEM block at all" apart
//! from "this block is damaged", and it has no notion of a block of the wrong
//! type. The scanner below locates the first encapsulation boundary and
//! checks its type label first, then hands the framed block to the strict
//! RFC 7468 decoder.

use pem_rfc7468::PemLabel;

use super::certificate::Certificate;
use crate::error::{DecodeError, Result};

const PRE_BOUNDARY: &str = "-----BEGIN ";
const POST_BOUNDARY: &str = "-----END ";
const BOUNDARY_TAIL: &str = "-----";

/// A PEM block located inside a larger byte stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PemBlock<'a> {
    /// The type label between `BEGIN` and the closing dashes.
    pub label: &'a str,
    /// The full block, pre-encapsulation boundary through post-encapsulation
    /// boundary inclusive.
    pub text: &'a [u8],
}

/// Locate the first PEM block in `input`, regardless of its type label.
///
/// Returns `None` when the input carries no `-----BEGIN` boundary, or when
/// the boundary is too mangled to recover a type label. The scan works on
/// raw bytes, so binary content surrounding the block (a concatenated DER
/// blob, stray control characters) does not hide it; only the block itself
/// must be text.
pub fn first_block(input: &[u8]) -> Option<PemBlock<'_>> {
    let begin = find(input, PRE_BOUNDARY.as_bytes())?;
    let label_start = begin + PRE_BOUNDARY.len();
    let label_len = find(&input[label_start..], BOUNDARY_TAIL.as_bytes())?;
    let label = core::str::from_utf8(&input[label_start..label_start + label_len]).ok()?;

    let post = format!("{}{}{}", POST_BOUNDARY, label, BOUNDARY_TAIL);
    let end = find(&input[begin..], post.as_bytes())? + begin + post.len();

    Some(PemBlock {
        label,
        text: &input[begin..end],
    })
}

/// Position of the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Strip PEM armor from the first block of `input`, which must be of type
/// `CERTIFICATE`, and return the encapsulated DER bytes.
///
/// The first block decides the outcome: a non-certificate first block is an
/// error, never skipped in favor of a later block.
pub fn decode_certificate(input: &[u8]) -> Result<Vec<u8>> {
    match first_block(input) {
        None => Err(DecodeError::NoPemBlock),
        Some(block) if block.label != Certificate::PEM_LABEL => {
            Err(DecodeError::WrongBlockType(block.label.to_owned()))
        }
        Some(block) => {
            let (_, der_bytes) = pem_rfc7468::decode_vec(block.text)?;
            Ok(der_bytes)
        }
    }
}
