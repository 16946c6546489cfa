//! Defines the canonical identifiers for the byte-to-text encodings that
//! declared character set names resolve to.

/// Identifies one supported byte-to-text conversion scheme. This is the
/// intermediate value between a declared character set name and its
/// [`Decoder`](crate::Decoder): the defined term table maps names to
/// canonical encodings, and the decoder resolver turns a canonical encoding
/// into a usable decoder.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanonicalEncoding {
  /// The default 7-bit repertoire, i.e. ISO 646 / US-ASCII. Bytes are used
  /// as-is and no decoding is needed.
  Default,

  /// An encoding identified by a label in the WHATWG Encoding Standard's
  /// label registry. See <https://encoding.spec.whatwg.org/#names-and-labels>.
  Whatwg(&'static str),
}

impl std::fmt::Display for CanonicalEncoding {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      CanonicalEncoding::Default => write!(f, "default repertoire"),
      CanonicalEncoding::Whatwg(label) => write!(f, "{}", label),
    }
  }
}
