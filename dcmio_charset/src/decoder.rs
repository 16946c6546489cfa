//! Defines the [`Decoder`] type that turns raw string bytes into native
//! UTF-8 strings, and its resolution from a canonical encoding.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::{CanonicalEncoding, CharsetError};

/// A stateless decoder that converts bytes in one supported encoding into a
/// native UTF-8 string. Decoders are resolved once per specific character
/// set occurrence and are then invoked by the caller against the string data
/// elements that follow it.
///
/// The identity decoder is used for the default 7-bit repertoire and passes
/// bytes through without conversion.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoder(Option<&'static Encoding>);

impl Decoder {
  /// The identity decoder for the default 7-bit repertoire.
  ///
  pub const IDENTITY: Decoder = Decoder(None);

  /// Resolves a canonical encoding to its decoder. The default repertoire
  /// resolves to [`Decoder::IDENTITY`], and all other encodings resolve via
  /// their label in the WHATWG Encoding Standard's label registry.
  ///
  /// Returns a 'Resolver inconsistency' error when the label isn't present
  /// in the registry. The defined term table only hands out labels that are,
  /// so hitting this on a table-sourced encoding means the two have fallen
  /// out of lockstep.
  ///
  pub fn resolve(
    encoding: CanonicalEncoding,
  ) -> Result<Decoder, CharsetError> {
    match encoding {
      CanonicalEncoding::Default => Ok(Self::IDENTITY),

      CanonicalEncoding::Whatwg(label) => {
        match Encoding::for_label(label.as_bytes()) {
          Some(encoding) => Ok(Decoder(Some(encoding))),
          None => Err(CharsetError::new_resolver_inconsistency(label)),
        }
      }
    }
  }

  /// Returns whether this is the identity decoder.
  ///
  pub fn is_identity(&self) -> bool {
    self.0.is_none()
  }

  /// Returns the underlying encoding, or `None` for the identity decoder.
  ///
  pub fn encoding(&self) -> Option<&'static Encoding> {
    self.0
  }

  /// Decodes bytes into a native string. Malformed byte sequences are
  /// replaced with the U+FFFD character: �. This includes bytes above 0x7F
  /// fed to the identity decoder, as such bytes have no meaning in the
  /// default 7-bit repertoire.
  ///
  pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
    match self.0 {
      Some(encoding) => encoding.decode_without_bom_handling(bytes).0,
      None => String::from_utf8_lossy(bytes),
    }
  }
}
