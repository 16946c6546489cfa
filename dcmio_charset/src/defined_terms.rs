//! Defines the mapping from the 'Defined Terms' accepted in a specific
//! character set to canonical encodings.

use crate::canonical_encoding::CanonicalEncoding;

/// A single entry in the defined term table: the exact term as it appears in
/// a *'(0008,0005) Specific Character Set)'* value, a human-readable
/// description, and the canonical encoding the term resolves to.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefinedTerm {
  pub defined_term: &'static str,
  pub description: &'static str,
  pub encoding: CanonicalEncoding,
}

/// The list of all recognized defined terms, in the order in which they
/// appear in the DICOM standard: the default repertoire, single-byte
/// character sets, multi-byte character sets with code extensions, then
/// multi-byte character sets without code extensions.
///
/// Where a character set has both an `ISO_IR` and an `ISO 2022 IR` defined
/// term the two are listed together and resolve to the same encoding.
///
pub const DEFINED_TERMS: [DefinedTerm; 31] = [
  //
  // The default repertoire. The `ISO 2022 IR 6` code extension variant is
  // resolved as Latin-1, a superset of the repertoire's 7-bit codes.
  //
  DefinedTerm {
    defined_term: "ISO_IR 6",
    description: "Default repertoire",
    encoding: CanonicalEncoding::Default,
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 6",
    description: "Default repertoire",
    encoding: CanonicalEncoding::Whatwg("iso-8859-1"),
  },
  //
  // Single-byte character sets.
  //
  DefinedTerm {
    defined_term: "ISO_IR 100",
    description: "Latin alphabet No. 1",
    encoding: CanonicalEncoding::Whatwg("iso-8859-1"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 100",
    description: "Latin alphabet No. 1",
    encoding: CanonicalEncoding::Whatwg("iso-8859-1"),
  },
  DefinedTerm {
    defined_term: "ISO_IR 101",
    description: "Latin alphabet No. 2",
    encoding: CanonicalEncoding::Whatwg("iso-8859-2"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 101",
    description: "Latin alphabet No. 2",
    encoding: CanonicalEncoding::Whatwg("iso-8859-2"),
  },
  DefinedTerm {
    defined_term: "ISO_IR 109",
    description: "Latin alphabet No. 3",
    encoding: CanonicalEncoding::Whatwg("iso-8859-3"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 109",
    description: "Latin alphabet No. 3",
    encoding: CanonicalEncoding::Whatwg("iso-8859-3"),
  },
  DefinedTerm {
    defined_term: "ISO_IR 110",
    description: "Latin alphabet No. 4",
    encoding: CanonicalEncoding::Whatwg("iso-8859-4"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 110",
    description: "Latin alphabet No. 4",
    encoding: CanonicalEncoding::Whatwg("iso-8859-4"),
  },
  DefinedTerm {
    defined_term: "ISO_IR 144",
    description: "Cyrillic",
    encoding: CanonicalEncoding::Whatwg("iso-ir-144"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 144",
    description: "Cyrillic",
    encoding: CanonicalEncoding::Whatwg("iso-ir-144"),
  },
  DefinedTerm {
    defined_term: "ISO_IR 127",
    description: "Arabic",
    encoding: CanonicalEncoding::Whatwg("iso-ir-127"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 127",
    description: "Arabic",
    encoding: CanonicalEncoding::Whatwg("iso-ir-127"),
  },
  DefinedTerm {
    defined_term: "ISO_IR 126",
    description: "Greek",
    encoding: CanonicalEncoding::Whatwg("iso-ir-126"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 126",
    description: "Greek",
    encoding: CanonicalEncoding::Whatwg("iso-ir-126"),
  },
  DefinedTerm {
    defined_term: "ISO_IR 138",
    description: "Hebrew",
    encoding: CanonicalEncoding::Whatwg("iso-ir-138"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 138",
    description: "Hebrew",
    encoding: CanonicalEncoding::Whatwg("iso-ir-138"),
  },
  DefinedTerm {
    defined_term: "ISO_IR 148",
    description: "Latin alphabet No. 5",
    encoding: CanonicalEncoding::Whatwg("iso-ir-148"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 148",
    description: "Latin alphabet No. 5",
    encoding: CanonicalEncoding::Whatwg("iso-ir-148"),
  },
  // TIS 620-2533 has no `iso-ir-166` label in the WHATWG registry, so the
  // `tis-620` label is used instead. Both identify ISO 8859-11.
  DefinedTerm {
    defined_term: "ISO_IR 166",
    description: "Thai",
    encoding: CanonicalEncoding::Whatwg("tis-620"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 166",
    description: "Thai",
    encoding: CanonicalEncoding::Whatwg("tis-620"),
  },
  DefinedTerm {
    defined_term: "ISO_IR 13",
    description: "Japanese",
    encoding: CanonicalEncoding::Whatwg("shift_jis"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 13",
    description: "Japanese",
    encoding: CanonicalEncoding::Whatwg("shift_jis"),
  },
  //
  // Multi-byte character sets with code extensions.
  //
  DefinedTerm {
    defined_term: "ISO 2022 IR 87",
    description: "Japanese",
    encoding: CanonicalEncoding::Whatwg("iso-2022-jp"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 159",
    description: "Japanese",
    encoding: CanonicalEncoding::Whatwg("iso-2022-jp"),
  },
  DefinedTerm {
    defined_term: "ISO 2022 IR 149",
    description: "Korean",
    encoding: CanonicalEncoding::Whatwg("euc-kr"),
  },
  // PS3.18 Annex D suggests ISO-2022-CN for this term, but the WHATWG
  // registry maps ISO-2022-CN to its replacement encoding, which turns
  // every decoded character into U+FFFD. PS3.5 Annex K documents GB 2312
  // data for ISO-IR 58, so that mapping is used here instead. This is a
  // judgment call rather than an authoritative mapping.
  DefinedTerm {
    defined_term: "ISO 2022 IR 58",
    description: "Simplified Chinese",
    encoding: CanonicalEncoding::Whatwg("gb2312"),
  },
  //
  // Multi-byte character sets without code extensions.
  //
  DefinedTerm {
    defined_term: "ISO_IR 192",
    description: "Unicode in UTF-8",
    encoding: CanonicalEncoding::Whatwg("utf-8"),
  },
  DefinedTerm {
    defined_term: "GB18030",
    description: "GB 18030",
    encoding: CanonicalEncoding::Whatwg("gb18030"),
  },
  DefinedTerm {
    defined_term: "GBK",
    description: "GBK",
    encoding: CanonicalEncoding::Whatwg("gbk"),
  },
];

/// Looks up the canonical encoding for a defined term. Matching is exact:
/// whitespace stripping, case folding, and substitution of common
/// non-conformant spellings are the responsibility of whatever extracted the
/// term from the data set.
///
/// Returns `None` when the term is not recognized.
///
pub fn lookup(defined_term: &str) -> Option<CanonicalEncoding> {
  DEFINED_TERMS
    .iter()
    .find(|entry| entry.defined_term == defined_term)
    .map(|entry| entry.encoding)
}
