//! Defines the [`CodingSystem`] type that holds the decoders resolved from a
//! specific character set, one per person name component group.

use crate::{CharsetError, Decoder, defined_terms};

/// The component group of a `PersonName` value that a decoder applies to.
/// The distinction matters mostly for Japanese names, where the three
/// component groups commonly use different character sets. For all other
/// value representations only the ideographic decoder is used.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodingSystemRole {
  /// The name written in (English) alphabets.
  Alphabetic,

  /// The name written in the native writing system, e.g. Kanji.
  Ideographic,

  /// The reading of the name, e.g. in Hiragana or Katakana.
  Phonetic,
}

/// The set of decoders resolved from a specific character set, governing how
/// string bytes in a data set are translated into native UTF-8 strings.
///
/// All three decoders are always populated. When a specific character set
/// declares fewer than three character sets the missing roles are filled by
/// replication, and when it declares none at all every role holds the
/// identity decoder. A coding system is immutable once built and can be
/// shared freely across threads.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodingSystem {
  pub alphabetic: Decoder,
  pub ideographic: Decoder,
  pub phonetic: Decoder,
}

impl CodingSystem {
  /// Resolves an ordered list of declared character set names, as extracted
  /// from a *'(0008,0005) Specific Character Set)'* value, into a coding
  /// system. The caller is responsible for splitting the multi-valued data
  /// element; names are matched exactly as passed.
  ///
  /// Resolution fails on the first name that has no defined term table
  /// entry, and no coding system is returned in that case. A specific
  /// character set that declares more than three names still has every name
  /// resolved, but only the first three are assigned to roles.
  ///
  pub fn from_declared_names(
    declared_names: &[&str],
  ) -> Result<Self, CharsetError> {
    let mut decoders = Vec::with_capacity(declared_names.len());

    for name in declared_names {
      let encoding = match defined_terms::lookup(name) {
        Some(encoding) => encoding,
        None => {
          return Err(CharsetError::new_unknown_character_set(
            (*name).to_string(),
          ));
        }
      };

      tracing::debug!(
        defined_term = *name,
        encoding = %encoding,
        "Resolved declared character set"
      );

      let decoder = Decoder::resolve(encoding)
        .map_err(|error| error.with_defined_term((*name).to_string()))?;

      decoders.push(decoder);
    }

    if decoders.len() > 3 {
      tracing::warn!(
        count = decoders.len(),
        "Specific character set declares more than three values, only the \
         first three are used"
      );
    }

    Ok(Self::from_decoders(&decoders))
  }

  /// Assigns an ordered list of decoders to the three roles of a coding
  /// system:
  ///
  /// | Decoders | Alphabetic | Ideographic | Phonetic |
  /// |----------|------------|-------------|----------|
  /// | (none)   | identity   | identity    | identity |
  /// | d0       | d0         | d0          | d0       |
  /// | d0, d1   | d0         | d1          | d1       |
  /// | d0, d1, d2 | d0       | d1          | d2       |
  ///
  /// The first decoder always governs the alphabetic rendering. A second
  /// decoder governs both the ideographic and phonetic renderings unless a
  /// third is present to separate them. Decoders past the third are ignored.
  ///
  pub fn from_decoders(decoders: &[Decoder]) -> Self {
    match decoders {
      [] => Self {
        alphabetic: Decoder::IDENTITY,
        ideographic: Decoder::IDENTITY,
        phonetic: Decoder::IDENTITY,
      },

      [d0] => Self {
        alphabetic: *d0,
        ideographic: *d0,
        phonetic: *d0,
      },

      [d0, d1] => Self {
        alphabetic: *d0,
        ideographic: *d1,
        phonetic: *d1,
      },

      [d0, d1, d2, ..] => Self {
        alphabetic: *d0,
        ideographic: *d1,
        phonetic: *d2,
      },
    }
  }

  /// Returns the decoder for a role.
  ///
  pub fn decoder(&self, role: CodingSystemRole) -> &Decoder {
    match role {
      CodingSystemRole::Alphabetic => &self.alphabetic,
      CodingSystemRole::Ideographic => &self.ideographic,
      CodingSystemRole::Phonetic => &self.phonetic,
    }
  }
}

impl Default for CodingSystem {
  /// Returns the coding system for the default 7-bit repertoire, with the
  /// identity decoder in every role.
  ///
  fn default() -> Self {
    Self::from_decoders(&[])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn from_declared_names_with_no_names_test() {
    let coding_system = CodingSystem::from_declared_names(&[]).unwrap();

    assert_eq!(coding_system.alphabetic, Decoder::IDENTITY);
    assert_eq!(coding_system.ideographic, Decoder::IDENTITY);
    assert_eq!(coding_system.phonetic, Decoder::IDENTITY);

    assert_eq!(coding_system, CodingSystem::default());
  }

  #[test]
  fn from_declared_names_with_one_name_test() {
    let coding_system =
      CodingSystem::from_declared_names(&["ISO 2022 IR 100"]).unwrap();

    assert_eq!(
      coding_system.alphabetic.encoding(),
      Some(encoding_rs::WINDOWS_1252)
    );
    assert_eq!(coding_system.ideographic, coding_system.alphabetic);
    assert_eq!(coding_system.phonetic, coding_system.alphabetic);
  }

  #[test]
  fn from_declared_names_with_two_names_test() {
    let coding_system = CodingSystem::from_declared_names(&[
      "ISO 2022 IR 100",
      "ISO 2022 IR 87",
    ])
    .unwrap();

    assert_eq!(
      coding_system.alphabetic.encoding(),
      Some(encoding_rs::WINDOWS_1252)
    );
    assert_eq!(
      coding_system.ideographic.encoding(),
      Some(encoding_rs::ISO_2022_JP)
    );
    assert_eq!(coding_system.phonetic, coding_system.ideographic);
  }

  #[test]
  fn from_declared_names_with_three_names_test() {
    let coding_system = CodingSystem::from_declared_names(&[
      "ISO_IR 100",
      "ISO 2022 IR 13",
      "ISO 2022 IR 159",
    ])
    .unwrap();

    assert_eq!(
      coding_system.alphabetic.encoding(),
      Some(encoding_rs::WINDOWS_1252)
    );
    assert_eq!(
      coding_system.ideographic.encoding(),
      Some(encoding_rs::SHIFT_JIS)
    );
    assert_eq!(
      coding_system.phonetic.encoding(),
      Some(encoding_rs::ISO_2022_JP)
    );
  }

  #[test]
  fn from_declared_names_with_utf_8_test() {
    let coding_system =
      CodingSystem::from_declared_names(&["ISO_IR 192"]).unwrap();

    assert_eq!(
      coding_system.alphabetic.encoding(),
      Some(encoding_rs::UTF_8)
    );
    assert_eq!(coding_system.ideographic, coding_system.alphabetic);
    assert_eq!(coding_system.phonetic, coding_system.alphabetic);
  }

  #[test]
  fn from_declared_names_with_unknown_name_test() {
    assert_eq!(
      CodingSystem::from_declared_names(&["ISO 2022 IR 999"]),
      Err(CharsetError::new_unknown_character_set(
        "ISO 2022 IR 999".to_string()
      ))
    );

    // The position of the unknown name doesn't matter
    let error = CodingSystem::from_declared_names(&[
      "ISO 2022 IR 100",
      "ISO 2022 IR 999",
    ])
    .unwrap_err();

    assert!(error.is_unknown_character_set());
    assert_eq!(error.defined_term(), Some("ISO 2022 IR 999"));
  }

  #[test]
  fn from_declared_names_with_more_than_three_names_test() {
    let coding_system = CodingSystem::from_declared_names(&[
      "ISO 2022 IR 100",
      "ISO 2022 IR 87",
      "ISO 2022 IR 159",
      "ISO 2022 IR 149",
    ])
    .unwrap();

    assert_eq!(
      coding_system,
      CodingSystem::from_declared_names(&[
        "ISO 2022 IR 100",
        "ISO 2022 IR 87",
        "ISO 2022 IR 159",
      ])
      .unwrap()
    );

    // Names past the third are ignored for role assignment but are still
    // required to resolve
    let error = CodingSystem::from_declared_names(&[
      "ISO 2022 IR 100",
      "ISO 2022 IR 87",
      "ISO 2022 IR 159",
      "ISO 2022 IR 999",
    ])
    .unwrap_err();

    assert_eq!(error.defined_term(), Some("ISO 2022 IR 999"));
  }

  #[test]
  fn from_declared_names_is_deterministic_test() {
    let declared_names = ["ISO 2022 IR 13", "ISO 2022 IR 87"];

    assert_eq!(
      CodingSystem::from_declared_names(&declared_names).unwrap(),
      CodingSystem::from_declared_names(&declared_names).unwrap()
    );
  }

  #[test]
  fn decoder_for_role_test() {
    let coding_system = CodingSystem::from_declared_names(&[
      "ISO_IR 100",
      "ISO 2022 IR 13",
      "ISO 2022 IR 159",
    ])
    .unwrap();

    assert_eq!(
      coding_system.decoder(CodingSystemRole::Alphabetic),
      &coding_system.alphabetic
    );
    assert_eq!(
      coding_system.decoder(CodingSystemRole::Ideographic),
      &coding_system.ideographic
    );
    assert_eq!(
      coding_system.decoder(CodingSystemRole::Phonetic),
      &coding_system.phonetic
    );
  }

  #[test]
  fn decodes_person_name_component_groups_test() {
    // "Yamada^Tarou" in romaji, Kanji via JIS X 0208 escape sequences, and
    // the component group separators decoded with the default repertoire
    let coding_system = CodingSystem::from_declared_names(&[
      "ISO 2022 IR 13",
      "ISO 2022 IR 87",
    ])
    .unwrap();

    assert_eq!(
      coding_system
        .alphabetic
        .decode(&[0xD4, 0xCF, 0xC0, 0xDE, 0x5E, 0xC0, 0xDB, 0xB3]),
      "ﾔﾏﾀﾞ^ﾀﾛｳ"
    );

    assert_eq!(
      coding_system.ideographic.decode(&[
        0x1B, 0x24, 0x42, 0x3B, 0x33, 0x45, 0x44, 0x1B, 0x28, 0x42, 0x5E,
        0x1B, 0x24, 0x42, 0x42, 0x40, 0x4F, 0x3A, 0x1B, 0x28, 0x42,
      ]),
      "山田^太郎"
    );
  }
}
