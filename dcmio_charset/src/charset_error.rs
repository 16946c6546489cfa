//! Provides the [`CharsetError`] type that describes the errors that can
//! occur when resolving a specific character set.

use owo_colors::{OwoColorize, Stream::Stderr};

/// An error that occurred when resolving a specific character set into a
/// coding system. An error can be one of the following types:
///
/// 1. **Unknown character set**.
///
///    A declared character set name has no entry in the defined term table.
///    This occurs on data sets that declare a character set this library
///    does not support, and on malformed specific character set values.
///
/// 2. **Resolver inconsistency**.
///
///    A defined term resolved to a canonical encoding that has no decoder
///    implementation. The defined term table and the decoder resolver are
///    meant to be kept in lockstep, so this error indicates a defect rather
///    than bad input data. It is still reported to the caller as a normal
///    error so that a resolution failure can never take down an entire
///    parsing pipeline.
///
#[derive(Clone, Debug, PartialEq)]
pub struct CharsetError(RawCharsetError);

#[derive(Clone, Debug, PartialEq)]
enum RawCharsetError {
  UnknownCharacterSet {
    defined_term: String,
  },
  ResolverInconsistency {
    label: &'static str,
    defined_term: Option<String>,
  },
}

impl std::fmt::Display for CharsetError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let error = match &self.0 {
      RawCharsetError::UnknownCharacterSet { defined_term } => {
        format!("Unknown character set {:?}", defined_term)
      }
      RawCharsetError::ResolverInconsistency {
        label,
        defined_term: Some(defined_term),
      } => {
        format!(
          "No decoder for encoding {:?} required by character set {:?}",
          label, defined_term
        )
      }
      RawCharsetError::ResolverInconsistency {
        label,
        defined_term: None,
      } => {
        format!("No decoder for encoding {:?}", label)
      }
    };

    write!(f, "DICOM specific character set error: {}", error)
  }
}

impl CharsetError {
  /// Constructs a new 'Unknown character set' error for a declared name that
  /// has no entry in the defined term table.
  ///
  pub fn new_unknown_character_set(defined_term: String) -> Self {
    Self(RawCharsetError::UnknownCharacterSet { defined_term })
  }

  /// Constructs a new 'Resolver inconsistency' error for a canonical
  /// encoding that has no decoder implementation.
  ///
  pub fn new_resolver_inconsistency(label: &'static str) -> Self {
    Self(RawCharsetError::ResolverInconsistency {
      label,
      defined_term: None,
    })
  }

  /// Adds the declared character set name to an error. This indicates which
  /// entry of the specific character set failed to resolve, and should be
  /// included wherever possible to make troubleshooting easier.
  ///
  pub fn with_defined_term(self, defined_term: String) -> Self {
    match self.0 {
      RawCharsetError::UnknownCharacterSet { .. } => {
        Self(RawCharsetError::UnknownCharacterSet { defined_term })
      }
      RawCharsetError::ResolverInconsistency { label, .. } => {
        Self(RawCharsetError::ResolverInconsistency {
          label,
          defined_term: Some(defined_term),
        })
      }
    }
  }

  /// Returns the declared character set name that failed to resolve, if
  /// known.
  ///
  pub fn defined_term(&self) -> Option<&str> {
    match &self.0 {
      RawCharsetError::UnknownCharacterSet { defined_term } => {
        Some(defined_term)
      }
      RawCharsetError::ResolverInconsistency { defined_term, .. } => {
        defined_term.as_deref()
      }
    }
  }

  /// Returns whether an error is an 'Unknown character set' error.
  ///
  pub fn is_unknown_character_set(&self) -> bool {
    matches!(self.0, RawCharsetError::UnknownCharacterSet { .. })
  }

  /// Returns the name of an error as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match &self.0 {
      RawCharsetError::UnknownCharacterSet { .. } => "Unknown character set",
      RawCharsetError::ResolverInconsistency { .. } => {
        "Resolver inconsistency"
      }
    }
  }

  /// Returns lines of text that describe an error in a human-readable
  /// format.
  ///
  pub fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("DICOM specific character set error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    if let Some(defined_term) = self.defined_term() {
      lines.push(format!("  Character set: {}", defined_term));
    }

    if let RawCharsetError::ResolverInconsistency { label, .. } = &self.0 {
      lines.push(format!("  Encoding: {}", label));
    }

    lines
  }

  /// Prints details on an error to stderr. This will include all details and
  /// contextual information stored in the error.
  ///
  pub fn print(&self, task_description: &str) {
    eprintln!();
    eprintln!("{}", "-----".if_supports_color(Stderr, |text| text.red()));

    for line in self.to_lines(task_description) {
      eprintln!("{}", line.if_supports_color(Stderr, |text| text.red()));
    }

    eprintln!();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn display_test() {
    assert_eq!(
      CharsetError::new_unknown_character_set("ISO 2022 IR 999".to_string())
        .to_string(),
      "DICOM specific character set error: \
       Unknown character set \"ISO 2022 IR 999\""
    );

    assert_eq!(
      CharsetError::new_resolver_inconsistency("iso-2022-cn").to_string(),
      "DICOM specific character set error: \
       No decoder for encoding \"iso-2022-cn\""
    );

    assert_eq!(
      CharsetError::new_resolver_inconsistency("iso-2022-cn")
        .with_defined_term("ISO 2022 IR 58".to_string())
        .to_string(),
      "DICOM specific character set error: \
       No decoder for encoding \"iso-2022-cn\" required by character set \
       \"ISO 2022 IR 58\""
    );
  }

  #[test]
  fn to_lines_test() {
    assert_eq!(
      CharsetError::new_unknown_character_set("ISO 2022 IR 999".to_string())
        .to_lines("reading data set")
        .join("\n"),
      r#"DICOM specific character set error reading data set

  Error: Unknown character set
  Character set: ISO 2022 IR 999"#
    );

    assert_eq!(
      CharsetError::new_resolver_inconsistency("iso-2022-cn")
        .with_defined_term("ISO 2022 IR 58".to_string())
        .to_lines("reading data set")
        .join("\n"),
      r#"DICOM specific character set error reading data set

  Error: Resolver inconsistency
  Character set: ISO 2022 IR 58
  Encoding: iso-2022-cn"#
    );
  }

  #[test]
  fn defined_term_test() {
    assert_eq!(
      CharsetError::new_unknown_character_set("GB99999".to_string())
        .defined_term(),
      Some("GB99999")
    );

    assert_eq!(
      CharsetError::new_resolver_inconsistency("gb99999").defined_term(),
      None
    );
  }
}
