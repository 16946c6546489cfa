//! Resolves the value of the *'(0008,0005) Specific Character Set)'* DICOM
//! data element into the text decoders used to convert raw string bytes into
//! native UTF-8 strings.
//!
//! A specific character set declares up to three character sets. For the
//! `PersonName` value representation this allows a name to carry three
//! parallel renderings, each potentially in a different encoding: alphabetic,
//! ideographic, and phonetic. Resolution turns the ordered list of declared
//! character set names into a [`CodingSystem`] holding one [`Decoder`] per
//! rendering. The caller is responsible for extracting and splitting the
//! multi-valued data element, and for invoking the decoders it receives
//! against string data elements that follow.
//!
//! ```
//! use dcmio_charset::CodingSystem;
//!
//! let coding_system =
//!   CodingSystem::from_declared_names(&["ISO 2022 IR 100", "ISO 2022 IR 87"])?;
//!
//! let name = coding_system
//!   .alphabetic
//!   .decode(&[0x4A, 0xE9, 0x72, 0xF4, 0x6D, 0x65]);
//!
//! assert_eq!(name, "Jérôme");
//! # Ok::<(), dcmio_charset::CharsetError>(())
//! ```

mod canonical_encoding;
mod charset_error;
mod coding_system;
mod decoder;
pub mod defined_terms;

pub use canonical_encoding::CanonicalEncoding;
pub use charset_error::CharsetError;
pub use coding_system::{CodingSystem, CodingSystemRole};
pub use decoder::Decoder;
