//! Utilities for working with synchsafe integers and unsynchronised content
//!
//! A synchsafe integer only stores data in the low 7 bits of every byte, so the encoded form can
//! never contain a `0xFF` followed by a byte with its MSB set (which an MPEG decoder would read as a
//! frame sync).
//!
//! Unsynchronisation is the same idea applied to arbitrary data: the encoder inserts a `0x00` after
//! every `0xFF` that could start a false sync.

use crate::config::UnsynchronisationScheme;

/// The largest value representable by a 4 byte synchsafe integer
pub const MAX_SYNCHSAFE_U32: u32 = 0x0FFF_FFFF;

const SYNCHSAFE_BYTE_MASK: u32 = 0x7F;

/// An integer that can be decoded from its synchsafe variant
pub trait SynchsafeInteger: Sized {
	/// Unsynchronise a synchsafe integer
	///
	/// The most significant bit of every byte is ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::util::synchsafe::SynchsafeInteger;
	///
	/// let synch_number = 0b01111111_01111111_01111111_01111111_u32;
	/// assert_eq!(synch_number.unsynch(), 0xFFF_FFFF);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn unsynch(self) -> Self {
		(self & SYNCHSAFE_BYTE_MASK)
			| ((self >> 1) & (SYNCHSAFE_BYTE_MASK << 7))
			| ((self >> 2) & (SYNCHSAFE_BYTE_MASK << 14))
			| ((self >> 3) & (SYNCHSAFE_BYTE_MASK << 21))
	}
}

/// Decode a 4 byte, big endian synchsafe integer
///
/// The result is always <= [`MAX_SYNCHSAFE_U32`].
///
/// # Examples
///
/// ```rust
/// use id3v2_decode::unpacked_size;
///
/// assert_eq!(unpacked_size([0, 4, 62, 25]), 25 + 62 * 128 + 4 * 128 * 128);
/// ```
pub fn unpacked_size(bytes: [u8; 4]) -> u32 {
	u32::from_be_bytes(bytes).unsynch()
}

/// Remove every null byte from `content`, regardless of its position
///
/// # Examples
///
/// ```rust
/// use id3v2_decode::util::synchsafe::strip_zero_bytes;
///
/// assert_eq!(strip_zero_bytes(&[255, 0, 255]), [255, 255]);
/// assert!(strip_zero_bytes(&[0]).is_empty());
/// ```
pub fn strip_zero_bytes(content: &[u8]) -> Vec<u8> {
	content.iter().copied().filter(|b| *b != 0).collect()
}

/// Remove every `0x00` that directly follows a `0xFF`
///
/// A `0x00` that follows a *removed* `0x00` is kept, so `[0xFF, 0x00, 0x00]` becomes `[0xFF, 0x00]`.
///
/// # Examples
///
/// ```rust
/// use id3v2_decode::util::synchsafe::resynchronise;
///
/// // The content has two `0xFF 0x00` pairs, which will be removed
/// let content = [0xFF, 0x00, 0x1A, 0xFF, 0x00, 0x15];
/// assert_eq!(resynchronise(&content), [0xFF, 0x1A, 0xFF, 0x15]);
/// ```
pub fn resynchronise(content: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(content.len());

	let mut encountered_ff = false;
	for &byte in content {
		if encountered_ff {
			encountered_ff = false;

			// Only skip the byte if this is valid unsynchronisation
			if byte == 0 {
				continue;
			}
		}

		out.push(byte);

		if byte == 0xFF {
			encountered_ff = true;
		}
	}

	out
}

pub(crate) fn reverse_unsynchronisation(
	content: &[u8],
	scheme: UnsynchronisationScheme,
) -> Vec<u8> {
	match scheme {
		UnsynchronisationScheme::StripAllZeros => strip_zero_bytes(content),
		UnsynchronisationScheme::Standard => resynchronise(content),
	}
}
