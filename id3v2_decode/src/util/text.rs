use crate::error::{ErrorKind, Id3v2Error, Result};
use crate::macros::err;

/// Byte order mark for big endian UTF-16
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// Byte order mark for little endian UTF-16
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_u8(3), Some(TextEncoding::UTF8));
	/// assert_eq!(TextEncoding::from_u8(4), None);
	/// ```
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}
}

/// The result of [`extract_null_terminated`]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NullTerminatedText {
	/// Everything before the terminator
	pub description: String,
	/// Everything after the terminator
	pub value: String,
	/// The byte order mark of a [`TextEncoding::UTF16`] payload
	pub bom: Option<[u8; 2]>,
}

/// Split an encoded `[encoding][description][terminator][value]` payload
///
/// This is the layout of frames such as `WXXX`. The terminator is a single `0x00` for
/// [`TextEncoding::Latin1`] and [`TextEncoding::UTF8`], and a `0x0000` code unit for
/// [`TextEncoding::UTF16`]. The value is decoded with the same encoding (and byte order) as the
/// description. If no terminator is found, the entire content is the description.
///
/// # Errors
///
/// * The payload is empty
/// * The encoding byte is not 0, 1, or 3
/// * The UTF-16 byte order mark is missing or invalid
/// * The UTF-16 text is invalid (invalid UTF-8 is replaced with U+FFFD instead)
///
/// # Examples
///
/// ```rust
/// use id3v2_decode::extract_null_terminated;
///
/// # fn main() -> id3v2_decode::error::Result<()> {
/// let extracted = extract_null_terminated(b"\x03Wat\x00ABC")?;
///
/// assert_eq!(extracted.description, "Wat");
/// assert_eq!(extracted.value, "ABC");
/// assert_eq!(extracted.bom, None);
/// # Ok(()) }
/// ```
pub fn extract_null_terminated(payload: &[u8]) -> Result<NullTerminatedText> {
	let Some((&encoding_byte, content)) = payload.split_first() else {
		err!(BadFrameLength);
	};

	match TextEncoding::from_u8(encoding_byte) {
		Some(TextEncoding::UTF16) => {
			let (bom, endianness, content) = split_bom(content)?;

			if content.len() % 2 != 0 {
				err!(TextDecode("UTF-16 string has an odd length"));
			}

			let terminator = content
				.chunks_exact(2)
				.position(|unit| unit == [0, 0])
				.map(|unit_idx| unit_idx * 2);

			let (description, value) = match terminator {
				Some(pos) => (&content[..pos], &content[pos + 2..]),
				None => (content, &[][..]),
			};

			Ok(NullTerminatedText {
				description: utf16_decode_bytes(description, endianness)?,
				value: utf16_decode_bytes(value, endianness)?,
				bom: Some(bom),
			})
		},
		Some(encoding @ (TextEncoding::Latin1 | TextEncoding::UTF8)) => {
			let (description, value) = match content.iter().position(|b| *b == 0) {
				Some(pos) => (&content[..pos], &content[pos + 1..]),
				None => (content, &[][..]),
			};

			let decode = |bytes: &[u8]| match encoding {
				TextEncoding::Latin1 => latin1_decode(bytes),
				_ => utf8_decode(bytes),
			};

			Ok(NullTerminatedText {
				description: decode(description),
				value: decode(value),
				bom: None,
			})
		},
		_ => err!(UnsupportedEncoding(encoding_byte)),
	}
}

/// Split a byte order mark off of UTF-16 content
pub(crate) fn split_bom(content: &[u8]) -> Result<([u8; 2], fn([u8; 2]) -> u16, &[u8])> {
	let [b1, b2, rest @ ..] = content else {
		err!(TextDecode("UTF-16 string has an invalid length (< 2)"));
	};

	let bom = [*b1, *b2];
	let endianness: fn([u8; 2]) -> u16 = match bom {
		UTF16_BE_BOM => u16::from_be_bytes,
		UTF16_LE_BOM => u16::from_le_bytes,
		_ => err!(TextDecode("UTF-16 string has an invalid byte order mark")),
	};

	Ok((bom, endianness, rest))
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}

// Invalid sequences become U+FFFD, a bad frame shouldn't take the rest of the tag with it
pub(crate) fn utf8_decode(bytes: &[u8]) -> String {
	String::from_utf8_lossy(bytes).into_owned()
}

pub(crate) fn utf16_decode(words: &[u16]) -> Result<String> {
	String::from_utf16(words)
		.map_err(|_| Id3v2Error::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	if bytes.len() % 2 != 0 {
		err!(TextDecode("UTF-16 string has an odd length"));
	}

	let unverified: Vec<u16> = bytes
		.chunks_exact(2)
		// Every string in a frame may carry its own BOM, they must be filtered out.
		.filter_map(|c| match c {
			[0xFF, 0xFE] | [0xFE, 0xFF] => None,
			[b1, b2] => Some(endianness([*b1, *b2])),
			_ => None,
		})
		.collect();

	utf16_decode(&unverified)
}
