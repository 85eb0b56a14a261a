use super::FrameId;
use crate::error::Result;
use crate::macros::err;
use crate::util::text::{
	TextEncoding, extract_null_terminated, latin1_decode, split_bom, utf8_decode,
	utf16_decode_bytes,
};

/// The frames that need special handling while decoding
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FrameKind {
	/// `WXXX`
	ExtendedUrl,
	/// `TXXX`
	ExtendedText,
	/// `APIC`
	AttachedPicture,
	/// Everything else, decoded as a simple text frame
	Standard,
}

impl FrameKind {
	fn from_id(id: &str) -> Self {
		if FrameId::EXTENDED_URL == id {
			Self::ExtendedUrl
		} else if FrameId::EXTENDED_TEXT == id {
			Self::ExtendedText
		} else if FrameId::ATTACHED_PICTURE == id {
			Self::AttachedPicture
		} else {
			Self::Standard
		}
	}
}

/// Decode the content of a frame into text
///
/// * `WXXX` frames return only the URL, see [`extract_null_terminated`]. An empty `WXXX` frame
///   returns an empty string
/// * `TXXX` and `APIC` frames are not decoded, and always return an empty string
/// * All other frames are read as `[encoding][text]`. An unknown encoding byte causes the
///   entire payload (encoding byte included) to be read as UTF-8, lossily
///
/// # Errors
///
/// * The encoding is [`TextEncoding::UTF16BE`]
/// * The UTF-16 byte order mark is missing or invalid
/// * The UTF-16 text is invalid. Invalid UTF-8 never fails, it is read lossily
/// * See [`extract_null_terminated`]
///
/// # Examples
///
/// ```rust
/// use id3v2_decode::decode_payload;
///
/// # fn main() -> id3v2_decode::error::Result<()> {
/// assert_eq!(decode_payload("TALB", b"\x00pants")?, "pants");
/// assert_eq!(decode_payload("APIC", b"\x00image/png\x00\x03")?, "");
/// # Ok(()) }
/// ```
pub fn decode_payload(key: &str, payload: &[u8]) -> Result<String> {
	match FrameKind::from_id(key) {
		FrameKind::ExtendedUrl if payload.is_empty() => Ok(String::new()),
		FrameKind::ExtendedUrl => extract_null_terminated(payload).map(|text| text.value),
		FrameKind::ExtendedText | FrameKind::AttachedPicture => {
			log::trace!("Frame \"{key}\" is not decoded, using an empty value");
			Ok(String::new())
		},
		FrameKind::Standard => decode_standard(payload),
	}
}

fn decode_standard(payload: &[u8]) -> Result<String> {
	let Some((&encoding_byte, content)) = payload.split_first() else {
		return Ok(String::new());
	};

	match TextEncoding::from_u8(encoding_byte) {
		Some(TextEncoding::Latin1) => Ok(latin1_decode(content)),
		Some(TextEncoding::UTF16) => {
			if content.is_empty() {
				return Ok(String::new());
			}

			let (_, endianness, text) = split_bom(content)?;
			utf16_decode_bytes(text, endianness)
		},
		Some(TextEncoding::UTF16BE) => err!(UnsupportedEncoding(encoding_byte)),
		Some(TextEncoding::UTF8) => Ok(utf8_decode(content)),
		None => {
			log::debug!("Unknown text encoding {encoding_byte}, reading the payload as-is");
			Ok(utf8_decode(payload))
		},
	}
}
