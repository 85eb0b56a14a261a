pub(crate) mod content;
pub(crate) mod header;
pub(crate) mod read;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::err;
use crate::util::synchsafe::reverse_unsynchronisation;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The size of a data length indicator
const DATA_LENGTH_INDICATOR_SIZE: usize = 4;

/// An `ID3v2` frame ID
///
/// This is always 4 ASCII characters. IDs outside of `'A'..='Z'` and `'0'..='9'` are kept as-is,
/// such as the space padded `"TT2 "` left behind by some ID3v2.2 upgrades.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct FrameId<'a>(&'a str);

impl FrameId<'static> {
	/// The `WXXX` (user defined URL link) frame
	pub const EXTENDED_URL: FrameId<'static> = FrameId("WXXX");
	/// The `TXXX` (user defined text information) frame
	pub const EXTENDED_TEXT: FrameId<'static> = FrameId("TXXX");
	/// The `APIC` (attached picture) frame
	pub const ATTACHED_PICTURE: FrameId<'static> = FrameId("APIC");
}

impl<'a> FrameId<'a> {
	/// Attempts to create a `FrameId` from raw ID bytes
	///
	/// # Errors
	///
	/// * `id` contains non-ASCII bytes
	/// * `id` is not 4 bytes long
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::FrameId;
	///
	/// assert!(FrameId::new(b"TALB").is_ok());
	/// assert!(FrameId::new(b"TT2 ").is_ok());
	/// assert!(FrameId::new(b"TAL\xC9").is_err());
	/// assert!(FrameId::new(b"TAL").is_err());
	/// ```
	pub fn new(id: &'a [u8]) -> Result<Self> {
		if id.len() != 4 || !id.is_ascii() {
			err!(BadFrameId(id.to_vec()));
		}

		match std::str::from_utf8(id) {
			Ok(id) => Ok(Self(id)),
			// Unreachable, the ID was verified to be ASCII
			Err(_) => err!(BadFrameId(id.to_vec())),
		}
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &'a str {
		self.0
	}
}

impl Display for FrameId<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.0)
	}
}

impl PartialEq<str> for FrameId<'_> {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for FrameId<'_> {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// Bit positions of the frame flags, one table per version
struct FlagMasks {
	tag_alter_preservation: u16,
	file_alter_preservation: u16,
	read_only: u16,
	grouping_identity: u16,
	compression: u16,
	encryption: u16,
	unsynchronisation: u16,
	data_length_indicator: u16,
}

// ID3v2.3 has no unsynchronisation or data length indicator bits
const ID3V23_FLAG_MASKS: FlagMasks = FlagMasks {
	tag_alter_preservation: 0x8000,
	file_alter_preservation: 0x4000,
	read_only: 0x2000,
	grouping_identity: 0x0020,
	compression: 0x0080,
	encryption: 0x0040,
	unsynchronisation: 0,
	data_length_indicator: 0,
};

const ID3V24_FLAG_MASKS: FlagMasks = FlagMasks {
	tag_alter_preservation: 0x4000,
	file_alter_preservation: 0x2000,
	read_only: 0x1000,
	grouping_identity: 0x0040,
	compression: 0x0008,
	encryption: 0x0004,
	unsynchronisation: 0x0002,
	data_length_indicator: 0x0001,
};

/// Various flags to describe the content of an item
///
/// Only `unsynchronisation` and `data_length_indicator` affect decoding, the rest are informational.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Item cannot be written to
	pub read_only: bool,
	/// The frame belongs to a group
	pub grouping_identity: bool,
	/// Frame is zlib compressed
	pub compression: bool,
	/// Frame is encrypted
	pub encryption: bool,
	/// Frame is unsynchronised
	///
	/// In short, this makes all "0xFF X (X >= 0xE0)" combinations into "0xFF 0x00 X" to avoid confusion
	/// with the MPEG frame header, which is often identified by its "frame sync" (11 set bits).
	///
	/// See [`UnsynchronisationScheme`](crate::config::UnsynchronisationScheme) for how this is reversed.
	pub unsynchronisation: bool,
	/// Frame has a data length indicator
	///
	/// The data length indicator is a 4 byte prefix of the frame content. It is only removed
	/// from unsynchronised frames.
	pub data_length_indicator: bool,
}

impl FrameFlags {
	fn from_masks(flags: u16, masks: &FlagMasks) -> Self {
		let test = |mask: u16| mask != 0 && flags & mask == mask;

		FrameFlags {
			tag_alter_preservation: test(masks.tag_alter_preservation),
			file_alter_preservation: test(masks.file_alter_preservation),
			read_only: test(masks.read_only),
			grouping_identity: test(masks.grouping_identity),
			compression: test(masks.compression),
			encryption: test(masks.encryption),
			unsynchronisation: test(masks.unsynchronisation),
			data_length_indicator: test(masks.data_length_indicator),
		}
	}

	/// Parse the flags from an ID3v2.4 frame
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::FrameFlags;
	///
	/// let flags = FrameFlags::parse_id3v24(0x0003);
	/// assert!(flags.unsynchronisation);
	/// assert!(flags.data_length_indicator);
	/// assert!(!flags.compression);
	/// ```
	pub fn parse_id3v24(flags: u16) -> Self {
		Self::from_masks(flags, &ID3V24_FLAG_MASKS)
	}

	/// Parse the flags from an ID3v2.3 frame
	///
	/// NOTE: The flags are not one layout shared by both versions. ID3v2.3 uses its own bit
	/// positions and has no frame level unsynchronisation or data length indicator, so those two
	/// flags are never set, and the content of an ID3v2.3 frame is never resynchronised.
	pub fn parse_id3v23(flags: u16) -> Self {
		Self::from_masks(flags, &ID3V23_FLAG_MASKS)
	}
}

/// A single ID3v2 frame, as it appears in the tag
///
/// The content is borrowed from the tag buffer and has not been decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
	pub(crate) id: FrameId<'a>,
	pub(crate) size: u32,
	pub(crate) flags: FrameFlags,
	pub(crate) content: &'a [u8],
}

impl<'a> Frame<'a> {
	/// Get the ID for the frame
	pub fn id(&self) -> FrameId<'a> {
		self.id
	}

	/// Get the ID for the frame as a string
	pub fn id_str(&self) -> &'a str {
		self.id.as_str()
	}

	/// The size of the frame content, as declared in the frame header
	pub fn size(&self) -> u32 {
		self.size
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.flags
	}

	/// The raw frame content, excluding the frame header
	pub fn content(&self) -> &'a [u8] {
		self.content
	}

	/// The frame content with unsynchronisation reversed
	///
	/// If the frame isn't unsynchronised, this is the raw content. Otherwise, the data length
	/// indicator (if any) is removed, and the content is resynchronised with the scheme from
	/// `parse_options`.
	///
	/// # Errors
	///
	/// The frame has a data length indicator, but is shorter than 4 bytes
	pub fn resynchronised_content(&self, parse_options: ParseOptions) -> Result<Cow<'a, [u8]>> {
		if !self.flags.unsynchronisation {
			return Ok(Cow::Borrowed(self.content));
		}

		let mut content = self.content;
		if self.flags.data_length_indicator {
			log::trace!("Removing data length indicator from frame \"{}\"", self.id);

			let Some(rest) = content.get(DATA_LENGTH_INDICATOR_SIZE..) else {
				err!(BadFrameLength);
			};

			content = rest;
		}

		log::trace!(
			"Reversing unsynchronisation of frame \"{}\" ({:?})",
			self.id,
			parse_options.unsynchronisation
		);

		Ok(Cow::Owned(reverse_unsynchronisation(
			content,
			parse_options.unsynchronisation,
		)))
	}

	/// Decode the frame content into text
	///
	/// See [`decode_payload`](crate::decode_payload). Every null character is removed from the result.
	///
	/// # Errors
	///
	/// * See [`Frame::resynchronised_content`]
	/// * See [`decode_payload`](crate::decode_payload)
	pub fn decoded_value(&self, parse_options: ParseOptions) -> Result<String> {
		let payload = self.resynchronised_content(parse_options)?;
		let mut value = content::decode_payload(self.id.as_str(), &payload)?;

		// A 0x00 in UTF-8 is always a null character, this is `strip_zero_bytes` on the text
		value.retain(|c| c != '\0');
		Ok(value)
	}
}
