use crate::error::Result;
use crate::macros::err;
use crate::util::synchsafe::SynchsafeInteger;

use byteorder::{BigEndian, ByteOrder};

/// The size of the fixed tag header, and of every frame header
pub const HEADER_SIZE: usize = 10;

const ID3_MARKER: &[u8; 3] = b"ID3";

const UNSYNCHRONISATION_MASK: u8 = 0x80;
const EXTENDED_HEADER_MASK: u8 = 0x40;
const EXPERIMENTAL_MASK: u8 = 0x20;

/// The ID3v2 version, as stored in the header
///
/// Both bytes are kept verbatim. Only major revisions 3 and 4 can have their frames decoded, see
/// [`TagVersion::frame_size_encoding`].
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct TagVersion {
	/// The major revision (the `4` in ID3v2.4.0)
	pub major: u8,
	/// The minor revision (the `0` in ID3v2.4.0)
	pub minor: u8,
}

impl TagVersion {
	/// ID3v2.3.0
	pub const V3: Self = Self::new(3, 0);
	/// ID3v2.4.0
	pub const V4: Self = Self::new(4, 0);

	/// Create a new `TagVersion`
	pub const fn new(major: u8, minor: u8) -> Self {
		Self { major, minor }
	}

	/// How the frame size field is encoded in this version
	///
	/// # Errors
	///
	/// The major revision is not 3 or 4
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::{FrameSizeEncoding, TagVersion};
	///
	/// # fn main() -> id3v2_decode::error::Result<()> {
	/// assert_eq!(TagVersion::V3.frame_size_encoding()?, FrameSizeEncoding::BigEndian);
	/// assert_eq!(TagVersion::V4.frame_size_encoding()?, FrameSizeEncoding::Synchsafe);
	/// assert!(TagVersion::new(2, 0).frame_size_encoding().is_err());
	/// # Ok(()) }
	/// ```
	pub fn frame_size_encoding(self) -> Result<FrameSizeEncoding> {
		match self.major {
			3 => Ok(FrameSizeEncoding::BigEndian),
			4 => Ok(FrameSizeEncoding::Synchsafe),
			_ => err!(UnsupportedVersion(self.major, self.minor)),
		}
	}
}

/// How a 4 byte frame size field is encoded
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FrameSizeEncoding {
	/// A plain big endian `u32` (ID3v2.3)
	BigEndian,
	/// A synchsafe integer (ID3v2.4)
	Synchsafe,
}

impl FrameSizeEncoding {
	pub(crate) fn decode(self, field: [u8; 4]) -> u32 {
		let size = u32::from_be_bytes(field);
		match self {
			Self::BigEndian => size,
			Self::Synchsafe => size.unsynch(),
		}
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeaderFlags {
	/// Whether or not all frames are unsynchronised
	///
	/// This is informational, only the frame level flag affects decoding.
	/// See [`FrameFlags::unsynchronisation`](crate::FrameFlags::unsynchronisation).
	pub unsynchronized: bool,
	/// Whether the tag has an extended header
	///
	/// Extended headers are not supported, so a parsed [`TagHeader`] never has this set.
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
}

impl HeaderFlags {
	/// Read the flags from the header flag byte
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::HeaderFlags;
	///
	/// let flags = HeaderFlags::from_byte(0x80);
	/// assert!(flags.unsynchronized);
	/// assert!(!flags.extended_header);
	/// assert!(!flags.experimental);
	/// ```
	pub fn from_byte(byte: u8) -> Self {
		Self {
			unsynchronized: byte & UNSYNCHRONISATION_MASK == UNSYNCHRONISATION_MASK,
			extended_header: byte & EXTENDED_HEADER_MASK == EXTENDED_HEADER_MASK,
			experimental: byte & EXPERIMENTAL_MASK == EXPERIMENTAL_MASK,
		}
	}
}

/// An ID3v2 tag header
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TagHeader {
	/// The version of the tag
	pub version: TagVersion,
	/// The tag flags
	pub flags: HeaderFlags,
	/// The size of the frame region (**DOES NOT INCLUDE THE HEADER**)
	///
	/// This is decoded from a synchsafe integer, so it is always <= `2^28 - 1`.
	pub size: u32,
}

impl TagHeader {
	/// Parse a tag header from the start of `bytes`
	///
	/// Only the first 10 bytes are inspected.
	///
	/// # Errors
	///
	/// * `bytes` is shorter than 10 bytes
	/// * `bytes` doesn't start with `"ID3"`
	/// * The extended header flag is set
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		log::debug!("Parsing ID3v2 header");

		let Some(header) = bytes.get(..HEADER_SIZE) else {
			log::debug!("Buffer too short for a header ({} bytes)", bytes.len());
			err!(MalformedHeader);
		};

		if &header[..3] != ID3_MARKER {
			err!(MalformedHeader);
		}

		let version = TagVersion::new(header[3], header[4]);
		let flags = HeaderFlags::from_byte(header[5]);
		let size = BigEndian::read_u32(&header[6..]).unsynch();

		if flags.extended_header {
			err!(UnsupportedFeature("extended header"));
		}

		log::debug!(
			"Found ID3v2.{}.{} header, size: {}, flags: {:?}",
			version.major,
			version.minor,
			size,
			flags
		);

		Ok(TagHeader {
			version,
			flags,
			size,
		})
	}

	/// The total size of the tag, including the header
	pub fn full_tag_size(&self) -> u64 {
		u64::from(self.size) + HEADER_SIZE as u64
	}
}
