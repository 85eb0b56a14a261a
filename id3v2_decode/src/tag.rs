use crate::config::ParseOptions;
use crate::error::Result;
use crate::header::TagHeader;
use crate::read::{TagFrames, decode_frames, frame_region};

/// A decoded ID3v2 tag
///
/// This owns all of its data, so it can outlive the buffer it was decoded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Tag {
	header: TagHeader,
	frames: TagFrames,
}

impl Id3v2Tag {
	/// Decode the tag at the start of `buffer`
	///
	/// # Errors
	///
	/// * See [`TagHeader::parse`]
	/// * `buffer` is shorter than [`TagHeader::full_tag_size`]
	/// * See [`decode_frames`](crate::decode_frames)
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::Id3v2Tag;
	/// use id3v2_decode::config::ParseOptions;
	///
	/// # fn main() -> id3v2_decode::error::Result<()> {
	/// let buffer = b"ID3\x04\x00\x00\x00\x00\x00\x0ETALB\x00\x00\x00\x04\x00\x00\x03Foo";
	/// let tag = Id3v2Tag::parse(buffer, ParseOptions::new())?;
	///
	/// assert_eq!(tag.album(), Some("Foo"));
	/// # Ok(()) }
	/// ```
	pub fn parse(buffer: &[u8], parse_options: ParseOptions) -> Result<Self> {
		let header = TagHeader::parse(buffer)?;
		let region = frame_region(buffer, &header)?;
		let frames = decode_frames(&header, region, parse_options)?;

		Ok(Self { header, frames })
	}

	/// The tag header
	pub fn header(&self) -> &TagHeader {
		&self.header
	}

	/// The decoded frames
	pub fn frames(&self) -> &TagFrames {
		&self.frames
	}

	/// Consume the tag, returning its frames
	pub fn into_frames(self) -> TagFrames {
		self.frames
	}

	/// Get the decoded value of a frame
	pub fn get(&self, id: &str) -> Option<&str> {
		self.frames.get(id).map(String::as_str)
	}

	/// The number of unique frames
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// The `TIT2` frame
	pub fn title(&self) -> Option<&str> {
		self.get("TIT2")
	}

	/// The `TPE1` frame
	pub fn artist(&self) -> Option<&str> {
		self.get("TPE1")
	}

	/// The `TALB` frame
	pub fn album(&self) -> Option<&str> {
		self.get("TALB")
	}

	/// The `TCON` frame
	pub fn genre(&self) -> Option<&str> {
		self.get("TCON")
	}
}
