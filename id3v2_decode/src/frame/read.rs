use super::Frame;
use super::header::parse_header;
use crate::error::{ErrorKind, Id3v2Error, Result};
use crate::header::{HEADER_SIZE, TagVersion};

/// A cursor over the frames of a tag
///
/// Frames are yielded in file order. Iteration ends at the first padding byte, at the end of the
/// region, or after the first error.
///
/// # Examples
///
/// ```rust
/// use id3v2_decode::{FrameReader, TagVersion};
///
/// # fn main() -> id3v2_decode::error::Result<()> {
/// let region = b"TALB\x00\x00\x00\x04\x00\x00\x03Foo\x00\x00\x00\x00";
///
/// let mut reader = FrameReader::new(region, TagVersion::V4);
/// let frame = reader.next().unwrap()?;
///
/// assert_eq!(frame.id_str(), "TALB");
/// assert_eq!(frame.content(), b"\x03Foo");
/// assert!(reader.next().is_none());
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct FrameReader<'a> {
	region: &'a [u8],
	pos: usize,
	version: TagVersion,
	finished: bool,
}

impl<'a> FrameReader<'a> {
	/// Create a new `FrameReader` over a frame region
	///
	/// `region` should be exactly [`TagHeader::size`](crate::TagHeader::size) bytes, starting
	/// directly after the tag header.
	pub fn new(region: &'a [u8], version: TagVersion) -> Self {
		Self {
			region,
			pos: 0,
			version,
			finished: false,
		}
	}

	/// The number of bytes consumed so far
	pub fn position(&self) -> usize {
		self.pos
	}

	fn read_frame(&mut self) -> Result<Option<Frame<'a>>> {
		let remaining = &self.region[self.pos..];

		let Some(header) = parse_header(remaining, self.version)? else {
			log::debug!("Reached the end of the frames at offset {}", self.pos);
			return Ok(None);
		};

		let content_start = HEADER_SIZE;
		let content_end = content_start.checked_add(header.size as usize);
		let Some(content) = content_end.and_then(|end| remaining.get(content_start..end)) else {
			log::debug!(
				"Frame \"{}\" declares {} bytes, only {} remain",
				header.id,
				header.size,
				remaining.len() - content_start
			);
			return Err(Id3v2Error::new(ErrorKind::BadFrameLength));
		};

		log::trace!(
			"Read frame \"{}\" at offset {}, size: {}, flags: {:?}",
			header.id,
			self.pos,
			header.size,
			header.flags
		);

		self.pos += content_start + content.len();

		Ok(Some(Frame {
			id: header.id,
			size: header.size,
			flags: header.flags,
			content,
		}))
	}
}

impl<'a> Iterator for FrameReader<'a> {
	type Item = Result<Frame<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		match self.read_frame() {
			Ok(Some(frame)) => Some(Ok(frame)),
			Ok(None) => {
				self.finished = true;
				None
			},
			Err(err) => {
				self.finished = true;
				Some(Err(err))
			},
		}
	}
}

impl std::iter::FusedIterator for FrameReader<'_> {}
