use super::{FrameFlags, FrameId};
use crate::error::Result;
use crate::header::{FrameSizeEncoding, HEADER_SIZE, TagVersion};
use crate::macros::err;

use byteorder::{BigEndian, ByteOrder};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrameHeader<'a> {
	pub(crate) id: FrameId<'a>,
	pub(crate) size: u32,
	pub(crate) flags: FrameFlags,
}

/// Parse the frame header at the start of `bytes`
///
/// Returns `None` once the padding (or the end of the region) is reached.
pub(crate) fn parse_header(bytes: &[u8], version: TagVersion) -> Result<Option<FrameHeader<'_>>> {
	// Assume we just started reading padding
	match bytes.first() {
		None | Some(0) => return Ok(None),
		Some(_) => {},
	}

	let size_encoding = version.frame_size_encoding()?;

	let Some(header) = bytes.get(..HEADER_SIZE) else {
		log::debug!(
			"Found {} trailing bytes, too short for a frame header",
			bytes.len()
		);
		err!(BadFrameLength);
	};

	let id = FrameId::new(&header[..4])?;
	let size = size_encoding.decode([header[4], header[5], header[6], header[7]]);

	let flags = BigEndian::read_u16(&header[8..]);
	let flags = match size_encoding {
		FrameSizeEncoding::Synchsafe => FrameFlags::parse_id3v24(flags),
		FrameSizeEncoding::BigEndian => FrameFlags::parse_id3v23(flags),
	};

	Ok(Some(FrameHeader { id, size, flags }))
}
