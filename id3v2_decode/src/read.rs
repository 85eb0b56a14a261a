use crate::config::ParseOptions;
use crate::error::{ErrorKind, Id3v2Error, Result};
use crate::frame::read::FrameReader;
use crate::frame::{Frame, FrameId};
use crate::header::{HEADER_SIZE, TagHeader};

use std::collections::HashMap;

/// A mapping of frame IDs to their decoded values
///
/// When a tag contains multiple frames with the same ID, the value of the **last** one is kept.
pub type TagFrames = HashMap<String, String>;

/// Get the [`TagHeader::size`] bytes following the header in `buffer`
///
/// # Errors
///
/// `buffer` is too short to contain the region
pub(crate) fn frame_region<'a>(buffer: &'a [u8], header: &TagHeader) -> Result<&'a [u8]> {
	let after_header = buffer.get(HEADER_SIZE..).unwrap_or_default();

	match after_header.get(..header.size as usize) {
		Some(region) => Ok(region),
		None => Err(Id3v2Error::new(ErrorKind::TruncatedTag {
			expected: header.size,
			available: after_header.len(),
		})),
	}
}

/// Read every frame in `region`, in file order
///
/// `region` should be the [`TagHeader::size`] bytes following the tag header. No frame content
/// is decoded.
///
/// # Errors
///
/// * The tag version is not ID3v2.3 or ID3v2.4 (only checked when a frame is present)
/// * A frame ID is invalid
/// * A frame extends past the end of `region`
pub fn parse_frames<'a>(header: &TagHeader, region: &'a [u8]) -> Result<Vec<Frame<'a>>> {
	log::debug!(
		"Parsing frames, region size: {}, version: {:?}",
		region.len(),
		header.version
	);

	FrameReader::new(region, header.version).collect()
}

/// Read and decode every frame in `region`
///
/// See [`parse_frames`] and [`Frame::decoded_value`].
///
/// # Errors
///
/// * See [`parse_frames`]
/// * See [`Frame::decoded_value`]
pub fn decode_frames(
	header: &TagHeader,
	region: &[u8],
	parse_options: ParseOptions,
) -> Result<TagFrames> {
	let mut frames = TagFrames::new();

	for frame in FrameReader::new(region, header.version) {
		let frame = frame?;

		if !parse_options.read_cover_art && frame.id() == FrameId::ATTACHED_PICTURE {
			log::trace!("Skipping cover art");
			continue;
		}

		let value = frame.decoded_value(parse_options)?;
		if let Some(replaced) = frames.insert(frame.id_str().to_owned(), value) {
			log::warn!(
				"Replaced frame with ID \"{id}\" by a frame with the same ID (previous value: \
				 {replaced:?})",
				id = frame.id()
			);
		}
	}

	log::debug!("Decoded {} unique frames", frames.len());
	Ok(frames)
}
