//! Reading tags from files and readers
//!
//! Only the tag is read, nothing past [`TagHeader::full_tag_size`] is touched.

use crate::config::ParseOptions;
use crate::error::{ErrorKind, Id3v2Error, Result};
use crate::header::{HEADER_SIZE, TagHeader};
use crate::tag::Id3v2Tag;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read an [`Id3v2Tag`] from the current position of a reader
///
/// # Errors
///
/// * The reader ends before a complete header
/// * See [`Id3v2Tag::parse`]
/// * Any I/O error from `reader`
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Id3v2Tag>
where
	R: Read,
{
	let mut header = [0; HEADER_SIZE];
	if let Err(e) = reader.read_exact(&mut header) {
		if e.kind() == std::io::ErrorKind::UnexpectedEof {
			return Err(Id3v2Error::new(ErrorKind::MalformedHeader));
		}

		return Err(e.into());
	}

	let parsed_header = TagHeader::parse(&header)?;
	log::debug!(
		"Reading {} bytes of ID3v2 tag",
		parsed_header.full_tag_size()
	);

	let mut tag_bytes = header.to_vec();
	reader
		.take(u64::from(parsed_header.size))
		.read_to_end(&mut tag_bytes)?;

	Id3v2Tag::parse(&tag_bytes, parse_options)
}

/// Read an [`Id3v2Tag`] from the start of a file, using the default [`ParseOptions`]
///
/// # Errors
///
/// * `path` does not exist, or cannot be opened
/// * See [`read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> id3v2_decode::error::Result<()> {
/// let tag = id3v2_decode::read_from_path("tests/assets/unsynchronised.id3v24")?;
/// println!("Album: {:?}", tag.album());
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P) -> Result<Id3v2Tag>
where
	P: AsRef<Path>,
{
	let file = File::open(path)?;
	read_from(&mut BufReader::new(file), ParseOptions::new())
}
