use crate::util::read_asset;

use id3v2_decode::config::ParseOptions;
use id3v2_decode::error::ErrorKind;
use id3v2_decode::{Id3v2Tag, TagVersion};

use std::io::{Read, Seek};

#[test_log::test]
fn unsynchronised_v24_header() {
	let file = read_asset("unsynchronised.id3v24");
	let header = id3v2_decode::header(&file).unwrap();

	assert_eq!(header.version, TagVersion::new(4, 0));
	assert!(header.flags.unsynchronized);
	assert!(!header.flags.experimental);
	assert_eq!(header.size, 72888);
}

#[test_log::test]
fn unsynchronised_v24_frames() {
	let file = read_asset("unsynchronised.id3v24");
	let frames = id3v2_decode::frames(&file).unwrap();

	assert_eq!(frames.len(), 9);
	assert_eq!(frames["TALB"], "Test Album");
	assert_eq!(frames["TIT2"], "Unsynchronised Title");
	assert_eq!(frames["TPE1"], "Test Artist");
	assert_eq!(frames["TCON"], "Electronic");
	assert_eq!(frames["TRCK"], "5/12");
	assert_eq!(frames["WXXX"], "https://example.com/album");
	assert_eq!(frames["TXXX"], "");
	assert_eq!(frames["APIC"], "");
	// Not specially handled, so the language and description are part of the text
	assert_eq!(frames["COMM"], "engShortA comment");
}

#[test_log::test]
fn unsynchronised_v24_from_path() {
	let tag = id3v2_decode::read_from_path("tests/assets/unsynchronised.id3v24").unwrap();

	assert_eq!(tag.header().size, 72888);
	assert_eq!(tag.title(), Some("Unsynchronised Title"));
	assert_eq!(tag.artist(), Some("Test Artist"));
	assert_eq!(tag.album(), Some("Test Album"));
	assert_eq!(tag.genre(), Some("Electronic"));
	assert_eq!(tag.get("TRCK"), Some("5/12"));
	assert_eq!(tag.get("TYER"), None);
}

#[test_log::test]
fn reader_is_left_at_audio() {
	let mut file = std::fs::File::open("tests/assets/unsynchronised.id3v24").unwrap();
	let tag = id3v2_decode::read_from(&mut file, ParseOptions::new().read_cover_art(false)).unwrap();

	assert_eq!(tag.len(), 8);
	assert_eq!(
		file.stream_position().unwrap(),
		tag.header().full_tag_size()
	);

	let mut sync = [0; 2];
	file.read_exact(&mut sync).unwrap();
	assert_eq!(sync, [0xFF, 0xFB]);
}

#[test_log::test]
fn duplicate_frames_v23() {
	let file = read_asset("duplicate_frames.id3v23");
	let tag = Id3v2Tag::parse(&file, ParseOptions::new()).unwrap();

	assert_eq!(tag.header().version, TagVersion::V3);
	assert_eq!(tag.len(), 4);
	assert_eq!(tag.title(), Some("Big Endian Title"));
	assert_eq!(tag.artist(), Some("Some Artist"));
	assert_eq!(tag.get("TYER"), Some("1984"));

	// The last frame wins
	assert_eq!(tag.album(), Some("Second Album"));

	let header = id3v2_decode::header(&file).unwrap();
	let region = &file[10..header.full_tag_size() as usize];
	let frames = id3v2_decode::parse_frames(&header, region).unwrap();
	let albums = frames
		.iter()
		.filter(|frame| frame.id_str() == "TALB")
		.map(|frame| frame.content())
		.collect::<Vec<_>>();
	assert_eq!(albums, [&b"\x00First Album"[..], &b"\x00Second Album"[..]]);
}

#[test_log::test]
fn extended_header_asset() {
	let file = read_asset("extended_header.id3v24");

	let err = id3v2_decode::frames(&file).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedFeature(_)));

	let err = id3v2_decode::read_from_path("tests/assets/extended_header.id3v24").unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedFeature(_)));
}
