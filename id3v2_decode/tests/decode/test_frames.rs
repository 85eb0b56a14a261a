use crate::util::{tag, utf16_payload, v3_frame, v4_frame};

use id3v2_decode::config::{ParseOptions, UnsynchronisationScheme};
use id3v2_decode::error::ErrorKind;
use id3v2_decode::{Id3v2Tag, TagVersion};

#[test_log::test]
fn v3_and_v4_sizes() {
	// 200 bytes is 0x00C8 big endian, but 0x0148 synchsafe
	let title = format!("\x00{}", "a".repeat(199));

	let v3 = tag(3, 0, &v3_frame("TIT2", 0, title.as_bytes()));
	let v4 = tag(4, 0, &v4_frame("TIT2", 0, title.as_bytes()));

	assert_eq!(id3v2_decode::frames(&v3).unwrap()["TIT2"], &title[1..]);
	assert_eq!(id3v2_decode::frames(&v4).unwrap()["TIT2"], &title[1..]);

	// Reading a synchsafe size as big endian overruns the region
	let mut mislabeled = v4.clone();
	mislabeled[3] = 3;
	let err = id3v2_decode::frames(&mislabeled).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::BadFrameLength));
}

#[test_log::test]
fn unsupported_version() {
	for major in [2, 5] {
		let buffer = tag(major, 0, &v3_frame("TIT2", 0, b"\x00Title"));
		let err = id3v2_decode::frames(&buffer).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::UnsupportedVersion(m, 0) if *m == major));
	}
}

#[test_log::test]
fn unsupported_version_without_frames() {
	let frames = id3v2_decode::frames(&tag(2, 0, &[0; 32])).unwrap();
	assert!(frames.is_empty());
}

#[test_log::test]
fn every_null_is_removed() {
	let mut region = v4_frame("TIT2", 0, b"\x00Ti\x00tle\x00");
	region.extend(v4_frame("TPE1", 0, &utf16_payload([0xFF, 0xFE], "Artist\0")));

	let frames = id3v2_decode::frames(&tag(4, 0, &region)).unwrap();
	assert_eq!(frames["TIT2"], "Title");
	assert_eq!(frames["TPE1"], "Artist");
}

#[test_log::test]
fn data_length_indicator_without_unsynchronisation() {
	// The indicator is only removed from unsynchronised frames
	let region = v4_frame("TIT2", 0x0001, b"\x00\x00\x00\x04\x03Foo");

	let frames = id3v2_decode::frames(&tag(4, 0, &region)).unwrap();
	assert_eq!(frames["TIT2"], "\u{4}\u{3}Foo");
}

#[test_log::test]
fn v3_flags_have_no_unsynchronisation() {
	// 0x0002 is unused in ID3v2.3, the content must be left alone
	let region = v3_frame("TIT2", 0x0002, b"\x00F\x00oo");

	let mut reader = id3v2_decode::FrameReader::new(&region, TagVersion::V3);
	let frame = reader.next().unwrap().unwrap();
	assert!(!frame.flags().unsynchronisation);
	assert!(!frame.flags().data_length_indicator);
	assert_eq!(frame.decoded_value(ParseOptions::new()).unwrap(), "Foo");

	let content = frame.resynchronised_content(ParseOptions::new()).unwrap();
	assert_eq!(&*content, frame.content());
}

#[test_log::test]
fn unsynchronisation_schemes() {
	let region = v4_frame("TALB", 0x0002, b"\x00\xFF\x00\x00\x41");
	let buffer = tag(4, 0x80, &region);

	let default = id3v2_decode::frames(&buffer).unwrap();
	assert_eq!(default["TALB"], "\u{FFFD}A");

	let standard = id3v2_decode::frames_with_options(
		&buffer,
		ParseOptions::new().unsynchronisation(UnsynchronisationScheme::Standard),
	)
	.unwrap();
	assert_eq!(standard["TALB"], "\u{00ff}A");
}

#[test_log::test]
fn ascii_frame_ids() {
	let mut region = v3_frame("TT2 ", 0, b"\x00Old title");
	region.extend(v3_frame("tit2", 0, b"\x00Lowercase"));
	region.extend(v3_frame("TALB", 0, b"\x00Album"));

	let frames = id3v2_decode::frames(&tag(3, 0, &region)).unwrap();
	assert_eq!(frames.len(), 3);
	assert_eq!(frames["TT2 "], "Old title");
	assert_eq!(frames["tit2"], "Lowercase");
	assert_eq!(frames["TALB"], "Album");
}

#[test_log::test]
fn non_ascii_frame_id() {
	let mut buffer = tag(4, 0, &v4_frame("TIT2", 0, b"\x00Title"));
	// Second byte of the frame ID
	buffer[11] = 0xC9;

	let err = id3v2_decode::frames(&buffer).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::BadFrameId(id) if id == b"T\xC9T2"));
}

#[test_log::test]
fn invalid_utf8_keeps_other_frames() {
	let mut region = v4_frame("TIT2", 0, b"\x03\xC3\x28");
	region.extend(v4_frame("TALB", 0, b"\x03Album"));

	let frames = id3v2_decode::frames(&tag(4, 0, &region)).unwrap();
	assert_eq!(frames["TIT2"], "\u{FFFD}(");
	assert_eq!(frames["TALB"], "Album");
}

#[test_log::test]
fn empty_extended_url() {
	let mut region = v4_frame("WXXX", 0, &[]);
	region.extend(v4_frame("TALB", 0, b"\x00Album"));

	let frames = id3v2_decode::frames(&tag(4, 0, &region)).unwrap();
	assert_eq!(frames["WXXX"], "");
	assert_eq!(frames["TALB"], "Album");
}

#[test_log::test]
fn truncated_buffer() {
	let mut buffer = tag(4, 0, &v4_frame("TIT2", 0, b"\x00Title"));
	buffer.truncate(buffer.len() - 1);

	let err = Id3v2Tag::parse(&buffer, ParseOptions::new()).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::TruncatedTag {
			expected: 16,
			available: 15
		}
	));
}

#[test_log::test]
fn frame_header_in_padding_position() {
	// Fewer than 10 non-padding bytes left over is a broken frame, not padding
	let mut region = v4_frame("TIT2", 0, b"\x00Title");
	region.extend_from_slice(b"TAL");

	let err = id3v2_decode::frames(&tag(4, 0, &region)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::BadFrameLength));
}
