use id3v2_decode::error::ErrorKind;
use id3v2_decode::{HeaderFlags, TagVersion};

#[test_log::test]
fn read_flags() {
	assert_eq!(
		id3v2_decode::read_flags(128),
		HeaderFlags {
			unsynchronized: true,
			extended_header: false,
			experimental: false,
		}
	);
	assert_eq!(
		id3v2_decode::read_flags(64),
		HeaderFlags {
			unsynchronized: false,
			extended_header: true,
			experimental: false,
		}
	);
	assert_eq!(
		id3v2_decode::read_flags(32),
		HeaderFlags {
			unsynchronized: false,
			extended_header: false,
			experimental: true,
		}
	);
	assert_eq!(id3v2_decode::read_flags(0), HeaderFlags::default());
}

#[test_log::test]
fn version_is_verbatim() {
	let header = id3v2_decode::header(b"ID3\x09\x07\x00\x00\x00\x00\x00").unwrap();
	assert_eq!(header.version, TagVersion::new(9, 7));
	assert_eq!(header.size, 0);
	assert_eq!(header.full_tag_size(), 10);
}

#[test_log::test]
fn size_ignores_high_bits() {
	let header = id3v2_decode::header(b"ID3\x04\x00\x00\x80\x84\xBE\x99").unwrap();
	assert_eq!(header.size, 8089);
}

#[test_log::test]
fn missing_marker() {
	let err = id3v2_decode::header(b"TAG\x04\x00\x00\x00\x00\x00\x00").unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader));

	let err = id3v2_decode::frames(b"\xFF\xFB\x90\x64\x00\x00\x00\x00\x00\x00").unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader));
}

#[test_log::test]
fn too_short() {
	for len in 0..10 {
		let err = id3v2_decode::header(&b"ID3\x04\x00\x00\x00\x00\x00\x00"[..len]).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::MalformedHeader));
	}
}

#[test_log::test]
fn extended_header() {
	let err = id3v2_decode::header(b"ID3\x04\x00\x40\x00\x00\x00\x00").unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::UnsupportedFeature("extended header")
	));
}
