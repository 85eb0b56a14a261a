#![no_main]

use std::io::Cursor;

use id3v2_decode::config::{ParseOptions, UnsynchronisationScheme};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let _ = id3v2_decode::read_from(
		&mut Cursor::new(data),
		ParseOptions::new().unsynchronisation(UnsynchronisationScheme::Standard),
	);
});
