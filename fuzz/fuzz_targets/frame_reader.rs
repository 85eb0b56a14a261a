#![no_main]

use id3v2_decode::config::ParseOptions;
use id3v2_decode::{FrameReader, TagVersion};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	for version in [TagVersion::V3, TagVersion::V4] {
		for frame in FrameReader::new(data, version) {
			let Ok(frame) = frame else {
				break;
			};

			let _ = frame.decoded_value(ParseOptions::new());
		}
	}
});
