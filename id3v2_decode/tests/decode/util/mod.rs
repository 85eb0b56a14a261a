/// Build a frame with the given (already encoded) size bytes
fn frame_with_size(id: &str, size: [u8; 4], flags: u16, content: &[u8]) -> Vec<u8> {
	let mut bytes = id.as_bytes().to_vec();
	bytes.extend_from_slice(&size);
	bytes.extend_from_slice(&flags.to_be_bytes());
	bytes.extend_from_slice(content);
	bytes
}

/// Encode `value` as a 4 byte synchsafe integer
pub fn synchsafe(value: u32) -> [u8; 4] {
	assert!(value <= 0x0FFF_FFFF);
	[
		((value >> 21) & 0x7F) as u8,
		((value >> 14) & 0x7F) as u8,
		((value >> 7) & 0x7F) as u8,
		(value & 0x7F) as u8,
	]
}

/// An ID3v2.3 frame, with a plain big endian size
pub fn v3_frame(id: &str, flags: u16, content: &[u8]) -> Vec<u8> {
	frame_with_size(id, (content.len() as u32).to_be_bytes(), flags, content)
}

/// An ID3v2.4 frame, with a synchsafe size
pub fn v4_frame(id: &str, flags: u16, content: &[u8]) -> Vec<u8> {
	frame_with_size(id, synchsafe(content.len() as u32), flags, content)
}

/// Wrap `region` in a tag header
pub fn tag(major: u8, flags: u8, region: &[u8]) -> Vec<u8> {
	let mut tag = b"ID3".to_vec();
	tag.extend_from_slice(&[major, 0, flags]);
	tag.extend_from_slice(&synchsafe(region.len() as u32));
	tag.extend_from_slice(region);
	tag
}

/// Encode `text` as a UTF-16 payload (encoding byte and BOM included)
pub fn utf16_payload(bom: [u8; 2], text: &str) -> Vec<u8> {
	let mut payload = vec![1];
	payload.extend_from_slice(&bom);
	for unit in text.encode_utf16() {
		if bom == [0xFF, 0xFE] {
			payload.extend_from_slice(&unit.to_le_bytes());
		} else {
			payload.extend_from_slice(&unit.to_be_bytes());
		}
	}
	payload
}

/// Read an asset from `tests/assets`
pub fn read_asset(name: &str) -> Vec<u8> {
	std::fs::read(format!("tests/assets/{name}")).unwrap()
}
