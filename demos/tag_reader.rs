//! Prints the ID3v2 tag header and frames of the file given as the first argument.

use std::path::Path;

fn main() {
	let path_str = std::env::args().nth(1).expect("ERROR: No path specified!");
	let path = Path::new(&path_str);

	if !path.is_file() {
		panic!("ERROR: Path is not a file!");
	}

	let tag = id3v2_decode::read_from_path(path).expect("ERROR: Failed to read tag!");
	let header = tag.header();

	println!("--- Header ---");
	println!(
		"Version: ID3v2.{}.{}",
		header.version.major, header.version.minor
	);
	println!("Unsynchronized: {}", header.flags.unsynchronized);
	println!("Experimental: {}", header.flags.experimental);
	println!("Size: {}", header.size);

	println!("--- Tag Information ---");
	println!("Title: {}", tag.title().unwrap_or("None"));
	println!("Artist: {}", tag.artist().unwrap_or("None"));
	println!("Album: {}", tag.album().unwrap_or("None"));
	println!("Genre: {}", tag.genre().unwrap_or("None"));

	let mut frames = tag.frames().iter().collect::<Vec<_>>();
	frames.sort_unstable_by_key(|(id, _)| *id);

	println!("--- Frames ({}) ---", frames.len());
	for (id, value) in frames {
		println!("{id}: {value:?}");
	}
}
