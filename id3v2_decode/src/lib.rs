//! A decoder for ID3v2.3 and ID3v2.4 tags
//!
//! This reads the tag header and frames from the start of an in-memory buffer (typically the
//! first bytes of an MP3 file), and decodes each frame into text.
//!
//! # Examples
//!
//! ## Reading the header
//!
//! ```rust
//! use id3v2_decode::TagVersion;
//!
//! # fn main() -> id3v2_decode::error::Result<()> {
//! let buffer = b"ID3\x04\x00\x80\x00\x00\x3F\x7F";
//! let header = id3v2_decode::header(buffer)?;
//!
//! assert_eq!(header.version, TagVersion::V4);
//! assert!(header.flags.unsynchronized);
//! assert_eq!(header.size, 8191);
//! # Ok(()) }
//! ```
//!
//! ## Reading the frames
//!
//! ```rust
//! # fn main() -> id3v2_decode::error::Result<()> {
//! let buffer = b"ID3\x04\x00\x00\x00\x00\x00\x0ETALB\x00\x00\x00\x04\x00\x00\x03Foo";
//! let frames = id3v2_decode::frames(buffer)?;
//!
//! assert_eq!(frames["TALB"], "Foo");
//! # Ok(()) }
//! ```
//!
//! # Notes
//!
//! * Only `WXXX` has special handling, `TXXX` and `APIC` frames are never decoded and map to an
//!   empty string. Every other frame is decoded as a simple text frame.
//! * By default, unsynchronised frames have **every** null byte removed, rather than only those
//!   following `0xFF`. See [`UnsynchronisationScheme`](config::UnsynchronisationScheme).
//! * Extended headers are not supported.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod file;
mod frame;
mod header;
pub(crate) mod macros;
mod read;
mod tag;
pub mod util;

pub use crate::file::{read_from, read_from_path};
pub use crate::frame::content::decode_payload;
pub use crate::frame::read::FrameReader;
pub use crate::frame::{Frame, FrameFlags, FrameId};
pub use crate::header::{FrameSizeEncoding, HeaderFlags, TagHeader, TagVersion};
pub use crate::read::{TagFrames, decode_frames, parse_frames};
pub use crate::tag::Id3v2Tag;
pub use crate::util::synchsafe::{strip_zero_bytes, unpacked_size};
pub use crate::util::text::{NullTerminatedText, TextEncoding, extract_null_terminated};

use crate::config::ParseOptions;
use crate::error::Result;

/// Parse the tag header at the start of `buffer`
///
/// # Errors
///
/// * `buffer` is shorter than 10 bytes
/// * `buffer` doesn't start with `"ID3"`
/// * The tag has an extended header
pub fn header(buffer: &[u8]) -> Result<TagHeader> {
	TagHeader::parse(buffer)
}

/// Decode every frame of the tag at the start of `buffer`
///
/// This uses the default [`ParseOptions`], see [`frames_with_options`].
///
/// # Errors
///
/// See [`frames_with_options`]
pub fn frames(buffer: &[u8]) -> Result<TagFrames> {
	frames_with_options(buffer, ParseOptions::new())
}

/// Decode every frame of the tag at the start of `buffer`
///
/// # Errors
///
/// * See [`header`]
/// * `buffer` is shorter than [`TagHeader::full_tag_size`]
/// * See [`decode_frames`]
///
/// # Examples
///
/// ```rust
/// use id3v2_decode::config::{ParseOptions, UnsynchronisationScheme};
///
/// # fn main() -> id3v2_decode::error::Result<()> {
/// let buffer = b"ID3\x04\x00\x00\x00\x00\x00\x0ETIT2\x00\x00\x00\x04\x00\x00\x03Foo";
/// let frames = id3v2_decode::frames_with_options(
/// 	buffer,
/// 	ParseOptions::new().unsynchronisation(UnsynchronisationScheme::Standard),
/// )?;
///
/// assert_eq!(frames["TIT2"], "Foo");
/// # Ok(()) }
/// ```
pub fn frames_with_options(buffer: &[u8], parse_options: ParseOptions) -> Result<TagFrames> {
	Id3v2Tag::parse(buffer, parse_options).map(Id3v2Tag::into_frames)
}

/// Read the tag flags from the header flag byte
///
/// See [`HeaderFlags::from_byte`]
pub fn read_flags(byte: u8) -> HeaderFlags {
	HeaderFlags::from_byte(byte)
}
