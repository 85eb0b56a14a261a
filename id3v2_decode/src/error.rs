//! Contains the errors that can arise while decoding a tag
//!
//! The primary error is [`Id3v2Error`]. The type of error is determined by [`ErrorKind`].

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Id3v2Error>`
pub type Result<T> = std::result::Result<T, Id3v2Error>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Header
	/// The buffer doesn't start with `"ID3"`, or is too short to hold a header
	MalformedHeader,
	/// The tag uses a feature that cannot be decoded (currently only the extended header)
	UnsupportedFeature(&'static str),
	/// Frame sizes were requested for a major version other than 3 or 4
	UnsupportedVersion(u8, u8),
	/// The buffer ends before the region declared by the header
	TruncatedTag {
		/// The number of bytes the header declares
		expected: u32,
		/// The number of bytes that were actually available after the header
		available: usize,
	},

	// Frame
	/// A frame header or payload extends past the end of the frame region
	BadFrameLength,
	/// A frame ID is not 4 ASCII characters
	BadFrameId(Vec<u8>),

	// Text
	/// A text encoding byte that cannot be handled in its position
	UnsupportedEncoding(u8),
	/// Errors that arise while decoding text
	TextDecode(&'static str),

	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur while decoding an ID3v2 tag
pub struct Id3v2Error {
	pub(crate) kind: ErrorKind,
}

impl Id3v2Error {
	/// Create an `Id3v2Error` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::error::{ErrorKind, Id3v2Error};
	///
	/// let malformed = Id3v2Error::new(ErrorKind::MalformedHeader);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::error::{ErrorKind, Id3v2Error};
	///
	/// let malformed = Id3v2Error::new(ErrorKind::MalformedHeader);
	/// if let ErrorKind::MalformedHeader = malformed.kind() {
	/// 	println!("Not an ID3v2 tag");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for Id3v2Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl From<ErrorKind> for Id3v2Error {
	fn from(kind: ErrorKind) -> Self {
		Self { kind }
	}
}

impl From<std::io::Error> for Id3v2Error {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			// Header
			ErrorKind::MalformedHeader => {
				write!(f, "ID3v2: Expected a tag header, found invalid data")
			},
			ErrorKind::UnsupportedFeature(feature) => {
				write!(f, "ID3v2: Encountered an unsupported feature ({feature})")
			},
			ErrorKind::UnsupportedVersion(major, minor) => write!(
				f,
				"ID3v2: Found an unsupported version (v2.{major}.{minor}), expected a major \
				 revision in: (3, 4)"
			),
			ErrorKind::TruncatedTag {
				expected,
				available,
			} => write!(
				f,
				"ID3v2: Tag declares {expected} bytes of frames, but only {available} are \
				 available"
			),

			// Frame
			ErrorKind::BadFrameLength => write!(
				f,
				"ID3v2: Frame isn't long enough to extract the necessary information"
			),
			ErrorKind::BadFrameId(ref frame_id) => {
				write!(f, "ID3v2: Failed to parse a frame ID: 0x{frame_id:x?}")
			},

			// Text
			ErrorKind::UnsupportedEncoding(encoding) => {
				write!(f, "ID3v2: Unsupported text encoding byte ({encoding})")
			},
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
		}
	}
}
