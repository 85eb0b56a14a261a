/// Options to control how frames are decoded
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) unsynchronisation: UnsynchronisationScheme,
	pub(crate) read_cover_art: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	unsynchronisation: UnsynchronisationScheme::StripAllZeros,
	/// 	read_cover_art: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default unsynchronisation scheme
	pub const DEFAULT_UNSYNCHRONISATION: UnsynchronisationScheme =
		UnsynchronisationScheme::StripAllZeros;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			unsynchronisation: Self::DEFAULT_UNSYNCHRONISATION,
			read_cover_art: true,
		}
	}

	/// How to reverse unsynchronisation on frames that have it applied, see [`UnsynchronisationScheme`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::config::{ParseOptions, UnsynchronisationScheme};
	///
	/// // My files come from a conforming encoder, only `0xFF 0x00` pairs should be touched
	/// let parsing_options =
	/// 	ParseOptions::new().unsynchronisation(UnsynchronisationScheme::Standard);
	/// ```
	pub fn unsynchronisation(&mut self, scheme: UnsynchronisationScheme) -> Self {
		self.unsynchronisation = scheme;
		*self
	}

	/// Whether or not to include `APIC` frames in the decoded frames
	///
	/// Picture contents are never decoded, an included `APIC` frame always maps to an empty string.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::config::ParseOptions;
	///
	/// // I don't want a placeholder entry for the cover art
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}
}

/// The method used to undo unsynchronisation on a frame payload
///
/// Unsynchronisation inserts a `0x00` after any `0xFF` that could be mistaken for an MPEG frame sync.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum UnsynchronisationScheme {
	/// Remove **every** null byte from the payload
	///
	/// This is lossy (multi-byte encodings such as UTF-16 will lose their high bytes), but mirrors
	/// how a number of existing readers treat unsynchronised frames.
	#[default]
	StripAllZeros,
	/// Only remove a `0x00` that directly follows a `0xFF`, as described by the ID3v2 format
	Standard,
}
