#![allow(missing_docs)]

pub(crate) mod util;

mod test_assets;
mod test_frames;
mod test_header;
