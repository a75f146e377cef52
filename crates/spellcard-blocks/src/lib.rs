//! Text-level building blocks for spell card files.
//!
//! Everything in this crate works on in-memory text and never touches the
//! filesystem:
//!
//! - [`braces`]: balanced `{...}` value extraction shared by both parsers
//! - [`parser`]: the `% SPELL DESCRIPTION BEGIN/END` free-text block
//! - [`writer`]: formatting of property lines, QR lines and the description block
//! - [`formats`]: version sniffing plus the legacy (`\newcommand`) and
//!   current (`\SpellProp`) property strategies
//!
//! Malformed input is never an error at this level: unparseable lines are
//! skipped and a missing block yields `None`.

pub mod braces;
pub mod error;
pub mod formats;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use formats::{
    FileProperty, FormatVersion, PropertyFormat, PropertyMap, detect_version, parse_properties,
};
pub use parser::{DescriptionBlock, extract_description, parse_description};
pub use writer::{format_description, format_property, format_qr_line};
