//! Qt Linguist TS catalogs: data model, loader, writer, lookup, and
//! directory scanning.
//!
//! The lifecycle is load-then-read-only-share: a catalog is parsed once
//! (`parser`), flattened into an immutable lookup table (`lookup::Catalog`),
//! and replaced wholesale on a language switch (`lookup::Translator`).

pub mod lookup;
pub mod model;
pub mod parser;
pub mod scan;
pub mod writer;

pub use lookup::{Catalog, Translator};
pub use model::{Context, Location, Message, Status, Translation, TranslationUnit};
pub use parser::{LoadOutcome, ParseWarning, parse_ts_file, parse_ts_str};
pub use scan::{LoadedCatalog, ScanResult, find_language_file, scan_languages_dir};
pub use writer::write_ts_string;
