//! Unit record export pipeline

pub mod convert;
pub mod mapping;
pub mod record;
pub mod slug;
pub mod vendor_bundle;
pub mod writer;

pub use convert::{convert, Conversion, ConversionSummary, Pass, PassStats};
pub use mapping::{MergeOutcome, MergePolicy, OutputMapping};
pub use record::{build_unique_record, build_unit_record, Cost, KeyedRecord, OutputRecord};
pub use slug::{slugify, unit_key};
pub use writer::{render_module, write_module};
