mod table;

pub use table::{Extractor, TableExtractor};
