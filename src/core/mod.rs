pub mod extractor;
pub mod reply;
pub mod state;
pub mod synonyms;

pub use extractor::{ExtractionResult, QueryExtractor};
pub use state::AppState;
pub use synonyms::{SynonymCatalog, SynonymEntry, SynonymTable};
