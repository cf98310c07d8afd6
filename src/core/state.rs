use std::sync::Arc;

use crate::directory::OfficeDirectory;
use crate::io::MessageSender;

use super::extractor::QueryExtractor;

/// Dependencies shared by every request. Built once in `main`, never
/// mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<QueryExtractor>,
    pub directory: Arc<dyn OfficeDirectory>,
    pub sender: Arc<dyn MessageSender>,
}

impl AppState {
    pub fn new(
        extractor: QueryExtractor,
        directory: Arc<dyn OfficeDirectory>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        Self {
            extractor: Arc::new(extractor),
            directory,
            sender,
        }
    }
}
