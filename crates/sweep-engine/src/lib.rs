pub mod deleter;
pub mod fetch;
pub mod json_store;
pub mod matcher;
pub mod memory;
pub mod preview;
pub mod settings;
pub mod store;

pub use deleter::run_deletion;
pub use fetch::{fetch_page, is_last_page, page_request};
pub use json_store::JsonEntryStore;
pub use matcher::{
    BLANK_TOKEN, config_matches, criterion_matches, entry_matches, values_match_loose,
};
pub use memory::MemoryEntryStore;
pub use preview::{DEFAULT_PREVIEW_LIMIT, PREVIEW_PAGE_SIZE, preview_matches};
pub use settings::ConfigStore;
pub use store::{EntryStore, PageRequest, StoreError};
