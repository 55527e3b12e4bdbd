pub mod constants;
pub mod timeout;
pub mod url_utils;

pub use constants::*;
pub use timeout::with_page_timeout;
pub use url_utils::{docs_page_url, is_valid_url, manifest_url, normalize_base_url, story_page_url};
