pub mod constants;
pub mod timeout;
pub mod url_utils;

pub use constants::*;
pub use timeout::{with_deadline, with_timeout};
pub use url_utils::{is_valid_url, parse_target_url};
