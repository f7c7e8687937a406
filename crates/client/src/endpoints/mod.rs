//! REST API endpoint implementations.

pub mod hosts;
pub mod request;
pub mod url_encoding;

pub use hosts::{get_host_totals, mute_host, search_hosts, unmute_host};
pub use request::send_request_with_retry;
pub use url_encoding::encode_path_segment;
