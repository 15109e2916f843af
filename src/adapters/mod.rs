// Adapters layer: concrete implementations for the outside world (http, disk, stdout).

pub mod http;
pub mod notify;
pub mod storage;

pub use http::HttpFetcher;
pub use notify::LineSink;
pub use storage::LocalStorage;
