// Adapters layer: concrete implementations for external systems (http, session storage, page).

pub mod cookie_store;
pub mod document;
pub mod http;
pub mod memory_store;

pub use cookie_store::CookieFileStore;
pub use document::Document;
pub use http::HttpApiClient;
pub use memory_store::MemorySessionStore;
