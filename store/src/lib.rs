pub mod config;
pub mod tokens;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_store;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_store::WebStore;

pub use config::AppConfig;
pub use tokens::{AuthTokens, TokenStore};
