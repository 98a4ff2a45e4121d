//! Browser Bindings
//!
//! Host implementations of the engine seams: fetch-based transport, native
//! dialogs, the wasm event loop, and page-embedded configuration.

mod config;
mod dialog;
mod fetch;
mod runtime;

pub use config::load_config;
pub use dialog::BrowserOperator;
pub use fetch::FetchTransport;
pub use runtime::BrowserRuntime;
