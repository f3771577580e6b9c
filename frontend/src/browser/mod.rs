//! Bindings between the view state and the browser. Nothing in here is
//! callable outside a wasm32 page.

pub mod document;
pub mod observer;
pub mod storage;

pub use observer::SectionObserver;
pub use storage::BrowserStorage;
