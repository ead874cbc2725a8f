//! WASM Frontend for Calculator
//!
//! The browser binding (feature `wasm`) and a mock DOM that lets the same
//! page wiring run in plain `cargo test`.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{button_id, DomElement, DomEvent, MockDom, DATA_INPUT};
pub use driver::WasmDriver;
