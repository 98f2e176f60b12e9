pub mod classify;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generate;
pub mod naming;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::GenError;
pub use generate::{generate, Generation};
