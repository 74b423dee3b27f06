#[cfg(not(any(feature = "chrono_clock", feature = "time_clock")))]
compile_error!("enable at least one clock: the `chrono_clock` or the `time_clock` feature");

pub mod algorithms;
pub mod claims;
pub mod codec;
pub mod engine;
pub mod errors;
pub mod keys;
pub mod tokens;

pub use self::algorithms::{Algorithm, AllowList};
pub use self::engine::SignatureEngine;
pub use self::keys::Key;
pub use self::tokens::*;

/// A JSON object: the shape of both the header and the payload.
pub type Claims = serde_json::Map<String, serde_json::Value>;
