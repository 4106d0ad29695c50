//! Configuration utility types.
//!
//! | Module     | Purpose                                      |
//! |------------|----------------------------------------------|
//! | `error`    | Configuration error and diagnostic types     |
//! | `field`    | Type-safe field paths                        |
//! | `handle`   | Process-wide configuration (set once)        |
//! | `presence` | Which keys the raw file spelled out          |

mod error;
mod field;
pub mod handle;
mod presence;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind};
pub use field::FieldPath;
pub use handle::{cfg, init_config, load};
pub use presence::ConfigPresence;
