pub mod parse;
pub mod node;
pub mod token;
pub mod error;
pub mod config;
pub mod textrange;
pub mod wasm;

mod tokenize;
mod chariter;
mod tagchar;

pub use config::{BuilderConfig, ConfigError, TrailingText};
pub use error::{ErrorPos, StructuralError};
pub use node::{Node, NodeId, NodeKind, Tree};
pub use parse::TagTreeBuilder;
