pub mod builder;
pub mod client;
pub mod conversions;
pub mod node;
pub mod types;

// Re-export main types for easier importing
pub use builder::{build_token_client, connect, TokenClientBuilder};
pub use client::TokenClient;
pub use types::TokenMethod;
