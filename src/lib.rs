pub mod core;
pub mod token;

pub use crate::core::{
    config::ClientConfig,
    errors::{ResponseExt, SdkError},
    traits::{AccountInfo, TokenIssuer, TokenManager, TokenReader, TokenService},
    types::*,
};
pub use token::{build_token_client, connect, TokenClient, TokenClientBuilder};
