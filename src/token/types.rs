use crate::core::types::Signature;
use serde::Serialize;
use serde_json::Value;

pub const CREATE_TOKEN_METHOD: &str = "create_token";

// Chain node methods
pub const ETH_BLOCK_NUMBER: &str = "eth_blockNumber";
pub const ETH_GET_BALANCE: &str = "eth_getBalance";
pub const BLOCK_TAG_LATEST: &str = "latest";

// Signed parameter names; the wire payload spells the checkpoint in snake case
pub const SIGNED_DECIMALS: &str = "decimals";
pub const SIGNED_MASTER_AUTHORITY: &str = "masterAuthority";
pub const SIGNED_NAME: &str = "name";
pub const SIGNED_NONCE: &str = "nonce";
pub const SIGNED_RECENT_CHECKPOINT: &str = "recentCheckpoint";
pub const SIGNED_SYMBOL: &str = "symbol";
pub const SIGNED_TOKEN: &str = "token";

/// Token contract methods dispatched through the application RPC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenMethod {
    GetTokenMetadata,
    UpdateMetadata,
    Mint,
    AdminBurn,
    GrantAuthority,
    RevokeAuthority,
    Pause,
    Unpause,
    AddToBlacklist,
}

impl TokenMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetTokenMetadata => "getTokenMetadata",
            Self::UpdateMetadata => "updateMetadata",
            Self::Mint => "mint",
            Self::AdminBurn => "adminBurn",
            Self::GrantAuthority => "grantAuthority",
            Self::RevokeAuthority => "revokeAuthority",
            Self::Pause => "pause",
            Self::Unpause => "unpause",
            Self::AddToBlacklist => "addToBlacklist",
        }
    }
}

impl std::fmt::Display for TokenMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `create_token` params
#[derive(Debug, Clone, Serialize)]
pub struct CreateTokenRequest<'a> {
    pub decimals: u8,
    pub master_authority: &'a str,
    pub name: &'a str,
    pub symbol: &'a str,
    pub nonce: i64,
    pub recent_checkpoint: u64,
    pub signature: Signature,
}

/// Params shared by every per-token method
#[derive(Debug, Clone, Serialize)]
pub struct TokenCallRequest<'a> {
    pub token: &'a str,
    pub nonce: i64,
    #[serde(rename = "methodArgs")]
    pub method_args: Vec<Value>,
    pub recent_checkpoint: u64,
    pub signature: Signature,
}
