use crate::core::{
    errors::SdkError,
    types::{BalanceInfo, TokenIssueResult, TokenMetadata, TransactionResult},
};
use async_trait::async_trait;

#[async_trait]
pub trait TokenIssuer {
    /// Issue a new token; the signed nonce is always 0
    async fn create_token(
        &self,
        name: &str,
        symbol: &str,
        decimals: u8,
        master_authority: &str,
    ) -> Result<TokenIssueResult, SdkError>;
}

#[async_trait]
pub trait TokenManager {
    async fn update_metadata(
        &self,
        token: &str,
        new_name: &str,
        new_symbol: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError>;

    async fn mint(
        &self,
        token: &str,
        to: &str,
        amount: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError>;

    async fn admin_burn(
        &self,
        token: &str,
        from: &str,
        amount: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError>;

    async fn grant_authority(
        &self,
        token: &str,
        role: &str,
        account: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError>;

    async fn revoke_authority(
        &self,
        token: &str,
        role: &str,
        account: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError>;

    async fn pause(&self, token: &str, nonce: i64) -> Result<TransactionResult, SdkError>;

    async fn unpause(&self, token: &str, nonce: i64) -> Result<TransactionResult, SdkError>;

    async fn add_to_blacklist(
        &self,
        token: &str,
        account: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError>;
}

#[async_trait]
pub trait TokenReader {
    async fn get_token_metadata(&self, token: &str) -> Result<TokenMetadata, SdkError>;
}

#[async_trait]
pub trait AccountInfo {
    /// Native balance straight from the chain node
    async fn get_balance(&self, address: &str) -> Result<BalanceInfo, SdkError>;

    /// Current block height, used as the signing checkpoint
    async fn get_block_number(&self) -> Result<u64, SdkError>;
}

// Composite trait for callers that need the whole surface
#[async_trait]
pub trait TokenService: TokenIssuer + TokenManager + TokenReader + AccountInfo {}
