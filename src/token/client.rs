use super::node;
use super::types::{
    CreateTokenRequest, TokenCallRequest, TokenMethod, CREATE_TOKEN_METHOD, SIGNED_DECIMALS,
    SIGNED_MASTER_AUTHORITY, SIGNED_NAME, SIGNED_NONCE, SIGNED_RECENT_CHECKPOINT, SIGNED_SYMBOL,
    SIGNED_TOKEN,
};
use crate::core::errors::SdkError;
use crate::core::kernel::{EcdsaSigner, RestClient, RpcClient, RpcEndpoint};
use crate::core::traits::{AccountInfo, TokenIssuer, TokenManager, TokenReader, TokenService};
use crate::core::types::{
    BalanceInfo, SignParams, TokenIssueResult, TokenMetadata, TransactionResult,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::instrument;

/// Signed token-management client
///
/// Every state-changing call fetches a fresh block height as its checkpoint,
/// signs the canonical message of the signed subset and sends the full
/// payload to the application RPC. The private key is parsed per call, before
/// any request goes out.
#[derive(Clone)]
pub struct TokenClient<R: RestClient> {
    rpc: RpcClient<R>,
    private_key: Secret<String>,
}

impl<R: RestClient> std::fmt::Debug for TokenClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenClient")
            .field("base_url", &self.rpc.rest().base_url())
            .finish_non_exhaustive()
    }
}

impl<R: RestClient> TokenClient<R> {
    pub fn new(rest: R, private_key: Secret<String>) -> Self {
        Self {
            rpc: RpcClient::new(rest),
            private_key,
        }
    }

    pub fn rpc(&self) -> &RpcClient<R> {
        &self.rpc
    }

    pub fn signer(&self) -> Result<EcdsaSigner, SdkError> {
        EcdsaSigner::from_private_key(self.private_key.expose_secret())
    }

    /// Address the remote service recovers from this client's signatures
    pub fn signer_address(&self) -> Result<String, SdkError> {
        Ok(self.signer()?.address())
    }

    /// Signed call to a per-token method, decoding the result into `T`.
    ///
    /// Only `nonce`, `recentCheckpoint` and `token` are signed; `method_args`
    /// travel unsigned.
    #[instrument(skip(self, method_args), fields(method = %method))]
    pub async fn call_token_method<T: DeserializeOwned>(
        &self,
        token: &str,
        method: TokenMethod,
        method_args: Vec<Value>,
        nonce: i64,
    ) -> Result<T, SdkError> {
        let signer = self.signer()?;
        let checkpoint = node::block_number(&self.rpc).await?;

        let signed = SignParams::new()
            .with(SIGNED_NONCE, nonce)
            .with(SIGNED_RECENT_CHECKPOINT, checkpoint)
            .with(SIGNED_TOKEN, token);
        let signature = signer.sign(&signed)?;

        let request = TokenCallRequest {
            token,
            nonce,
            method_args,
            recent_checkpoint: checkpoint,
            signature,
        };

        self.rpc
            .call_json(RpcEndpoint::Application, method.as_str(), request)
            .await
    }

    async fn call_transaction(
        &self,
        token: &str,
        method: TokenMethod,
        method_args: Vec<Value>,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError> {
        self.call_token_method(token, method, method_args, nonce)
            .await
    }
}

#[async_trait]
impl<R: RestClient> TokenIssuer for TokenClient<R> {
    #[instrument(skip(self))]
    async fn create_token(
        &self,
        name: &str,
        symbol: &str,
        decimals: u8,
        master_authority: &str,
    ) -> Result<TokenIssueResult, SdkError> {
        let signer = self.signer()?;
        let checkpoint = node::block_number(&self.rpc).await?;

        // No on-chain state exists yet for a new token
        let nonce = 0_i64;

        let signed = SignParams::new()
            .with(SIGNED_DECIMALS, decimals)
            .with(SIGNED_MASTER_AUTHORITY, master_authority)
            .with(SIGNED_NAME, name)
            .with(SIGNED_NONCE, nonce)
            .with(SIGNED_RECENT_CHECKPOINT, checkpoint)
            .with(SIGNED_SYMBOL, symbol);
        let signature = signer.sign(&signed)?;

        let request = CreateTokenRequest {
            decimals,
            master_authority,
            name,
            symbol,
            nonce,
            recent_checkpoint: checkpoint,
            signature,
        };

        self.rpc
            .call_json(RpcEndpoint::Application, CREATE_TOKEN_METHOD, request)
            .await
    }
}

#[async_trait]
impl<R: RestClient> TokenManager for TokenClient<R> {
    async fn update_metadata(
        &self,
        token: &str,
        new_name: &str,
        new_symbol: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError> {
        self.call_transaction(
            token,
            TokenMethod::UpdateMetadata,
            vec![json!(new_name), json!(new_symbol)],
            nonce,
        )
        .await
    }

    async fn mint(
        &self,
        token: &str,
        to: &str,
        amount: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError> {
        self.call_transaction(token, TokenMethod::Mint, vec![json!(to), json!(amount)], nonce)
            .await
    }

    async fn admin_burn(
        &self,
        token: &str,
        from: &str,
        amount: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError> {
        self.call_transaction(
            token,
            TokenMethod::AdminBurn,
            vec![json!(from), json!(amount)],
            nonce,
        )
        .await
    }

    async fn grant_authority(
        &self,
        token: &str,
        role: &str,
        account: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError> {
        self.call_transaction(
            token,
            TokenMethod::GrantAuthority,
            vec![json!(role), json!(account)],
            nonce,
        )
        .await
    }

    async fn revoke_authority(
        &self,
        token: &str,
        role: &str,
        account: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError> {
        self.call_transaction(
            token,
            TokenMethod::RevokeAuthority,
            vec![json!(role), json!(account)],
            nonce,
        )
        .await
    }

    async fn pause(&self, token: &str, nonce: i64) -> Result<TransactionResult, SdkError> {
        self.call_transaction(token, TokenMethod::Pause, Vec::new(), nonce)
            .await
    }

    async fn unpause(&self, token: &str, nonce: i64) -> Result<TransactionResult, SdkError> {
        self.call_transaction(token, TokenMethod::Unpause, Vec::new(), nonce)
            .await
    }

    async fn add_to_blacklist(
        &self,
        token: &str,
        account: &str,
        nonce: i64,
    ) -> Result<TransactionResult, SdkError> {
        self.call_transaction(token, TokenMethod::AddToBlacklist, vec![json!(account)], nonce)
            .await
    }
}

#[async_trait]
impl<R: RestClient> TokenReader for TokenClient<R> {
    async fn get_token_metadata(&self, token: &str) -> Result<TokenMetadata, SdkError> {
        // Reads still require an authenticated request
        self.call_token_method(token, TokenMethod::GetTokenMetadata, Vec::new(), 0)
            .await
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for TokenClient<R> {
    async fn get_balance(&self, address: &str) -> Result<BalanceInfo, SdkError> {
        node::balance(&self.rpc, address).await
    }

    async fn get_block_number(&self) -> Result<u64, SdkError> {
        node::block_number(&self.rpc).await
    }
}

#[async_trait]
impl<R: RestClient> TokenService for TokenClient<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ResponseExt;
    use crate::core::kernel::mock::MockRest;

    const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    fn mock_node() -> MockRest {
        MockRest::new().respond("eth_blockNumber", json!({"jsonrpc": "2.0", "id": 1, "result": "0x10"}))
    }

    fn client(rest: MockRest, key: &str) -> TokenClient<MockRest> {
        TokenClient::new(rest, Secret::new(key.to_string()))
    }

    #[tokio::test]
    async fn test_create_token_success() {
        let rest = mock_node().respond(
            "create_token",
            json!({"result": {"hash": "0xabc", "token": "0xdef"}, "error": null}),
        );
        let client = client(rest, KEY);

        let mut issued = None;
        let mut failed = false;
        let _ = client
            .create_token("T", "TK", 18, "0xAuth")
            .await
            .on_success(|r| issued = Some(r.clone()))
            .on_error(|_| failed = true);

        let issued = issued.unwrap();
        assert_eq!(issued.token, "0xdef");
        assert_eq!(issued.hash, "0xabc");
        assert!(!failed);
    }

    #[tokio::test]
    async fn test_create_token_rpc_error() {
        let rest = mock_node().respond(
            "create_token",
            json!({"result": null, "error": {"message": "nonce too low"}}),
        );
        let client = client(rest, KEY);

        let mut succeeded = false;
        let mut message = None;
        let _ = client
            .create_token("T", "TK", 18, "0xAuth")
            .await
            .on_success(|_| succeeded = true)
            .on_error(|e| message = Some(e.to_string()));

        assert!(!succeeded);
        assert!(message.unwrap().contains("nonce too low"));
    }

    #[tokio::test]
    async fn test_create_token_signs_business_fields() {
        let rest = mock_node().respond(
            "create_token",
            json!({"result": {"hash": "0xabc", "token": "0xdef"}}),
        );
        let client = client(rest.clone(), KEY);
        client.create_token("T", "TK", 18, "0xAuth").await.unwrap();

        let requests = rest.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method(), "eth_blockNumber");
        assert_eq!(requests[1].method(), "create_token");
        assert_eq!(requests[1].endpoint, "/rpc");

        let expected = client
            .signer()
            .unwrap()
            .sign(
                &SignParams::new()
                    .with("decimals", 18_u8)
                    .with("masterAuthority", "0xAuth")
                    .with("name", "T")
                    .with("nonce", 0_i64)
                    .with("recentCheckpoint", 16_u64)
                    .with("symbol", "TK"),
            )
            .unwrap();

        assert_eq!(
            requests[1].params(),
            &json!({
                "decimals": 18,
                "master_authority": "0xAuth",
                "name": "T",
                "symbol": "TK",
                "nonce": 0,
                "recent_checkpoint": 16,
                "signature": {"r": expected.r, "s": expected.s, "v": expected.v}
            })
        );
    }

    #[tokio::test]
    async fn test_method_args_are_not_signed() {
        let rest = mock_node().respond("mint", json!({"result": {"hash": "0xmint"}}));
        let client = client(rest.clone(), KEY);

        let result = client.mint("0xT", "0xTo", "1000", 7).await.unwrap();
        assert_eq!(result.hash, "0xmint");

        let expected = client
            .signer()
            .unwrap()
            .sign(
                &SignParams::new()
                    .with("nonce", 7_i64)
                    .with("recentCheckpoint", 16_u64)
                    .with("token", "0xT"),
            )
            .unwrap();

        let params = rest.requests()[1].params().clone();
        assert_eq!(
            params,
            json!({
                "token": "0xT",
                "nonce": 7,
                "methodArgs": ["0xTo", "1000"],
                "recent_checkpoint": 16,
                "signature": {"r": expected.r, "s": expected.s, "v": expected.v}
            })
        );
    }

    #[tokio::test]
    async fn test_each_operation_uses_its_method_and_args() {
        let tx = json!({"result": {"hash": "0x1"}});
        let rest = mock_node()
            .respond("updateMetadata", tx.clone())
            .respond("adminBurn", tx.clone())
            .respond("grantAuthority", tx.clone())
            .respond("revokeAuthority", tx.clone())
            .respond("pause", tx.clone())
            .respond("unpause", tx.clone())
            .respond("addToBlacklist", tx);
        let client = client(rest.clone(), KEY);

        client.update_metadata("0xT", "New", "NEW", 1).await.unwrap();
        client.admin_burn("0xT", "0xFrom", "5", 2).await.unwrap();
        client.grant_authority("0xT", "MINT_ROLE", "0xA", 3).await.unwrap();
        client.revoke_authority("0xT", "MINT_ROLE", "0xA", 4).await.unwrap();
        client.pause("0xT", 5).await.unwrap();
        client.unpause("0xT", 6).await.unwrap();
        client.add_to_blacklist("0xT", "0xBad", 7).await.unwrap();

        let calls: Vec<(String, Value, Value)> = rest
            .requests()
            .iter()
            .filter(|r| r.method() != "eth_blockNumber")
            .map(|r| {
                (
                    r.method().to_string(),
                    r.params()["methodArgs"].clone(),
                    r.params()["nonce"].clone(),
                )
            })
            .collect();

        assert_eq!(
            calls,
            vec![
                ("updateMetadata".to_string(), json!(["New", "NEW"]), json!(1)),
                ("adminBurn".to_string(), json!(["0xFrom", "5"]), json!(2)),
                ("grantAuthority".to_string(), json!(["MINT_ROLE", "0xA"]), json!(3)),
                ("revokeAuthority".to_string(), json!(["MINT_ROLE", "0xA"]), json!(4)),
                ("pause".to_string(), json!([]), json!(5)),
                ("unpause".to_string(), json!([]), json!(6)),
                ("addToBlacklist".to_string(), json!(["0xBad"]), json!(7)),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_token_metadata() {
        let rest = mock_node().respond(
            "getTokenMetadata",
            json!({"result": {"name": "My Token", "symbol": "MTK", "decimals": 8, "supply": "1000", "isPaused": false}}),
        );
        let client = client(rest.clone(), KEY);

        let metadata = client.get_token_metadata("0xT").await.unwrap();
        assert_eq!(
            metadata,
            TokenMetadata {
                name: "My Token".to_string(),
                symbol: "MTK".to_string(),
                decimals: 8,
                supply: "1000".to_string(),
                is_paused: false,
            }
        );

        let params = rest.requests()[1].params().clone();
        assert_eq!(params["nonce"], 0);
        assert_eq!(params["methodArgs"], json!([]));
    }

    #[tokio::test]
    async fn test_invalid_key_fails_before_network() {
        let rest = mock_node();
        let client = client(rest.clone(), "0xnot-a-key");

        let err = client.create_token("T", "TK", 18, "0xAuth").await.unwrap_err();
        assert!(matches!(err, SdkError::InvalidPrivateKey(_)));

        let err = client.pause("0xT", 1).await.unwrap_err();
        assert!(matches!(err, SdkError::InvalidPrivateKey(_)));

        assert!(rest.requests().is_empty());
    }

    #[tokio::test]
    async fn test_checkpoint_failure_aborts_call() {
        let rest = MockRest::new().respond("eth_blockNumber", json!({"error": {"message": "node syncing"}}));
        let client = client(rest.clone(), KEY);

        let err = client.mint("0xT", "0xTo", "1", 1).await.unwrap_err();
        assert_eq!(err.rpc_message(), Some("node syncing"));
        assert_eq!(rest.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_get_balance_scenario() {
        let rest = MockRest::new().respond("eth_getBalance", json!({"result": "0xde0b6b3a7640000"}));
        let client = client(rest, KEY);

        let balance = client.get_balance("0xAddr").await.unwrap();
        assert_eq!(balance.wei, "1000000000000000000");
        assert_eq!(balance.eth, "1");
    }

    #[test]
    fn test_signer_address() {
        let client = client(MockRest::new(), KEY);
        assert_eq!(
            client.signer_address().unwrap(),
            "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23"
        );
    }
}
