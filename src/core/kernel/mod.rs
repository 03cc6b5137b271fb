/// Transport and signing kernel
///
/// The kernel holds everything that is independent of individual token
/// operations:
///
/// - `RestClient` / `ReqwestRest`: JSON POST transport with a fixed timeout
/// - `RpcClient`: JSON-RPC 2.0 envelope handling on top of a `RestClient`
/// - `EcdsaSigner` and `canonical_message`: the request-signing protocol
///
/// # Example
/// ```rust,no_run
/// use alchemy_chain_sdk::core::kernel::*;
/// use alchemy_chain_sdk::core::types::SignParams;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let rpc = RpcClient::new(ReqwestRest::new("http://localhost:8545".to_string())?);
/// let height = rpc.call(RpcEndpoint::Node, "eth_blockNumber", Vec::<u8>::new()).await?;
///
/// let signer = EcdsaSigner::from_private_key("0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318")?;
/// let params = SignParams::new().with("nonce", 1_i64).with("token", "0xToken");
/// let signature = signer.sign(&params)?;
/// println!("{} -> r={} s={} v={}", height, signature.r, signature.s, signature.v);
/// # Ok(())
/// # }
/// ```
pub mod rest;
pub mod rpc;
pub mod signer;

#[cfg(test)]
pub(crate) mod mock;

pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use rpc::{RpcClient, RpcEndpoint, RpcRequest, RpcResponse};
pub use signer::{canonical_message, keccak256, EcdsaSigner};
