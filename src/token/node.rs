use super::conversions::{balance_from_hex_wei, parse_hex_u64};
use super::types::{BLOCK_TAG_LATEST, ETH_BLOCK_NUMBER, ETH_GET_BALANCE};
use crate::core::errors::SdkError;
use crate::core::kernel::{RestClient, RpcClient, RpcEndpoint};
use crate::core::types::BalanceInfo;
use serde_json::Value;
use tracing::{debug, instrument};

/// Current block height from the chain node
#[instrument(skip(rpc))]
pub async fn block_number<R: RestClient>(rpc: &RpcClient<R>) -> Result<u64, SdkError> {
    let hex: String = rpc
        .call_json(RpcEndpoint::Node, ETH_BLOCK_NUMBER, Vec::<Value>::new())
        .await?;

    let height = parse_hex_u64(&hex)?;
    debug!(height, "Fetched block height");
    Ok(height)
}

/// Native balance at the latest block, bypassing the application RPC
#[instrument(skip(rpc), fields(address = %address))]
pub async fn balance<R: RestClient>(
    rpc: &RpcClient<R>,
    address: &str,
) -> Result<BalanceInfo, SdkError> {
    let hex: String = rpc
        .call_json(RpcEndpoint::Node, ETH_GET_BALANCE, (address, BLOCK_TAG_LATEST))
        .await?;

    balance_from_hex_wei(&hex)
}
