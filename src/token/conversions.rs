use crate::core::errors::SdkError;
use crate::core::types::BalanceInfo;
use alloy_primitives::U256;

/// Decimal places between wei and ETH
pub const WEI_PER_ETH_SCALE: usize = 18;

const WEI_PER_ETH: u64 = 1_000_000_000_000_000_000;

fn strip_hex_prefix(value: &str) -> Result<&str, SdkError> {
    value
        .strip_prefix("0x")
        .ok_or_else(|| SdkError::InvalidResponse(format!("expected 0x-prefixed hex, got {:?}", value)))
}

/// Parse a node quantity such as a block number
pub fn parse_hex_u64(value: &str) -> Result<u64, SdkError> {
    let digits = strip_hex_prefix(value)?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| SdkError::InvalidResponse(format!("invalid hex quantity {:?}: {}", value, e)))
}

/// Parse a hex wei amount (any 256-bit quantity)
pub fn parse_hex_wei(value: &str) -> Result<U256, SdkError> {
    let digits = strip_hex_prefix(value)?;
    if digits.is_empty() {
        return Err(SdkError::InvalidResponse(format!("empty hex wei {:?}", value)));
    }

    U256::from_str_radix(digits, 16)
        .map_err(|e| SdkError::InvalidResponse(format!("invalid hex wei {:?}: {}", value, e)))
}

/// Exact wei -> ETH conversion as a plain decimal string.
///
/// Whole ETH is `wei / 10^18`; the remainder becomes an 18-digit fraction
/// with trailing zeros dropped. Integral amounts carry no decimal point.
pub fn wei_to_eth(wei: U256) -> String {
    let (whole, fraction) = wei.div_rem(U256::from(WEI_PER_ETH));
    if fraction.is_zero() {
        return whole.to_string();
    }

    let fraction = format!("{:0>width$}", fraction.to_string(), width = WEI_PER_ETH_SCALE);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

pub fn balance_from_hex_wei(value: &str) -> Result<BalanceInfo, SdkError> {
    let wei = parse_hex_wei(value)?;

    Ok(BalanceInfo {
        wei: wei.to_string(),
        eth: wei_to_eth(wei),
    })
}
