use std::str::FromStr;
use std::sync::Arc;
use anyhow::Result;
use sui_sdk::{
    types::base_types::SuiAddress,
    SuiClient,
};
use crate::utils::mist_to_sui;

#[derive(Clone)]
pub struct Wallet {
    pub client: Arc<SuiClient>,
    pub address: SuiAddress,
}

fn parse_address(address: &str) -> Option<SuiAddress> {
    SuiAddress::from_str(address).ok()
}

impl Wallet {
    pub fn new(client: Arc<SuiClient>, address: SuiAddress) -> Self {
        Wallet {
            client,
            address,
        }
    }

    async fn get_sui_balance(&self, address: SuiAddress) -> Result<u128> {
        let balance = self.client.coin_read_api()
            .get_balance(address, None)
            .await?;
        Ok(balance.total_balance)
    }

    /// Best-effort SUI balance for any address string, in display units.
    /// Balance display is advisory only, so every failure (bad address,
    /// RPC error, timeout) collapses to `None` instead of an error.
    pub async fn fetch_balance(&self, address: &str) -> Option<f64> {
        let address = parse_address(address)?;
        match self.get_sui_balance(address).await {
            Ok(total) => Some(mist_to_sui(total)),
            Err(e) => {
                log::debug!("balance query for {} failed: {}", address, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // fetch_balance bails out on these before any query is issued
    #[test]
    fn malformed_addresses_yield_no_reading() {
        assert!(parse_address("not an address").is_none());
        assert!(parse_address("").is_none());
        assert!(parse_address(&"a".repeat(42)).is_none());
        assert!(parse_address("0x59892").is_none());
    }

    #[test]
    fn well_formed_addresses_parse() {
        let address = "0x598928d17a9a5dadfaffdaca2e5d2315bd2e9387d73c8a63488a1a0f4d73ffbd";
        assert!(parse_address(address).is_some());
    }
}
