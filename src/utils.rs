use anyhow::Result;
use sui_sdk::SuiClient;
use sui_sdk::SuiClientBuilder;
use sui_sdk::types::base_types::SuiAddress;
use sui_sdk::wallet_context::WalletContext;
use crate::constants::{NETWORKS, SUI_DECIMALS};
use dirs::home_dir;

pub fn shorten_id(id: &str) -> String {
    if id.len() > 16 {
        // For addresses like 0x598928d17a9a5dadfaffdaca2e5d2315bd2e9387d73c8a63488a1a0f4d73ffbd
        // Show: 0x598928...4d73ffbd (first 8 chars including 0x, last 8 chars)
        format!("{}...{}", &id[..10], &id[id.len()-8..])
    } else {
        id.to_string()
    }
}

pub fn format_sui_amount(amount: f64) -> String {
    format!("{:.6} SUI", amount)
}

pub fn mist_to_sui(amount: u128) -> f64 {
    amount as f64 / SUI_DECIMALS
}

#[derive(Clone)]
pub struct NetworkState {
    pub current_network: usize,
}

impl NetworkState {
    pub fn new() -> Self {
        NetworkState {
            current_network: 1  // Default to testnet
        }
    }

    pub fn get_current_network(&self) -> &str {
        NETWORKS[self.current_network].0
    }

    pub fn get_current_rpc(&self) -> &str {
        NETWORKS[self.current_network].1
    }
}

pub async fn setup_for_read(network_state: &NetworkState) -> Result<(SuiClient, SuiAddress)> {
    let sui = SuiClientBuilder::default()
        .build(network_state.get_current_rpc())
        .await?;

    let config_path = home_dir()
        .ok_or_else(|| anyhow::anyhow!("Failed to get home directory"))?
        .join(".sui")
        .join("sui_config")
        .join("client.yaml");

    let mut context = WalletContext::new(&config_path)?;
    let active_address = context.active_address()?;

    Ok((sui, active_address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_id_keeps_short_ids() {
        assert_eq!(shorten_id("0x2"), "0x2");
    }

    #[test]
    fn shorten_id_elides_long_addresses() {
        let id = "0x598928d17a9a5dadfaffdaca2e5d2315bd2e9387d73c8a63488a1a0f4d73ffbd";
        assert_eq!(shorten_id(id), "0x598928d1...4d73ffbd");
    }

    #[test]
    fn mist_conversion_uses_nine_decimals() {
        assert_eq!(mist_to_sui(1_000_000_000), 1.0);
        assert_eq!(mist_to_sui(3_500_000), 0.0035);
    }
}
