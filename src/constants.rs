/// Move entry point invoked by the mint action
pub const LOYALTY_MODULE: &str = "loyalty_card";
pub const MINT_FUNCTION: &str = "mint_loyalty";

// Global constants
pub const GAS_BUDGET: u64 = 100_000_000;

pub const SUI_DECIMALS: f64 = 1_000_000_000.0;

/// Recipient length that triggers a balance lookup while typing.
/// Any other length clears the reading instead of querying.
pub const INSPECTED_ADDRESS_LEN: usize = 42;

pub const MESSAGE_AREA_MARGIN: u16 = 4;

pub const NETWORKS: [(&str, &str); 3] = [
    ("devnet", "https://fullnode.devnet.sui.io:443"),
    ("testnet", "https://fullnode.testnet.sui.io:443"),
    ("mainnet", "https://fullnode.mainnet.sui.io:443"),
];
