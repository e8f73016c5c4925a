use crate::wallet::Wallet;
use crate::utils::{setup_for_read, shorten_id, NetworkState};
use anyhow::Result;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum MintStatus {
    Idle,
    Submitting,
    Succeeded(String),  // Contains transaction digest
    Failed(String),     // Contains error message
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageType {
    Error,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusField {
    PackageId,
    Recipient,
    ImageUrl,
}

/// The two mint inputs the contract call is built from
#[derive(Debug, Clone, Default)]
pub struct MintForm {
    pub recipient: String,
    pub image_url: String,
}

impl MintForm {
    /// The mint action stays disabled until both fields carry
    /// something other than whitespace.
    pub fn is_submittable(&self) -> bool {
        !self.recipient.trim().is_empty() && !self.image_url.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.recipient.clear();
        self.image_url.clear();
    }
}

pub struct App {
    pub wallet: Option<Wallet>,
    pub wallet_address: String,
    pub network_state: NetworkState,
    pub package_id: String,
    pub mint_form: MintForm,
    pub focus: FocusField,
    pub mint_status: MintStatus,
    pub gas_used: Option<f64>,
    pub sui_balance: Option<f64>,
    pub customer_balance: Option<f64>,
    pub is_switching_network: bool,
    pub error_message: Option<String>,
    pub message_type: MessageType,
    pub success_message: Option<String>,
}

impl App {
    pub async fn new() -> Result<App> {
        let network_state = NetworkState::new();
        let mut app = App::disconnected(network_state);

        app.connect_wallet().await;
        Ok(app)
    }

    /// App state before (or without) a usable local wallet
    pub fn disconnected(network_state: NetworkState) -> App {
        App {
            wallet: None,
            wallet_address: "Not connected".to_string(),
            network_state,
            package_id: String::new(),
            mint_form: MintForm::default(),
            focus: FocusField::PackageId,
            mint_status: MintStatus::Idle,
            gas_used: None,
            sui_balance: None,
            customer_balance: None,
            is_switching_network: false,
            error_message: None,
            message_type: MessageType::Info,
            success_message: None,
        }
    }

    /// Build the RPC client and read the active address from the local
    /// Sui config. Failure leaves the app usable with a notice; the mint
    /// action itself re-checks for a wallet.
    pub async fn connect_wallet(&mut self) {
        match setup_for_read(&self.network_state).await {
            Ok((client, address)) => {
                let wallet = Wallet::new(Arc::new(client), address);
                self.wallet_address = shorten_id(&address.to_string());
                self.sui_balance = wallet.fetch_balance(&address.to_string()).await;
                self.wallet = Some(wallet);
            }
            Err(e) => {
                log::warn!("wallet setup failed: {}", e);
                self.wallet = None;
                self.wallet_address = "Not connected".to_string();
                self.sui_balance = None;
                self.set_message(
                    MessageType::Info,
                    "Please connect your wallet (sui client config not found)".to_string(),
                );
            }
        }
    }

    // clear error and success message
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    // set message method
    pub fn set_message(&mut self, message_type: MessageType, message: String) {
        self.message_type = message_type.clone();
        match message_type {
            MessageType::Error => {
                self.error_message = Some(message);
                self.success_message = None;
            }
            MessageType::Success => {
                self.success_message = Some(message);
                self.error_message = None;
            }
            MessageType::Info => {
                self.error_message = Some(message);
                self.success_message = None;
            }
        }
    }
}
