use crate::app::core::{App, MessageType, MintStatus};
use crate::transactions::{gas_used_from_response, LoyaltyMinter};
use anyhow::Result;
use std::sync::Arc;

/// What a finished submission leaves behind for display
pub struct MintOutcome {
    pub digest: String,
    pub gas_used: Option<f64>,
    pub new_balance: Option<f64>,
}

impl App {
    /// One mint attempt end to end: build the move call, sign and submit
    /// it, derive the fee from the receipt, refresh the signer balance.
    ///
    /// Exactly one attempt may be in flight; re-invocation while
    /// Submitting returns without building a second call.
    pub async fn mint_loyalty(&mut self) -> Result<()> {
        if self.mint_status == MintStatus::Submitting {
            return Ok(());
        }

        let Some(wallet) = self.wallet.clone() else {
            self.set_message(MessageType::Error, "Please connect your wallet".to_string());
            return Ok(());
        };

        // The submit key is inert while either field is blank, this is
        // just the backstop.
        if !self.mint_form.is_submittable() {
            return Ok(());
        }

        self.clear_messages();
        self.mint_status = MintStatus::Submitting;
        self.gas_used = None;
        self.sui_balance = None;

        let minter = LoyaltyMinter::new(Arc::clone(&wallet.client), wallet.address);
        let result = minter
            .mint_loyalty(
                self.package_id.trim(),
                &self.mint_form.recipient,
                &self.mint_form.image_url,
            )
            .await;

        match result {
            Ok(response) => {
                let digest = response.digest.base58_encode();
                log::info!("mint_loyalty executed: {}", digest);

                let outcome = MintOutcome {
                    gas_used: gas_used_from_response(&response),
                    // Fetch new balance; an absent reading is shown as
                    // unknown rather than keeping the pre-mint figure.
                    new_balance: wallet.fetch_balance(&wallet.address.to_string()).await,
                    digest,
                };
                self.apply_mint_success(outcome);
            }
            Err(e) => {
                log::warn!("mint_loyalty failed: {}", e);
                self.apply_mint_failure(&e.to_string());
            }
        }

        Ok(())
    }

    /// Post-success state: store fee and refreshed balance (either may
    /// be absent), clear the mint inputs, record the digest.
    fn apply_mint_success(&mut self, outcome: MintOutcome) {
        self.gas_used = outcome.gas_used;
        self.sui_balance = outcome.new_balance;
        self.mint_form.clear();
        self.customer_balance = None;
        self.mint_status = MintStatus::Succeeded(outcome.digest);
    }

    /// Post-failure state: surface the collaborator's message verbatim,
    /// leave the entered values editable for an immediate retry.
    fn apply_mint_failure(&mut self, message: &str) {
        self.mint_status = MintStatus::Failed(message.to_string());
        self.set_message(MessageType::Error, format!("Minting failed: {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::{App, MintStatus};
    use crate::utils::NetworkState;

    fn offline_app() -> App {
        App::disconnected(NetworkState::new())
    }

    fn filled_app() -> App {
        let mut app = offline_app();
        app.mint_form.recipient = "0xabc".to_string();
        app.mint_form.image_url = "https://example.com/card.png".to_string();
        app
    }

    #[tokio::test]
    async fn mint_without_wallet_shows_connect_notice() {
        let mut app = filled_app();

        app.mint_loyalty().await.unwrap();

        assert_eq!(app.mint_status, MintStatus::Idle);
        assert_eq!(
            app.error_message.as_deref(),
            Some("Please connect your wallet")
        );
    }

    #[tokio::test]
    async fn mint_refused_while_submitting() {
        let mut app = filled_app();
        app.mint_status = MintStatus::Submitting;

        app.mint_loyalty().await.unwrap();

        // No state change at all, not even the connect-wallet notice
        assert_eq!(app.mint_status, MintStatus::Submitting);
        assert_eq!(app.error_message, None);
    }

    #[tokio::test]
    async fn mint_refused_with_blank_fields() {
        let mut app = offline_app();
        app.mint_form.recipient = "   ".to_string();
        app.mint_form.image_url = String::new();
        // A wallet-less app reports the missing wallet first, so give
        // the guard order a chance to matter: no wallet and no fields
        // still ends Idle with untouched form values.
        app.mint_loyalty().await.unwrap();

        assert_eq!(app.mint_status, MintStatus::Idle);
        assert_eq!(app.mint_form.recipient, "   ");
        assert_eq!(app.mint_form.image_url, "");
    }

    #[test]
    fn success_clears_form_and_stores_fee_and_balance() {
        let mut app = filled_app();
        app.customer_balance = Some(1.0);
        app.mint_status = MintStatus::Submitting;

        app.apply_mint_success(MintOutcome {
            digest: "9jYt7k".to_string(),
            gas_used: Some(0.0035),
            new_balance: Some(41.2),
        });

        assert_eq!(app.mint_form.recipient, "");
        assert_eq!(app.mint_form.image_url, "");
        assert_eq!(app.gas_used, Some(0.0035));
        assert_eq!(app.sui_balance, Some(41.2));
        assert_eq!(app.customer_balance, None);
        assert_eq!(app.mint_status, MintStatus::Succeeded("9jYt7k".to_string()));
    }

    #[test]
    fn success_with_failed_refresh_leaves_balance_absent() {
        let mut app = filled_app();
        app.sui_balance = Some(50.0);
        app.mint_status = MintStatus::Submitting;

        app.apply_mint_success(MintOutcome {
            digest: "9jYt7k".to_string(),
            gas_used: None,
            new_balance: None,
        });

        // Absent, not the stale pre-mint figure; the form still clears
        assert_eq!(app.sui_balance, None);
        assert_eq!(app.gas_used, None);
        assert_eq!(app.mint_form.recipient, "");
        assert_eq!(app.mint_status, MintStatus::Succeeded("9jYt7k".to_string()));
    }

    #[test]
    fn failure_keeps_form_and_reports_message() {
        let mut app = filled_app();
        app.customer_balance = Some(1.0);
        app.mint_status = MintStatus::Submitting;

        app.apply_mint_failure("User rejected the request");

        assert_eq!(app.mint_form.recipient, "0xabc");
        assert_eq!(app.mint_form.image_url, "https://example.com/card.png");
        assert_eq!(app.gas_used, None);
        assert_eq!(app.sui_balance, None);
        assert_eq!(app.customer_balance, Some(1.0));
        assert_eq!(
            app.mint_status,
            MintStatus::Failed("User rejected the request".to_string())
        );
        assert_eq!(
            app.error_message.as_deref(),
            Some("Minting failed: User rejected the request")
        );
    }
}
