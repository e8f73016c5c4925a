use crate::app::core::App;
use crate::constants::NETWORKS;
use anyhow::Result;

impl App {
    pub async fn update_network(&mut self) -> Result<()> {
        self.error_message = None;

        // Rebuild the client and wallet against the new endpoint; a
        // failure just leaves the app disconnected with a notice.
        self.connect_wallet().await;

        // Readings from the previous network are meaningless now
        self.customer_balance = None;
        self.refresh_customer_balance().await;

        Ok(())
    }

    pub fn start_network_switch(&mut self) {
        self.is_switching_network = true;
    }

    pub fn cancel_network_switch(&mut self) {
        self.is_switching_network = false;
    }

    pub fn switch_to_network(&mut self, network_index: usize) {
        if network_index < NETWORKS.len() {
            self.network_state.current_network = network_index;
        }
        self.is_switching_network = false;
    }

    pub fn get_network_options(&self) -> String {
        format!("1) {}  2) {}  3) {}",
            NETWORKS[0].0.to_uppercase(),
            NETWORKS[1].0.to_uppercase(),
            NETWORKS[2].0.to_uppercase()
        )
    }
}
