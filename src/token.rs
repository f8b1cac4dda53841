multiversx_sc::imports!();

use crate::errors::{ERR_WRONG_PAYMENT_TOKEN, ERR_ZERO_PAYMENT};

/// Custody of the registry token. All tokens enter through
/// `receive_tokens` and leave through `send_tokens`.
#[multiversx_sc::module]
pub trait TokenModule {
    /// Validates the call payment and returns its amount.
    fn receive_tokens(&self) -> BigUint {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.tcr_token_id().get(),
            ERR_WRONG_PAYMENT_TOKEN
        );
        require!(payment.amount > 0u64, ERR_ZERO_PAYMENT);
        payment.amount.clone()
    }

    fn send_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        let token_id = self.tcr_token_id().get();
        self.send().direct_esdt(to, &token_id, 0, amount);
    }

    #[view(getCustodyBalance)]
    fn custody_balance(&self) -> BigUint {
        let token_id = self.tcr_token_id().get();
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token_id), 0)
    }

    #[view(getTokenId)]
    #[storage_mapper("tcrTokenId")]
    fn tcr_token_id(&self) -> SingleValueMapper<TokenIdentifier>;
}
