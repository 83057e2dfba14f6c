//! Per-token withdrawal cooldown.

use cosmwasm_schema::cw_serde;

#[cw_serde]
#[derive(Copy, Eq)]
pub enum CooldownPhase {
    /// The next `WithdrawOnChild` for the token will withdraw
    Ready,
    /// The next `WithdrawOnChild` for the token will be skipped
    Cooling,
}

/// Phase of a token at `height`, given the block of its last withdrawal.
/// A token that was never withdrawn counts as withdrawn at block 0.
pub fn phase(last_withdraw: Option<u64>, cooldown: u64, height: u64) -> CooldownPhase {
    let last = last_withdraw.unwrap_or(0);
    if height.saturating_sub(last) < cooldown {
        CooldownPhase::Cooling
    } else {
        CooldownPhase::Ready
    }
}

/// First block at which the token is ready again, if it is cooling.
pub fn ready_at(last_withdraw: Option<u64>, cooldown: u64, height: u64) -> Option<u64> {
    match phase(last_withdraw, cooldown, height) {
        CooldownPhase::Cooling => Some(last_withdraw.unwrap_or(0).saturating_add(cooldown)),
        CooldownPhase::Ready => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_withdrawn_is_ready_once_height_reaches_cooldown() {
        assert_eq!(phase(None, 100, 100), CooldownPhase::Ready);
        assert_eq!(ready_at(None, 100, 12_345), None);
    }

    #[test]
    fn never_withdrawn_cools_below_cooldown_height() {
        assert_eq!(phase(None, 100, 99), CooldownPhase::Cooling);
        assert_eq!(ready_at(None, 100, 0), Some(100));
    }

    #[test]
    fn cooling_until_window_elapses() {
        assert_eq!(phase(Some(1_000), 10, 1_000), CooldownPhase::Cooling);
        assert_eq!(phase(Some(1_000), 10, 1_009), CooldownPhase::Cooling);
        assert_eq!(ready_at(Some(1_000), 10, 1_009), Some(1_010));
        assert_eq!(phase(Some(1_000), 10, 1_010), CooldownPhase::Ready);
    }

    #[test]
    fn zero_cooldown_is_always_ready() {
        assert_eq!(phase(Some(5), 0, 5), CooldownPhase::Ready);
    }
}
