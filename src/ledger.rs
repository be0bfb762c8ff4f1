//! Aether ledger.
//!
//! Aether is the single resource of the game. Each player has one pool,
//! bounded to `0..=AETHER_CAP`. The two mutations have deliberately
//! asymmetric shapes:
//!
//! - **Gaining clamps.** Gains past the cap silently truncate; the excess
//!   vanishes rather than banking.
//! - **Spending is exact.** A spend either debits the full amount or fails
//!   with [`RuleError::InsufficientAether`]; there are no partial spends.

use serde::{Deserialize, Serialize};

use crate::core::RuleError;

/// The most Aether a player can hold.
pub const AETHER_CAP: u8 = 16;

/// One player's bounded Aether balance.
///
/// ```
/// use arcana_core::ledger::{AetherPool, AETHER_CAP};
///
/// let mut pool = AetherPool::new();
/// pool.gain(2);
/// assert_eq!(pool.balance(), 2);
///
/// pool.gain(200);
/// assert_eq!(pool.balance(), AETHER_CAP);
///
/// pool.spend(16).unwrap();
/// assert!(pool.spend(1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AetherPool {
    balance: u8,
}

impl AetherPool {
    /// Create an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self { balance: 0 }
    }

    /// Create a pool with a starting balance, clamped to the cap.
    #[must_use]
    pub fn with_balance(balance: u8) -> Self {
        Self {
            balance: balance.min(AETHER_CAP),
        }
    }

    /// The current balance, always in `0..=AETHER_CAP`.
    #[must_use]
    pub const fn balance(&self) -> u8 {
        self.balance
    }

    /// Add `amount`, clamping at the cap. Returns the amount actually
    /// credited.
    pub fn gain(&mut self, amount: u8) -> u8 {
        let credited = amount.min(AETHER_CAP - self.balance);
        self.balance += credited;
        credited
    }

    /// Remove exactly `amount`, or fail without changing the balance.
    pub fn spend(&mut self, amount: u8) -> Result<(), RuleError> {
        if amount > self.balance {
            return Err(RuleError::InsufficientAether {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Remove up to `amount`, flooring at zero. Returns the amount actually
    /// debited. Used by effect deltas, which drain rather than pay.
    pub fn drain(&mut self, amount: u8) -> u8 {
        let debited = amount.min(self.balance);
        self.balance -= debited;
        debited
    }

    /// Whether the pool can cover an exact spend of `amount`.
    #[must_use]
    pub const fn can_spend(&self, amount: u8) -> bool {
        amount <= self.balance
    }
}

impl std::fmt::Display for AetherPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} aether", self.balance, AETHER_CAP)
    }
}
