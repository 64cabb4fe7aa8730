use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Computes the system's cut of a transaction.
///
/// Implementations must be pure: the same amount always yields the same fee.
/// Amounts are not validated, so the fee is defined for zero and negative
/// values as well.
pub trait FeePolicy: Send + Sync {
    fn compute(&self, amount: Decimal) -> Decimal;
}

pub type FeePolicyBox = Box<dyn FeePolicy>;

const WITHDRAWAL_RATE: Decimal = dec!(0.03);

/// Flat 3% fee on the transaction amount.
#[derive(Debug, Default, Clone, Copy)]
pub struct WithdrawalFee;

impl FeePolicy for WithdrawalFee {
    fn compute(&self, amount: Decimal) -> Decimal {
        amount * WITHDRAWAL_RATE
    }
}
