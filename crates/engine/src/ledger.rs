//! Per-channel running balance derived from the transaction log.
//!
//! Nothing is cached: the balance is the fold of every stored transaction.
//! `sell` and `purchase` add their amount to the channel named by the
//! payment method, `spending` subtracts it. Payment methods outside the
//! three known channels are ignored, as are rows whose kind the engine does
//! not know.

use crate::{EngineError, MoneyCents, ResultEngine, TransactionKind};

/// A payment channel tracked by the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Cash,
    Bank1,
    Bank2,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Bank1 => "bank1",
            Self::Bank2 => "bank2",
        }
    }

    /// Maps a stored payment method to its channel. Unknown methods map to
    /// `None` and are skipped by the ledger.
    pub fn from_payment_method(method: &str) -> Option<Self> {
        match method {
            "cash" => Some(Self::Cash),
            "bank1" => Some(Self::Bank1),
            "bank2" => Some(Self::Bank2),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Balance {
    pub cash: MoneyCents,
    pub bank1: MoneyCents,
    pub bank2: MoneyCents,
}

/// Running sums in a wider integer: intermediate values may leave the `i64`
/// range as long as the final figures fit.
#[derive(Default)]
struct Accumulator {
    cash: i128,
    bank1: i128,
    bank2: i128,
}

impl Accumulator {
    fn slot(&mut self, channel: Channel) -> &mut i128 {
        match channel {
            Channel::Cash => &mut self.cash,
            Channel::Bank1 => &mut self.bank1,
            Channel::Bank2 => &mut self.bank2,
        }
    }

    fn apply(&mut self, kind: TransactionKind, payment_method: &str, amount: MoneyCents) {
        let Some(channel) = Channel::from_payment_method(payment_method) else {
            return;
        };
        let amount = i128::from(amount.cents());
        let slot = self.slot(channel);
        match kind {
            TransactionKind::Sell | TransactionKind::Purchase => *slot += amount,
            TransactionKind::Spending => *slot -= amount,
        }
    }
}

fn narrow(value: i128, label: &str) -> ResultEngine<MoneyCents> {
    i64::try_from(value)
        .map(MoneyCents::new)
        .map_err(|_| EngineError::MaxBalanceReached(label.to_string()))
}

impl Balance {
    /// Sum of the three channels. Fails when it does not fit in cents.
    pub fn total(&self) -> ResultEngine<MoneyCents> {
        let sum = i128::from(self.cash.cents())
            + i128::from(self.bank1.cents())
            + i128::from(self.bank2.cents());
        narrow(sum, "total")
    }

    /// Replays a set of `(kind, payment_method, amount)` rows from zero.
    ///
    /// The result does not depend on the order of `rows`. A channel whose
    /// final figure does not fit in `i64` cents fails with
    /// `MaxBalanceReached`.
    pub fn replay<'a, I>(rows: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = (TransactionKind, &'a str, MoneyCents)>,
    {
        let mut acc = Accumulator::default();
        for (kind, method, amount) in rows {
            acc.apply(kind, method, amount);
        }

        Ok(Self {
            cash: narrow(acc.cash, Channel::Cash.as_str())?,
            bank1: narrow(acc.bank1, Channel::Bank1.as_str())?,
            bank2: narrow(acc.bank2, Channel::Bank2.as_str())?,
        })
    }
}
