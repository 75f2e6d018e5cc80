#![forbid(unsafe_code)]

//! Account balance view.

use crate::format;

/// A single account balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_type: String,
    pub balance: i64,
}

impl Account {
    pub fn new(account_type: impl Into<String>, balance: i64) -> Self {
        Self {
            account_type: account_type.into(),
            balance,
        }
    }

    /// Zero counts as positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.balance >= 0
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let tone = if self.is_positive() {
            "● POSITIVE"
        } else {
            "● NEGATIVE"
        };
        vec![
            self.account_type.to_uppercase(),
            format::money("$", self.balance),
            "Current Balance".to_owned(),
            tone.to_owned(),
        ]
    }
}

/// Business savings account.
#[must_use]
pub fn savings() -> Account {
    Account::new("Business Savings", 5000)
}

/// Current account.
#[must_use]
pub fn current() -> Account {
    Account::new("Current Account", 25_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_accounts() {
        assert_eq!(
            savings().lines(),
            ["BUSINESS SAVINGS", "$5,000", "Current Balance", "● POSITIVE"]
        );
        assert_eq!(current().lines()[1], "$25,000");
    }

    #[test]
    fn negative_tone() {
        let overdrawn = Account::new("Overdraft", -120);
        assert!(!overdrawn.is_positive());
        assert_eq!(overdrawn.lines()[3], "● NEGATIVE");
        assert!(Account::new("Empty", 0).is_positive());
    }
}
