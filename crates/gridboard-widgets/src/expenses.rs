#![forbid(unsafe_code)]

//! Expense claims view.

use std::fmt;

use crate::format;

/// Review state of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    /// Status colour.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Approved => "#48bb78",
            Self::Rejected => "#f56565",
            Self::Pending => "#ed8936",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        })
    }
}

/// One claim. Amounts are in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseClaim {
    pub id: u32,
    pub description: &'static str,
    pub amount_cents: i64,
    pub date: &'static str,
    pub status: ClaimStatus,
}

/// List of claims with a pending total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseClaims {
    claims: Vec<ExpenseClaim>,
}

impl Default for ExpenseClaims {
    fn default() -> Self {
        use ClaimStatus::{Approved, Pending};
        let seeded = [
            ("Office Supplies", 12_750, "2024-01-05", Pending),
            ("Business Lunch", 8_500, "2024-01-04", Approved),
            ("Software License", 29_999, "2024-01-03", Pending),
            ("Travel Expenses", 45_025, "2024-01-02", Pending),
            ("Marketing Materials", 17_500, "2024-01-01", Approved),
        ];
        let claims = seeded
            .into_iter()
            .zip(1..)
            .map(|((description, amount_cents, date, status), id)| ExpenseClaim {
                id,
                description,
                amount_cents,
                date,
                status,
            })
            .collect();
        Self { claims }
    }
}

impl ExpenseClaims {
    #[must_use]
    pub fn new(claims: Vec<ExpenseClaim>) -> Self {
        Self { claims }
    }

    #[must_use]
    pub fn claims(&self) -> &[ExpenseClaim] {
        &self.claims
    }

    /// Sum of pending claims, in cents.
    #[must_use]
    pub fn pending_total_cents(&self) -> i64 {
        self.claims
            .iter()
            .filter(|c| c.status == ClaimStatus::Pending)
            .map(|c| c.amount_cents)
            .sum()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.claims.len() + 1);
        lines.push(format!(
            "Pending Claims {}",
            format::cents("$", self.pending_total_cents())
        ));
        lines.extend(self.claims.iter().map(|c| {
            format!(
                "{} ({}) {} {}",
                c.description,
                c.date,
                format::cents("$", c.amount_cents),
                c.status
            )
        }));
        lines
    }
}
