//! Quarterly estimated payment schedule.
//!
//! The four statutory quarters are modeled as equal shares of the annual
//! liability. The IRS calendar's uneven quarter lengths are reflected only in
//! the earning periods and due dates, never in the amounts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TaxYearPolicy;

/// One of the four estimated payment quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }

    /// The income period this installment covers.
    pub fn earning_period(&self) -> &'static str {
        match self {
            Self::Q1 => "Jan 1 - Mar 31",
            Self::Q2 => "Apr 1 - May 31",
            Self::Q3 => "Jun 1 - Aug 31",
            Self::Q4 => "Sep 1 - Dec 31",
        }
    }
}

/// A single estimated payment installment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub quarter: Quarter,
    pub due_date: NaiveDate,
    pub amount: Decimal,
}

/// Expands a quarterly payment amount into the four dated installments for
/// the policy's tax year.
pub fn payment_schedule(
    policy: &TaxYearPolicy,
    quarterly_payment: Decimal,
) -> [ScheduledPayment; 4] {
    let [q1, q2, q3, q4] = policy.payment_due_dates;
    [
        ScheduledPayment {
            quarter: Quarter::Q1,
            due_date: q1,
            amount: quarterly_payment,
        },
        ScheduledPayment {
            quarter: Quarter::Q2,
            due_date: q2,
            amount: quarterly_payment,
        },
        ScheduledPayment {
            quarter: Quarter::Q3,
            due_date: q3,
            amount: quarterly_payment,
        },
        ScheduledPayment {
            quarter: Quarter::Q4,
            due_date: q4,
            amount: quarterly_payment,
        },
    ]
}
