use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Categories for itemized business deductions.
///
/// Mirrors the deduction tracker categories offered to freelancers. Meals are
/// only 50% deductible by default; every other category deducts in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionCategory {
    HomeOffice,
    VehicleMileage,
    SoftwareTools,
    ProfessionalServices,
    Insurance,
    Education,
    Travel,
    Meals,
    PhoneInternet,
    Equipment,
    Marketing,
    Other,
}

impl DeductionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HomeOffice => "Home office",
            Self::VehicleMileage => "Vehicle/mileage",
            Self::SoftwareTools => "Software & tools",
            Self::ProfessionalServices => "Professional services",
            Self::Insurance => "Insurance",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Meals => "Meals (50%)",
            Self::PhoneInternet => "Phone & internet",
            Self::Equipment => "Equipment",
            Self::Marketing => "Marketing",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Home office" => Some(Self::HomeOffice),
            "Vehicle/mileage" => Some(Self::VehicleMileage),
            "Software & tools" => Some(Self::SoftwareTools),
            "Professional services" => Some(Self::ProfessionalServices),
            "Insurance" => Some(Self::Insurance),
            "Education" => Some(Self::Education),
            "Travel" => Some(Self::Travel),
            "Meals (50%)" => Some(Self::Meals),
            "Phone & internet" => Some(Self::PhoneInternet),
            "Equipment" => Some(Self::Equipment),
            "Marketing" => Some(Self::Marketing),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Default deductible percentage for this category.
    pub fn default_deduction_percent(&self) -> Decimal {
        match self {
            Self::Meals => Decimal::new(50, 0),
            _ => Decimal::new(100, 0),
        }
    }
}

/// A single itemized deduction record.
///
/// `deduction_percent`, when present, overrides the category default
/// (e.g. a home office only partially used for business).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionEntry {
    pub category: DeductionCategory,
    pub description: String,
    pub amount: Decimal,
    pub deduction_percent: Option<Decimal>,
}

impl DeductionEntry {
    /// The deductible portion of this entry, rounded to cents.
    ///
    /// Negative amounts contribute nothing; a refund belongs on the income
    /// side, not as a negative deduction.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxpal_core::{DeductionCategory, DeductionEntry};
    ///
    /// let entry = DeductionEntry {
    ///     category: DeductionCategory::Meals,
    ///     description: "Client lunch".to_string(),
    ///     amount: dec!(120.00),
    ///     deduction_percent: None,
    /// };
    ///
    /// assert_eq!(entry.deductible_amount(), dec!(60.00));
    /// ```
    pub fn deductible_amount(&self) -> Decimal {
        if self.amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let percent = self
            .deduction_percent
            .unwrap_or_else(|| self.category.default_deduction_percent())
            .clamp(Decimal::ZERO, Decimal::new(100, 0));
        round_half_up(self.amount * percent / Decimal::new(100, 0))
    }

    /// Sums the deductible portions of a set of entries.
    pub fn total_deductible(entries: &[DeductionEntry]) -> Decimal {
        entries
            .iter()
            .map(DeductionEntry::deductible_amount)
            .sum()
    }
}
