//! Breach-cost and guardrail-ROI arithmetic.
//!
//! Per-record breach costs follow the IBM Cost of a Data Breach Report
//! (2024 figures). The arithmetic is deliberately naive: it exists to show
//! an order of magnitude, not to price an insurance policy, and it excludes
//! regulatory fines and reputation damage entirely.

use serde::{Deserialize, Serialize};

/// Industries with seeded breach profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    Healthcare,
    FinancialServices,
    Retail,
    Technology,
}

impl Industry {
    /// All seeded industries.
    pub const ALL: [Industry; 4] = [
        Industry::Healthcare,
        Industry::FinancialServices,
        Industry::Retail,
        Industry::Technology,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Industry::Healthcare => "Healthcare",
            Industry::FinancialServices => "Financial Services",
            Industry::Retail => "Retail / E-Commerce",
            Industry::Technology => "Technology / SaaS",
        }
    }

    /// The seeded breach profile for this industry.
    pub fn profile(&self) -> IndustryProfile {
        match self {
            Industry::Healthcare => IndustryProfile {
                industry: *self,
                avg_records: 50_000,
                cost_per_breach_record: 429,
                regulatory_fine_range: "$1M - $50M (HIPAA)",
                reputation_impact: "Critical - patient trust, malpractice risk",
                example: "A hospital AI chatbot leaking patient records could trigger \
                          HIPAA violations at $429 per record.",
                guardrail_cost_annual: 150_000,
            },
            Industry::FinancialServices => IndustryProfile {
                industry: *self,
                avg_records: 100_000,
                cost_per_breach_record: 266,
                regulatory_fine_range: "$500K - $100M (SEC/FINRA)",
                reputation_impact: "Severe - customer churn, stock impact",
                example: "Knight Capital lost $440M in 45 minutes due to a software \
                          deployment with no guardrails.",
                guardrail_cost_annual: 200_000,
            },
            Industry::Retail => IndustryProfile {
                industry: *self,
                avg_records: 200_000,
                cost_per_breach_record: 169,
                regulatory_fine_range: "$100K - $10M (PCI-DSS / GDPR)",
                reputation_impact: "Moderate - brand damage, customer churn",
                example: "A chatbot processing unauthorized refunds at scale could \
                          generate millions in losses.",
                guardrail_cost_annual: 100_000,
            },
            Industry::Technology => IndustryProfile {
                industry: *self,
                avg_records: 75_000,
                cost_per_breach_record: 188,
                regulatory_fine_range: "$250K - $20M (GDPR / CCPA)",
                reputation_impact: "High - enterprise client trust, competitive risk",
                example: "An AI assistant leaking API keys or customer data could expose \
                          entire platforms.",
                guardrail_cost_annual: 175_000,
            },
        }
    }
}

impl std::str::FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        match normalized.as_str() {
            "healthcare" | "health" => Ok(Industry::Healthcare),
            "financial" | "financial-services" | "finance" => Ok(Industry::FinancialServices),
            "retail" | "ecommerce" | "e-commerce" => Ok(Industry::Retail),
            "technology" | "tech" | "saas" => Ok(Industry::Technology),
            _ => Err(format!(
                "unknown industry '{s}' (expected healthcare, financial, retail, or technology)"
            )),
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Seeded breach economics for one industry.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryProfile {
    /// The industry.
    pub industry: Industry,
    /// Typical number of records exposed per incident.
    pub avg_records: u64,
    /// Cost per breached record, USD.
    pub cost_per_breach_record: u64,
    /// Typical regulatory fine range, for display.
    pub regulatory_fine_range: &'static str,
    /// Reputation impact, for display.
    pub reputation_impact: &'static str,
    /// Industry anecdote, for display.
    pub example: &'static str,
    /// Annual cost of running a guardrail program, USD.
    pub guardrail_cost_annual: u64,
}

/// The computed business case for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachEstimate {
    /// Full cost of one breach at the given record count.
    pub breach_cost: f64,
    /// Breach cost weighted by annual probability.
    pub expected_annual_loss: f64,
    /// Annual guardrail investment.
    pub guardrail_cost: f64,
    /// Return on the guardrail investment, percent.
    pub roi_percent: f64,
}

impl BreachEstimate {
    /// Compute the estimate.
    ///
    /// `breach_probability` is an annual probability as a fraction;
    /// out-of-range values are clamped to `[0, 1]`.
    pub fn compute(profile: &IndustryProfile, records_at_risk: u64, breach_probability: f64) -> Self {
        let probability = breach_probability.clamp(0.0, 1.0);
        let breach_cost = records_at_risk as f64 * profile.cost_per_breach_record as f64;
        let expected_annual_loss = breach_cost * probability;
        let guardrail_cost = profile.guardrail_cost_annual as f64;
        let roi_percent = (expected_annual_loss - guardrail_cost) / guardrail_cost * 100.0;

        Self {
            breach_cost,
            expected_annual_loss,
            guardrail_cost,
            roi_percent,
        }
    }

    /// True if expected losses exceed the guardrail investment.
    pub fn pays_off(&self) -> bool {
        self.roi_percent > 0.0
    }
}
