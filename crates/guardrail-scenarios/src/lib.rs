//! # Guardrail Scenarios - Attack Catalog and Coverage Reporting
//!
//! Pre-baked demo data for the agent-guardrails playground, plus the driver
//! that pushes it through the pattern classifier.
//!
//! The fictional deployment is a customer-service agent for "TechStore
//! Online": it may discuss the authenticated customer's account, must never
//! reveal other customers' data, and cannot process refunds over $500
//! without a manager. The [`catalog`](catalog::catalog) holds six attack
//! scenarios against that agent, from a blunt instruction override to an
//! indirect injection hidden in a product review.
//!
//! ## What the Driver Shows
//!
//! [`driver::ScenarioReport`] classifies each scenario's attack prompt and
//! unprotected response and records which layers actually trigger. The
//! interesting rows are the ones where *nothing* triggers: the gradual
//! escalation attack uses only innocuous words, and the refund override
//! slips past the high-value-refund rule because the formatted amount
//! (`$1,249.99`) defeats it. Those gaps are the lesson - they are why the
//! defense stack has more than one layer.
//!
//! ## Modules
//!
//! - [`agent`] - the demo deployment: system prompts and seeded customers
//! - [`catalog`] - the six attack scenarios
//! - [`defense`] - the five defense layers and their metadata
//! - [`driver`] - scenario reports and the coverage matrix
//! - [`simulate`] - canned breach responses for attacks against an
//!   unguarded, non-safety-trained model
//! - [`impact`] - breach-cost and guardrail-ROI arithmetic

pub mod agent;
pub mod catalog;
pub mod defense;
pub mod driver;
pub mod impact;
pub mod simulate;

pub use catalog::{catalog, AttackCategory, AttackScenario, Difficulty};
pub use defense::Defense;
pub use driver::{run_all, CoverageMatrix, ScenarioReport};
pub use impact::{BreachEstimate, Industry, IndustryProfile};
pub use simulate::{SimulatedBreach, VulnerableResponder};
