pub mod egress;
pub mod engine;
pub mod pricing;

pub use egress::{EgressSchedule, EgressTier};
pub use engine::{compare_costs, compute_cost, Comparison, CostBreakdown, UsageInput};
pub use pricing::{
    ClassRates, CostError, OperationRates, PricingBook, PricingTable, Provider, StorageClass,
};
