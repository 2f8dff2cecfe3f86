use serde::Serialize;

use super::pricing::{CostError, PricingBook, Provider, StorageClass};

/// One month of usage to price.
#[derive(Debug, Clone, Copy)]
pub struct UsageInput {
    pub provider: Provider,
    pub storage_class: StorageClass,
    /// GB-months stored.
    pub storage_gb: f64,
    /// GB transferred out to the internet.
    pub transfer_out_gb: f64,
    pub get_requests: u64,
    pub put_requests: u64,
}

/// Monthly cost of one usage profile, split by component.
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    pub provider: Provider,
    pub storage_class: StorageClass,
    pub storage: f64,
    pub retrieval: f64,
    pub operations: f64,
    pub network: f64,
    pub total: f64,
}

/// Price one month of usage against `pricing`.
///
/// Retrieval only bills classes that define a retrieval rate; standard
/// classes read back free. Network egress uses the shared tier schedule
/// regardless of provider.
///
/// # Errors
///
/// `UnknownStorageClass` when the provider's table has no entry for the
/// requested class.
pub fn compute_cost(usage: &UsageInput, pricing: &PricingBook) -> Result<CostBreakdown, CostError> {
    let rates = pricing.table(usage.provider).rates(usage.storage_class)?;

    let storage = usage.storage_gb * rates.storage_per_gb;
    let retrieval = rates
        .retrieval_per_gb
        .map_or(0.0, |rate| usage.transfer_out_gb * rate);
    let operations = rates
        .operations
        .cost(usage.get_requests, usage.put_requests);
    let network = pricing.egress.cost(usage.transfer_out_gb);

    Ok(CostBreakdown {
        provider: usage.provider,
        storage_class: usage.storage_class,
        storage,
        retrieval,
        operations,
        network,
        total: storage + retrieval + operations + network,
    })
}

/// Outcome of putting two priced breakdowns side by side.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub cheaper: Provider,
    pub absolute_diff: f64,
    pub percent_diff: f64,
}

/// Compare two priced breakdowns.
///
/// On exactly equal totals the first argument wins. `percent_diff` is the
/// difference relative to the more expensive side (0 when both totals are
/// zero), so swapping the arguments flips `cheaper` but leaves both diffs
/// identical.
pub fn compare_costs(first: &CostBreakdown, second: &CostBreakdown) -> Comparison {
    let cheaper = if first.total <= second.total {
        first.provider
    } else {
        second.provider
    };
    let absolute_diff = (first.total - second.total).abs();
    let max_total = first.total.max(second.total);
    let percent_diff = if max_total > 0.0 {
        absolute_diff / max_total * 100.0
    } else {
        0.0
    };

    Comparison {
        cheaper,
        absolute_diff,
        percent_diff,
    }
}
