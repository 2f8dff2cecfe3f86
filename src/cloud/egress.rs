/// One tier of the egress schedule. Traffic between the previous tier's
/// boundary and `upper_gb` is priced at `per_gb`; `None` means unbounded.
#[derive(Debug, Clone, Copy)]
pub struct EgressTier {
    pub upper_gb: Option<f64>,
    pub per_gb: f64,
}

/// Tiered internet egress pricing, shared by both providers.
///
/// The first `free_gb` of a month's traffic costs nothing, but once usage
/// moves past the allowance the first tier's rate applies to the *whole*
/// volume, free gigabyte included. Only the later tiers are marginal.
/// That asymmetry matches how the providers publish the schedule.
#[derive(Debug, Clone)]
pub struct EgressSchedule {
    pub free_gb: f64,
    pub tiers: Vec<EgressTier>,
}

impl Default for EgressSchedule {
    fn default() -> Self {
        Self {
            free_gb: 1.0,
            tiers: vec![
                EgressTier {
                    upper_gb: Some(10_240.0),
                    per_gb: 0.085,
                },
                EgressTier {
                    upper_gb: Some(51_200.0),
                    per_gb: 0.065,
                },
                EgressTier {
                    upper_gb: None,
                    per_gb: 0.05,
                },
            ],
        }
    }
}

impl EgressSchedule {
    /// Cost of `gb` of outbound transfer in one month.
    pub fn cost(&self, gb: f64) -> f64 {
        if gb <= self.free_gb {
            return 0.0;
        }

        let mut total = 0.0;
        let mut lower = 0.0;
        for tier in &self.tiers {
            match tier.upper_gb {
                Some(upper) if gb > upper => {
                    total += (upper - lower) * tier.per_gb;
                    lower = upper;
                }
                _ => {
                    total += (gb - lower) * tier.per_gb;
                    break;
                }
            }
        }
        total
    }
}
