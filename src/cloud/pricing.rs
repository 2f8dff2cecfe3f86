use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use super::egress::EgressSchedule;

/// Providers the estimator knows how to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum Provider {
    Gcp,
    Aws,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Gcp => write!(f, "GCP"),
            Provider::Aws => write!(f, "AWS"),
        }
    }
}

/// Storage classes across both providers.
///
/// Each provider only sells a subset; asking a provider for a class it
/// does not offer is an error, never a fallback to some other class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum StorageClass {
    Standard,
    Nearline,
    Coldline,
    Archive,
    StandardIa,
    Glacier,
    DeepArchive,
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageClass::Standard => "standard",
            StorageClass::Nearline => "nearline",
            StorageClass::Coldline => "coldline",
            StorageClass::Archive => "archive",
            StorageClass::StandardIa => "standard-ia",
            StorageClass::Glacier => "glacier",
            StorageClass::DeepArchive => "deep-archive",
        };
        write!(f, "{name}")
    }
}

/// Errors from pricing lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostError {
    /// The provider does not sell the requested storage class.
    #[error("{provider} has no storage class '{class}'")]
    UnknownStorageClass {
        provider: Provider,
        class: StorageClass,
    },
}

/// How a provider charges for requests.
#[derive(Debug, Clone, Copy)]
pub enum OperationRates {
    /// GCP groups operations into classes: writes are class A, reads are
    /// class B, both priced in USD per 10,000 operations.
    PerClass { class_a: f64, class_b: f64 },
    /// AWS prices PUT and GET requests directly, in USD per 1,000 requests.
    PerRequest { put: f64, get: f64 },
}

impl OperationRates {
    /// Cost of a month of requests under this rate structure.
    pub fn cost(&self, get_requests: u64, put_requests: u64) -> f64 {
        match *self {
            OperationRates::PerClass { class_a, class_b } => {
                put_requests as f64 * (class_a / 10_000.0)
                    + get_requests as f64 * (class_b / 10_000.0)
            }
            OperationRates::PerRequest { put, get } => {
                put_requests as f64 * (put / 1_000.0) + get_requests as f64 * (get / 1_000.0)
            }
        }
    }
}

/// Monthly rates for one storage class.
#[derive(Debug, Clone, Copy)]
pub struct ClassRates {
    /// USD per GB-month stored.
    pub storage_per_gb: f64,
    /// USD per GB read back out of the class. Frequent-access classes
    /// read back free and carry no rate at all.
    pub retrieval_per_gb: Option<f64>,
    pub operations: OperationRates,
}

/// Published rates for one provider, keyed by storage class.
#[derive(Debug, Clone)]
pub struct PricingTable {
    pub provider: Provider,
    classes: Vec<(StorageClass, ClassRates)>,
}

impl PricingTable {
    pub fn new(provider: Provider, classes: Vec<(StorageClass, ClassRates)>) -> Self {
        Self { provider, classes }
    }

    /// Rates for `class`, or `UnknownStorageClass` when this provider
    /// does not offer it.
    pub fn rates(&self, class: StorageClass) -> Result<&ClassRates, CostError> {
        self.classes
            .iter()
            .find(|(offered, _)| *offered == class)
            .map(|(_, rates)| rates)
            .ok_or(CostError::UnknownStorageClass {
                provider: self.provider,
                class,
            })
    }
}

/// Both providers' rate tables plus the shared egress schedule.
///
/// Built once at startup and passed explicitly to every computation, so
/// tests can substitute their own numbers without touching global state.
#[derive(Debug, Clone)]
pub struct PricingBook {
    pub gcp: PricingTable,
    pub aws: PricingTable,
    pub egress: EgressSchedule,
}

impl PricingBook {
    pub fn table(&self, provider: Provider) -> &PricingTable {
        match provider {
            Provider::Gcp => &self.gcp,
            Provider::Aws => &self.aws,
        }
    }
}

impl Default for PricingBook {
    /// List prices for the default US regions.
    fn default() -> Self {
        let gcp = PricingTable::new(
            Provider::Gcp,
            vec![
                (
                    StorageClass::Standard,
                    ClassRates {
                        storage_per_gb: 0.0203,
                        retrieval_per_gb: None,
                        operations: OperationRates::PerClass {
                            class_a: 0.05,
                            class_b: 0.004,
                        },
                    },
                ),
                (
                    StorageClass::Nearline,
                    ClassRates {
                        storage_per_gb: 0.010,
                        retrieval_per_gb: Some(0.01),
                        operations: OperationRates::PerClass {
                            class_a: 0.10,
                            class_b: 0.01,
                        },
                    },
                ),
                (
                    StorageClass::Coldline,
                    ClassRates {
                        storage_per_gb: 0.004,
                        retrieval_per_gb: Some(0.02),
                        operations: OperationRates::PerClass {
                            class_a: 0.10,
                            class_b: 0.05,
                        },
                    },
                ),
                (
                    StorageClass::Archive,
                    ClassRates {
                        storage_per_gb: 0.0012,
                        retrieval_per_gb: Some(0.05),
                        operations: OperationRates::PerClass {
                            class_a: 0.50,
                            class_b: 0.50,
                        },
                    },
                ),
            ],
        );

        let aws = PricingTable::new(
            Provider::Aws,
            vec![
                (
                    StorageClass::Standard,
                    ClassRates {
                        storage_per_gb: 0.023,
                        retrieval_per_gb: None,
                        operations: OperationRates::PerRequest {
                            put: 0.005,
                            get: 0.0004,
                        },
                    },
                ),
                (
                    StorageClass::StandardIa,
                    ClassRates {
                        storage_per_gb: 0.0125,
                        retrieval_per_gb: Some(0.01),
                        operations: OperationRates::PerRequest {
                            put: 0.01,
                            get: 0.001,
                        },
                    },
                ),
                (
                    StorageClass::Glacier,
                    ClassRates {
                        storage_per_gb: 0.0036,
                        retrieval_per_gb: Some(0.01),
                        operations: OperationRates::PerRequest {
                            put: 0.03,
                            get: 0.0004,
                        },
                    },
                ),
                (
                    StorageClass::DeepArchive,
                    ClassRates {
                        storage_per_gb: 0.00099,
                        retrieval_per_gb: Some(0.02),
                        operations: OperationRates::PerRequest {
                            put: 0.05,
                            get: 0.0004,
                        },
                    },
                ),
            ],
        );

        Self {
            gcp,
            aws,
            egress: EgressSchedule::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_gcp_offers_its_own_classes() {
        let book = PricingBook::default();
        for class in [
            StorageClass::Standard,
            StorageClass::Nearline,
            StorageClass::Coldline,
            StorageClass::Archive,
        ] {
            assert!(book.gcp.rates(class).is_ok(), "GCP should offer {class}");
        }
    }

    #[test]
    fn test_aws_offers_its_own_classes() {
        let book = PricingBook::default();
        for class in [
            StorageClass::Standard,
            StorageClass::StandardIa,
            StorageClass::Glacier,
            StorageClass::DeepArchive,
        ] {
            assert!(book.aws.rates(class).is_ok(), "AWS should offer {class}");
        }
    }

    #[test]
    fn test_unknown_class_is_an_error() {
        let book = PricingBook::default();
        let error = book.gcp.rates(StorageClass::Glacier).unwrap_err();
        assert_eq!(
            error,
            CostError::UnknownStorageClass {
                provider: Provider::Gcp,
                class: StorageClass::Glacier,
            }
        );

        assert!(book.aws.rates(StorageClass::Nearline).is_err());
    }

    #[test]
    fn test_error_message_names_provider_and_class() {
        let error = CostError::UnknownStorageClass {
            provider: Provider::Gcp,
            class: StorageClass::Glacier,
        };
        assert_eq!(error.to_string(), "GCP has no storage class 'glacier'");
    }

    #[test]
    fn test_standard_classes_have_no_retrieval_rate() {
        let book = PricingBook::default();
        assert!(book
            .gcp
            .rates(StorageClass::Standard)
            .unwrap()
            .retrieval_per_gb
            .is_none());
        assert!(book
            .aws
            .rates(StorageClass::Standard)
            .unwrap()
            .retrieval_per_gb
            .is_none());
    }

    #[test]
    fn test_per_class_operation_cost() {
        // GCP standard: 10k writes at 0.05/10k + 100k reads at 0.004/10k
        let rates = OperationRates::PerClass {
            class_a: 0.05,
            class_b: 0.004,
        };
        assert!((rates.cost(100_000, 10_000) - 0.09).abs() < EPS);
    }

    #[test]
    fn test_per_request_operation_cost() {
        // AWS standard: 10k PUTs at 0.005/1k + 100k GETs at 0.0004/1k
        let rates = OperationRates::PerRequest {
            put: 0.005,
            get: 0.0004,
        };
        assert!((rates.cost(100_000, 10_000) - 0.09).abs() < EPS);
    }

    #[test]
    fn test_zero_requests_cost_nothing() {
        let rates = OperationRates::PerClass {
            class_a: 0.05,
            class_b: 0.004,
        };
        assert_eq!(rates.cost(0, 0), 0.0);
    }
}
