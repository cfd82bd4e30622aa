//! Serde models for the formatted EC2 pricing document (`price.fmt.json`).

use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
pub struct PricingDocument {
    pub config: PricingConfig,
}

#[derive(Deserialize)]
pub struct PricingConfig {
    pub regions: Vec<RegionPricing>,
}

#[derive(Deserialize)]
pub struct RegionPricing {
    pub region: String,

    #[serde(rename = "instanceTypes")]
    pub instance_types: Vec<InstanceTypePricing>,
}

#[derive(Deserialize)]
pub struct InstanceTypePricing {
    #[serde(rename = "type")]
    pub instance_type: String,

    pub terms: Vec<Term>,
}

#[derive(Deserialize)]
pub struct Term {
    /// Term label, for example `yrTerm1` or `yrTerm3`.
    pub term: String,

    #[serde(rename = "onDemandHourly")]
    pub on_demand_hourly: Vec<ValueColumn>,

    #[serde(rename = "purchaseOptions")]
    pub purchase_options: Vec<PurchaseOption>,
}

#[derive(Deserialize)]
pub struct PurchaseOption {
    #[serde(rename = "purchaseOption")]
    pub purchase_option: String,

    /// Stated savings over the on-demand plan, in percent.
    #[serde(rename = "savingsOverOD", default)]
    pub savings_over_od: Option<f64>,

    #[serde(rename = "valueColumns")]
    pub value_columns: Vec<ValueColumn>,
}

#[derive(Deserialize)]
pub struct ValueColumn {
    pub name: String,
    pub prices: Prices,
}

#[derive(Deserialize)]
pub struct Prices {
    #[serde(rename = "USD", deserialize_with = "Prices::deserialize_usd")]
    pub usd: f64,
}

impl Prices {
    /// The feed carries USD amounts both as numbers and as decimal strings.
    fn deserialize_usd<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawUsd {
            Number(f64),
            Text(String),
        }

        match RawUsd::deserialize(deserializer)? {
            RawUsd::Number(value) => Ok(value),
            RawUsd::Text(text) => f64::from_str(&text).map_err(|_| {
                de::Error::invalid_value(de::Unexpected::Str(&text), &"a decimal USD amount")
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    use super::*;

    #[test]
    fn test_usd_as_string() -> Result {
        let prices: Prices = serde_json::from_str(r#"{"USD": "0.013"}"#)?;
        assert_eq!(prices.usd, 0.013);
        Ok(())
    }

    #[test]
    fn test_usd_as_number() -> Result {
        let prices: Prices = serde_json::from_str(r#"{"USD": 100.0}"#)?;
        assert_eq!(prices.usd, 100.0);
        Ok(())
    }

    #[test]
    fn test_usd_garbage_fails() {
        assert!(serde_json::from_str::<Prices>(r#"{"USD": "N/A"}"#).is_err());
    }
}
