use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

/// Number of Monte-Carlo draws used when the caller does not ask otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;

/// Direct conversion rates: `table[from][to]` units of `to` per unit of `from`.
pub type RateTable = BTreeMap<String, BTreeMap<String, f64>>;

/// Options accepted by [`crate::evaluate_expression_with_steps`].
///
/// ## Example
/// ```
/// use fermi::config::EvaluationOptions;
///
/// let options: EvaluationOptions =
///     serde_json::from_str(r#"{ "currencyRates": { "eur": { "usd": 1.08 } }, "seed": 7 }"#).unwrap();
/// assert_eq!(options.seed, Some(7));
/// assert_eq!(options.currency_rates.unwrap()["eur"]["usd"], 1.08);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationOptions {
    /// Caller-supplied rates, overlaid on the built-in defaults.
    #[serde(default)]
    pub currency_rates: Option<RateTable>,
    /// Seed for the sampler. `None` seeds from the operating system.
    #[serde(default)]
    pub seed:           Option<u64>,
}

impl EvaluationOptions {
    /// Options with the given rate table and no seed.
    #[must_use]
    pub fn with_rates(rates: RateTable) -> Self {
        Self { currency_rates: Some(rates),
               seed:           None, }
    }

    /// Returns a copy that samples deterministically from `seed`.
    #[must_use]
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reads options from a JSON file.
    ///
    /// # Errors
    /// Fails when the file cannot be opened or does not hold valid options.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
