use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::{debug, warn};

use crate::{config::RateTable, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Built-in direct rates, before caller overrides and reciprocals.
pub const DEFAULT_RATES: &[(&str, &str, f64)] = &[("eur", "pln", 4.22)];

/// Currencies as nodes, known conversion factors as weighted edges.
///
/// `edges[from][to]` is how many units of `to` one unit of `from` buys. The
/// graph is built once per evaluation: built-in defaults, then caller
/// overrides, then the reciprocal of every rate whose reverse edge is still
/// missing. The result is effectively undirected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateGraph {
    edges: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RateGraph {
    /// Builds the graph from the defaults and optional overrides.
    ///
    /// The defaults are mirrored first. Every caller rate then replaces the
    /// edge in both directions, its reverse set to `1 / rate`, unless the
    /// caller supplied that reverse explicitly. Codes are case-folded. Rates
    /// that are not finite and positive are skipped.
    ///
    /// ## Example
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use fermi::interpreter::rates::RateGraph;
    ///
    /// let graph = RateGraph::new(None);
    /// assert_eq!(graph.direct("eur", "pln"), Some(4.22));
    /// assert_eq!(graph.direct("pln", "eur"), Some(1.0 / 4.22));
    ///
    /// let rates = BTreeMap::from([("pln".to_string(), BTreeMap::from([("eur".to_string(), 0.25)]))]);
    /// let graph = RateGraph::new(Some(&rates));
    /// assert_eq!(graph.direct("eur", "pln"), Some(4.0));
    /// ```
    #[must_use]
    pub fn new(overrides: Option<&RateTable>) -> Self {
        let mut graph = Self::default();

        for (from, to, rate) in DEFAULT_RATES {
            graph.insert_pair(from, to, *rate);
        }

        let overrides: Vec<(&str, &str, f64)> =
            overrides.into_iter()
                     .flatten()
                     .flat_map(|(from, targets)| {
                         targets.iter().map(move |(to, rate)| (from.as_str(), to.as_str(), *rate))
                     })
                     .collect();
        for (from, to, rate) in &overrides {
            graph.insert_pair(from, to, *rate);
        }
        // Explicit caller rates win over reciprocals of other caller rates.
        for (from, to, rate) in overrides.iter().filter(|(_, _, rate)| is_valid_rate(*rate)) {
            graph.insert(from, to, *rate);
        }

        graph
    }

    fn insert(&mut self, from: &str, to: &str, rate: f64) -> bool {
        if !is_valid_rate(rate) {
            warn!(from, to, rate, "ignoring invalid exchange rate");
            return false;
        }
        self.edges
            .entry(from.to_lowercase())
            .or_default()
            .insert(to.to_lowercase(), rate);
        true
    }

    /// Sets `from -> to` and its reciprocal `to -> from`.
    fn insert_pair(&mut self, from: &str, to: &str, rate: f64) {
        if self.insert(from, to, rate) {
            self.edges
                .entry(to.to_lowercase())
                .or_default()
                .insert(from.to_lowercase(), 1.0 / rate);
        }
    }

    /// The direct edge `from -> to`, if present.
    #[must_use]
    pub fn direct(&self, from: &str, to: &str) -> Option<f64> {
        self.edges.get(from)?.get(to).copied()
    }

    /// Every currency that appears in the graph.
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Looks up the factor converting one unit of `from` into `to`.
    ///
    /// Tries the direct edge, then the reciprocal of the reverse edge, then a
    /// breadth-first search for a bridging path. The first path found wins,
    /// which is the shortest by hop count, not necessarily the most precise.
    ///
    /// # Errors
    /// [`RuntimeError::MissingExchangeRate`] when no path connects the two.
    ///
    /// ## Example
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use fermi::interpreter::rates::RateGraph;
    ///
    /// let mut rates = BTreeMap::new();
    /// rates.insert("usd".to_string(), BTreeMap::from([("eur".to_string(), 0.5)]));
    /// let graph = RateGraph::new(Some(&rates));
    ///
    /// // usd -> eur -> pln
    /// assert!((graph.rate("usd", "pln").unwrap() - 2.11).abs() < 1e-12);
    /// assert!(graph.rate("usd", "xyz").is_err());
    /// ```
    pub fn rate(&self, from: &str, to: &str) -> EvalResult<f64> {
        if from == to {
            return Ok(1.0);
        }
        if let Some(rate) = self.direct(from, to) {
            debug!(from, to, rate, "direct exchange rate");
            return Ok(rate);
        }
        if let Some(reverse) = self.direct(to, from) {
            debug!(from, to, reverse, "reciprocal exchange rate");
            return Ok(1.0 / reverse);
        }
        self.bridge(from, to)
            .ok_or_else(|| RuntimeError::MissingExchangeRate { from: from.to_string(),
                                                               to:   to.to_string(), })
    }

    /// Breadth-first search multiplying edge rates along the path.
    fn bridge(&self, from: &str, to: &str) -> Option<f64> {
        let mut visited = BTreeSet::from([from]);
        let mut queue = VecDeque::from([(from, 1.0, 0_usize)]);

        while let Some((currency, accumulated, hops)) = queue.pop_front() {
            let Some(targets) = self.edges.get(currency) else {
                continue;
            };
            for (next, rate) in targets {
                let next = next.as_str();
                if !visited.insert(next) {
                    continue;
                }
                let total = accumulated * rate;
                if next == to {
                    debug!(from, to, rate = total, hops = hops + 1, "bridged exchange rate");
                    return Some(total);
                }
                queue.push_back((next, total, hops + 1));
            }
        }

        None
    }
}

fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}
