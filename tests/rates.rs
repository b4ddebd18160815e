use std::collections::BTreeMap;

use fermi::{
    config::RateTable,
    error::RuntimeError,
    interpreter::rates::{DEFAULT_RATES, RateGraph},
};
use pretty_assertions::assert_eq;

fn table(entries: &[(&str, &str, f64)]) -> RateTable {
    let mut table: RateTable = BTreeMap::new();
    for (from, to, rate) in entries {
        table.entry((*from).to_string())
             .or_default()
             .insert((*to).to_string(), *rate);
    }
    table
}

#[test]
fn defaults_are_loaded_with_reciprocals() {
    let graph = RateGraph::new(None);
    for (from, to, rate) in DEFAULT_RATES {
        assert_eq!(graph.rate(from, to).unwrap(), *rate);
        assert_eq!(graph.rate(to, from).unwrap(), 1.0 / rate);
    }
    assert_eq!(graph.currencies().collect::<Vec<_>>(), vec!["eur", "pln"]);
}

#[test]
fn same_currency_is_identity_even_when_unknown() {
    let graph = RateGraph::new(None);
    assert_eq!(graph.rate("xyz", "xyz").unwrap(), 1.0);
}

#[test]
fn overrides_replace_defaults() {
    let graph = RateGraph::new(Some(&table(&[("eur", "pln", 4.0)])));
    assert_eq!(graph.rate("eur", "pln").unwrap(), 4.0);
    assert_eq!(graph.rate("pln", "eur").unwrap(), 0.25);
}

#[test]
fn caller_rate_replaces_default_in_reverse() {
    let graph = RateGraph::new(Some(&table(&[("pln", "eur", 0.25)])));
    assert_eq!(graph.rate("pln", "eur").unwrap(), 0.25);
    assert_eq!(graph.rate("eur", "pln").unwrap(), 4.0);
    assert_eq!(graph.rate("pln", "eur").unwrap() * graph.rate("eur", "pln").unwrap(), 1.0);
}

#[test]
fn explicit_rates_in_both_directions_are_kept() {
    let graph = RateGraph::new(Some(&table(&[("eur", "usd", 1.1), ("usd", "eur", 0.9)])));
    assert_eq!(graph.direct("eur", "usd"), Some(1.1));
    assert_eq!(graph.direct("usd", "eur"), Some(0.9));
}

#[test]
fn invalid_override_keeps_default() {
    let graph = RateGraph::new(Some(&table(&[("pln", "eur", -1.0)])));
    assert_eq!(graph.direct("eur", "pln"), Some(4.22));
}

#[test]
fn codes_are_case_folded() {
    let graph = RateGraph::new(Some(&table(&[("USD", "EUR", 0.5)])));
    assert_eq!(graph.direct("usd", "eur"), Some(0.5));
    assert_eq!(graph.direct("eur", "usd"), Some(2.0));
}

#[test]
fn invalid_rates_are_skipped() {
    let graph = RateGraph::new(Some(&table(&[("usd", "eur", 0.0),
                                             ("gbp", "eur", -1.0),
                                             ("chf", "eur", f64::NAN)])));
    for code in ["usd", "gbp", "chf"] {
        assert_eq!(graph.direct(code, "eur"), None);
        assert!(graph.rate(code, "eur").is_err());
    }
}

#[test]
fn bridge_multiplies_along_the_path() {
    let graph = RateGraph::new(Some(&table(&[("usd", "eur", 0.5), ("gbp", "usd", 1.25)])));
    // gbp -> usd -> eur -> pln
    let rate = graph.rate("gbp", "pln").unwrap();
    assert!((rate - 1.25 * 0.5 * 4.22).abs() < 1e-12);

    let back = graph.rate("pln", "gbp").unwrap();
    assert!((rate * back - 1.0).abs() < 1e-12);
}

#[test]
fn bridge_prefers_fewest_hops() {
    let graph = RateGraph::new(Some(&table(&[("aaa", "bbb", 2.0),
                                             ("bbb", "ccc", 3.0),
                                             ("ccc", "ddd", 5.0),
                                             ("aaa", "zzz", 7.0),
                                             ("zzz", "ddd", 11.0)])));
    // Both aaa -> bbb -> ccc -> ddd and aaa -> zzz -> ddd exist.
    assert_eq!(graph.rate("aaa", "ddd").unwrap(), 77.0);
}

#[test]
fn equally_short_paths_resolve_in_code_order() {
    let graph = RateGraph::new(Some(&table(&[("aaa", "bbb", 2.0),
                                             ("bbb", "ccc", 3.0),
                                             ("aaa", "ddd", 10.0),
                                             ("ddd", "ccc", 10.0)])));
    assert_eq!(graph.rate("aaa", "ccc").unwrap(), 6.0);
}

#[test]
fn disconnected_currencies_have_no_rate() {
    let graph = RateGraph::new(Some(&table(&[("usd", "cad", 1.35)])));
    let err = graph.rate("usd", "pln").unwrap_err();

    assert_eq!(err,
               RuntimeError::MissingExchangeRate { from: "usd".to_string(),
                                                   to:   "pln".to_string(), });
    assert_eq!(err.to_string(), "Missing exchange rate path from USD to PLN.");
}
