//! Expansion of typing units into every accepted romaji spelling.
//!
//! Units are tried against, in order: ASCII pass-through, the bare
//! trailing っ/ん special cases, a direct table hit, and finally a
//! decomposition into known sub-symbols whose spellings are multiplied out
//! and filtered by the join rules in [`filter`].
//!
//! The decomposition path walks the full product of every part's
//! spellings. A run of k っ costs 5^k tuples, and the accepted output is
//! itself exponential in k (5, 22, 98, 436 for k = 1..=4 before と), so long
//! marker runs are slow by nature. `segment` only builds such units from
//! literal runs of っ or ん in the input.

mod decompose;
mod filter;
mod product;


use tracing::{debug, debug_span, warn};

use crate::candidate::CandidateSet;
use crate::error::ExpandError;
use crate::romaji::{is_marker, Alternative, MoraTable, HATSUON, SOKUON};
use crate::unicode::{is_typeable, normalize_unit, YEN};

use product::CartesianProduct;

/// Expands units against one table.
#[derive(Clone, Copy)]
pub struct Expander<'t> {
    table: &'t MoraTable,
}

impl<'t> Expander<'t> {
    pub fn new(table: &'t MoraTable) -> Self {
        Self { table }
    }

    pub fn global() -> Expander<'static> {
        Expander::new(MoraTable::global())
    }

    /// Candidate sets for each unit, in order. Fails on the first unit that
    /// cannot be typed.
    pub fn expand<S: AsRef<str>>(&self, units: &[S]) -> Result<Vec<CandidateSet>, ExpandError> {
        let _span = debug_span!("expand", unit_count = units.len()).entered();
        units
            .iter()
            .map(|unit| self.expand_unit(unit.as_ref()))
            .collect()
    }

    pub fn expand_unit(&self, unit: &str) -> Result<CandidateSet, ExpandError> {
        if unit.is_empty() {
            return Err(ExpandError::Unconvertible {
                unit: String::new(),
            });
        }

        let normalized = normalize_unit(unit);
        let spellings = self.spellings(&normalized);

        if let Some(bad) = spellings.iter().find(|s| !is_typeable(s)) {
            return Err(ExpandError::NonTypeable {
                unit: unit.to_string(),
                spelling: bad.clone(),
            });
        }
        if spellings.is_empty() {
            return Err(ExpandError::Unconvertible {
                unit: unit.to_string(),
            });
        }
        Ok(spellings.into_iter().collect())
    }

    fn spellings(&self, unit: &str) -> Vec<String> {
        if unit.is_ascii() || unit == YEN {
            return vec![unit.to_string()];
        }

        let mut chars = unit.chars();
        match (chars.next(), chars.next()) {
            // Nothing follows: "n" alone would read as the start of な etc.
            (Some(HATSUON), None) => {
                return self.literals(unit, |s| s != "n");
            }
            (Some(SOKUON), None) => {
                return self.literals(unit, |_| true);
            }
            _ => {}
        }

        if self.table.contains(unit) {
            return self.literals(unit, |_| true);
        }
        self.decompose_and_join(unit)
    }

    fn literals(&self, unit: &str, keep: impl Fn(&str) -> bool) -> Vec<String> {
        self.table
            .moras(unit)
            .unwrap_or_default()
            .iter()
            .filter_map(Alternative::as_literal)
            .filter(|s| keep(s))
            .map(str::to_string)
            .collect()
    }

    fn decompose_and_join(&self, unit: &str) -> Vec<String> {
        let parts = decompose::decompose(self.table, unit);
        if is_marker_pair(&parts) {
            debug!(unit, "marker unit, expanding by decomposition");
        } else {
            warn!(unit, "unusual unit, expanding by decomposition");
        }

        let alternatives: Vec<_> = parts
            .iter()
            .map(|part| decompose::alternatives(self.table, part))
            .collect();
        let product = CartesianProduct::new(alternatives.iter().map(|a| &a[..]).collect());
        let tuples = product.total();

        let joined: Vec<String> = product.filter_map(|tuple| filter::join(&tuple)).collect();
        debug!(parts = parts.len(), tuples, accepted = joined.len());
        joined
    }
}

/// っ or ん followed by one other sub-symbol, the everyday shape.
fn is_marker_pair(parts: &[String]) -> bool {
    match parts {
        [marker, _] => {
            let mut chars = marker.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if is_marker(c))
        }
        _ => false,
    }
}

/// Expand one unit with the global table.
pub fn expand_unit(unit: &str) -> Result<CandidateSet, ExpandError> {
    Expander::global().expand_unit(unit)
}

/// Expand a unit sequence with the global table.
pub fn expand<S: AsRef<str>>(units: &[S]) -> Result<Vec<CandidateSet>, ExpandError> {
    Expander::global().expand(units)
}
