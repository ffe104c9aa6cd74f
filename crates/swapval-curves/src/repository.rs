//! Curve and fixing lookup by index, tenor and currency.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use swapval_core::{Date, Tenor};

use crate::curve::ZeroCurve;
use crate::error::{CurveError, CurveResult};

/// Whether a lookup wants the discounting curve or the forward projection
/// curve. The two roles carry independent mapping tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveRole {
    /// Curve used to discount cash flows.
    Discount,
    /// Curve used to project forward index rates.
    Forward,
}

impl CurveRole {
    const fn label(self) -> &'static str {
        match self {
            Self::Discount => "discount curve",
            Self::Forward => "forward curve",
        }
    }
}

/// Loaded curves, the mapping tables that name them, and historic index
/// fixings.
///
/// Mapping keys narrow from most to least specific: `"INDEX TENOR"`
/// (e.g. `EUR-EURIBOR-Reuters 6M`), then the bare index name, then the
/// currency code. Lookups walk that chain and fail with
/// [`CurveError::MissingMapping`] when no level matches. Fixings use the
/// same chain without the currency level.
///
/// Populated once during the load phase; afterwards every lookup is
/// read-only and the shared data sits behind `Arc`s.
#[derive(Debug, Clone, Default)]
pub struct CurveRepository {
    curves: BTreeMap<String, Arc<ZeroCurve>>,
    discount_mappings: BTreeMap<String, String>,
    forward_mappings: BTreeMap<String, String>,
    fixings: BTreeMap<String, Arc<BTreeMap<Date, f64>>>,
}

impl CurveRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a curve, replacing any previous curve with the same name.
    pub fn insert_curve(&mut self, curve: ZeroCurve) {
        self.curves
            .insert(curve.name().to_string(), Arc::new(curve));
    }

    /// Maps a lookup key (index-with-tenor, bare index, or currency) to a
    /// curve name for the given role.
    pub fn insert_mapping(
        &mut self,
        role: CurveRole,
        key: impl Into<String>,
        curve_name: impl Into<String>,
    ) {
        let table = match role {
            CurveRole::Discount => &mut self.discount_mappings,
            CurveRole::Forward => &mut self.forward_mappings,
        };
        table.insert(key.into(), curve_name.into());
    }

    /// Adds historic fixings under a lookup key (index-with-tenor or bare
    /// index).
    pub fn insert_fixings(&mut self, key: impl Into<String>, rates: BTreeMap<Date, f64>) {
        self.fixings.insert(key.into(), Arc::new(rates));
    }

    /// Resolves the curve name for a role, walking from `"INDEX TENOR"`
    /// through the bare index down to the currency.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::MissingMapping`] when no level of the chain
    /// is mapped.
    pub fn resolve_curve_name(
        &self,
        role: CurveRole,
        currency: &str,
        index: Option<&str>,
        tenor: Option<Tenor>,
    ) -> CurveResult<&str> {
        let table = match role {
            CurveRole::Discount => &self.discount_mappings,
            CurveRole::Forward => &self.forward_mappings,
        };
        let mut tried = Vec::with_capacity(3);
        if let Some(index) = index {
            if let Some(tenor) = tenor {
                let key = format!("{index} {tenor}");
                if let Some(name) = table.get(&key) {
                    return Ok(name);
                }
                debug!("no {} mapping for {key}, trying {index}", role.label());
                tried.push(key);
            }
            if let Some(name) = table.get(index) {
                return Ok(name);
            }
            debug!("no {} mapping for {index}, trying {currency}", role.label());
            tried.push(index.to_string());
        }
        if let Some(name) = table.get(currency) {
            return Ok(name);
        }
        tried.push(currency.to_string());
        Err(CurveError::missing_mapping(role.label(), tried.join(", ")))
    }

    /// Looks up a loaded curve by name.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::CurveNotFound`] for unknown names.
    pub fn curve(&self, name: &str) -> CurveResult<Arc<ZeroCurve>> {
        self.curves
            .get(name)
            .cloned()
            .ok_or_else(|| CurveError::curve_not_found(name))
    }

    /// Resolves and returns the curve for a role in one step.
    ///
    /// # Errors
    ///
    /// As for [`CurveRepository::resolve_curve_name`] and
    /// [`CurveRepository::curve`].
    pub fn resolve_curve(
        &self,
        role: CurveRole,
        currency: &str,
        index: Option<&str>,
        tenor: Option<Tenor>,
    ) -> CurveResult<Arc<ZeroCurve>> {
        let name = self.resolve_curve_name(role, currency, index, tenor)?;
        self.curve(name)
    }

    /// Historic fixings for an index, trying `"INDEX TENOR"` first and the
    /// bare index second. There is no currency fallback for fixings.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::MissingMapping`] when neither key is loaded.
    pub fn historic_fixings(
        &self,
        index: &str,
        tenor: Option<Tenor>,
    ) -> CurveResult<Arc<BTreeMap<Date, f64>>> {
        if let Some(tenor) = tenor {
            let key = format!("{index} {tenor}");
            if let Some(rates) = self.fixings.get(&key) {
                return Ok(Arc::clone(rates));
            }
            debug!("no fixings for {key}, trying {index}");
        }
        self.fixings
            .get(index)
            .map(Arc::clone)
            .ok_or_else(|| CurveError::missing_mapping("fixings", index))
    }
}
