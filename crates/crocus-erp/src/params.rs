//! Bridge between decoded grid configurations and ERP calculators.

use crocus_params::{ParamDimension, ParamSet, ParamSpace};

use crate::erp::Erp;
use crate::error::ElasticError;
use crate::window::WarpingWindow;

/// Flag under which the gap penalty is resolved.
pub const PENALTY_FLAG: &str = "penalty";

/// Flag under which the signed warping window is resolved (negative means
/// unconstrained).
pub const WINDOW_FLAG: &str = "window";

/// Build the standard ERP tuning space: the cartesian product of a penalty
/// grid and a signed window grid.
#[must_use]
pub fn erp_search_space(penalties: &[f64], windows: &[i64]) -> ParamSpace {
    ParamSpace::product(vec![
        ParamDimension::new(PENALTY_FLAG, penalties.iter().copied()),
        ParamDimension::new(WINDOW_FLAG, windows.iter().copied()),
    ])
}

impl Erp {
    /// Instantiate an ERP calculator from a decoded grid configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ElasticError::Config`] | `penalty` or `window` is missing or of the wrong type |
    pub fn from_param_set(params: &ParamSet) -> Result<Self, ElasticError> {
        let penalty = params.require_float(PENALTY_FLAG)?;
        let window = params.require_int(WINDOW_FLAG)?;
        Ok(Self::from_window(WarpingWindow::from_signed(window), penalty))
    }
}
