//! ERP (Edit distance with Real Penalty) elastic distance computation.
//!
//! Pure math library, zero I/O. Provides the banded ERP dynamic-programming
//! recurrence with early abandoning, diagnostic cost-matrix retention,
//! pairwise distance matrices, and an adapter that instantiates an [`Erp`]
//! configuration from a decoded hyperparameter assignment
//! ([`crocus_params::ParamSet`]).

mod cost_matrix;
mod distance;
mod erp;
mod error;
mod matrix;
mod params;
mod series;
mod window;

pub use cost_matrix::CostMatrix;
pub use distance::ErpDistance;
pub use erp::{Erp, ErpOutcome};
pub use error::ElasticError;
pub use matrix::DistanceMatrix;
pub use params::{PENALTY_FLAG, WINDOW_FLAG, erp_search_space};
pub use series::{Sequence, SequenceView};
pub use window::WarpingWindow;
