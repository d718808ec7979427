pub mod ids;
mod point;
mod weights;

pub use ids::{DriverKind, ScenarioId, WeightCategory};
pub use point::{Point, Series, SeriesCollection};
pub use weights::{ScenarioFlags, WeightConfig};
