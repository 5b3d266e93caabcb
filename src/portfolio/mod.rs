//! Portfolio growth projection

mod projector;
mod schedule;

pub use projector::{project_growth, GrowthParams};
pub use schedule::{GrowthProjection, GrowthSummary, PeriodRecord};
