//! Daily simulation loop: rate evolution followed by rebalancing

mod engine;
mod report;

pub use engine::Simulator;
pub use report::DayReport;
