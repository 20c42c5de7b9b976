pub mod request;
pub mod response;

pub use request::SimulateCommissionsRequest;
pub use response::{DayCommissions, SimulationBreakdown};
