pub mod simulated;

pub use simulated::SimulatedAuth;
