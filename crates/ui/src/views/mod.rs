mod drill;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use drill::DrillView;
pub use state::{ViewError, ViewState, view_state_from_resource};
