//! Common utilities for integration tests

pub mod mock_fabric;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_fabric::DiagonalFabric;
pub use test_helpers::{
    assert_states_close,
    ones_state,
    relative_error,
    slot_degrees,
};
