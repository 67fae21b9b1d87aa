//! Mock implementations for testing
//!
//! Re-exports mocks from their home modules so tests import them from one place.

pub use crate::http::mock::MockHttpClient;
