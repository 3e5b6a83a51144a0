//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Accessors that fall back to defaults or the
//!   environment
//! - `validation`: Configuration consistency validation tests

mod helpers;
