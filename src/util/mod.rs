//! Helper functions that don't fit into any specific category but are used
//! by the filters and interpolators.

/// Some basic math functions used elsewhere in the project
pub mod math;
