//! Static pages served by the planner.

pub const INDEX_HTML: &str = include_str!("../../templates/index.html");

pub const TEST_HTML: &str = include_str!("../../templates/test.html");
