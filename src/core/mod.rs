pub mod generator;
pub mod links;
pub mod planner;

pub use generator::TextGenerator;
pub use links::{LinkRewriter, MapsLinkRewriter, DEFAULT_MAPS_SEARCH_URL};
pub use planner::{TripPlanner, SELF_TEST_TEMPERATURE};
