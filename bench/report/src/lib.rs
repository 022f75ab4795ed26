pub mod attempt;
pub mod hardware;
pub mod params;
pub mod prints;
pub mod report;
pub mod summary;
pub(crate) mod utils;
