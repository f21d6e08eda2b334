//! Gateway implementations

mod analysis;
mod builder;

pub use analysis::{AnalysisGateway, HEALTHY};
pub use builder::{Gateway, GatewayBuilder};
