pub mod confidence;
pub mod dataset;
pub mod ranking;
pub mod record;
pub mod scenario;
pub mod score_type;
