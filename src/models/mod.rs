mod request;
mod summary;

pub use request::{Language, LengthTier, SummaryRequest, SummaryStyle};
pub use summary::SummaryResult;
