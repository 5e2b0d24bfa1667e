mod result;
mod style;
mod violation;

pub use result::{ReviewResult, ReviewStatus};
pub use style::StyleChecker;
pub use violation::{Location, Violation};
