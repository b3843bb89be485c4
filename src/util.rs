mod domain;
mod length;
mod measure;
mod saturating;

pub use domain::*;
pub use length::*;
pub use measure::*;
pub use saturating::*;
