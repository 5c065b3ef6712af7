// Re-export all model types
pub use self::dish::*;
pub use self::errors::*;
pub use self::order::*;
pub use self::report::*;
pub use self::restaurant::*;
pub use self::validation::*;

mod dish;
mod errors;
mod order;
mod report;
mod restaurant;
mod validation;
