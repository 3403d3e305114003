pub mod types;  // raw + unified book types, fixed-point scale
pub mod unify;  // four-sided -> two-sided YES view

pub use types::*;
pub use unify::unify;
