// Language identification: swap-ready trait plus the whatlang detector.

pub mod detect;
pub mod traits;
