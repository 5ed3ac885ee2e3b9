// Route handlers.

pub mod analyze;
