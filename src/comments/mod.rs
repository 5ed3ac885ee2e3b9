// Comment records: raw input, annotations, and batch results.

pub mod models;
