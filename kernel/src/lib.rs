// Meterlog Kernel
//
// Append-only electricity meter log and the consumption averages
// derived from it.

pub mod config;
pub mod log;
pub mod pipeline;
pub mod report;
pub mod stats;
