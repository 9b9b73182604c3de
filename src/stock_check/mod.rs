//! Stock-check domain: BOM aggregation, scoring, rate-limit policies and
//! report construction. Free of I/O apart from the rate limiter's timer.
pub mod domain;
pub mod policies;
pub mod services;
