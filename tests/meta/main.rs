//! Repository structure checks

mod coverage;
