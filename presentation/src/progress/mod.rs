//! Progress indicators shown while a completion is outstanding

pub mod spinner;
