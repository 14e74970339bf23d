//! Classification and aggregation algorithms

pub mod oncology;
pub mod rates;
