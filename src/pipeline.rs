//! End-to-end oncology success-rate run

use log::info;

use crate::algorithm::oncology::{
    CcsCancerFilter, CodeClassifier, Icd10NeoplasmFilter, OncologyClassifier,
};
use crate::algorithm::rates::{AggregationSummary, aggregate_trials_from_path};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::loader::load_start_years;
use crate::models::RateTable;

/// Build the oncology classifier described by the configuration
pub fn build_classifier(config: &PipelineConfig) -> Result<OncologyClassifier> {
    let code_classifier: Box<dyn CodeClassifier> = match &config.icd_mapping {
        Some(path) => Box::new(CcsCancerFilter::from_path(path)?),
        None => {
            info!("No ICD-10 mapping configured, using the ICD-10 neoplasm chapter");
            Box::new(Icd10NeoplasmFilter::new())
        }
    };
    Ok(OncologyClassifier::with_keywords(
        &config.oncology_keywords,
        code_classifier,
    ))
}

/// Load the start years, then stream the trial table into per-year rates
pub fn run(config: &PipelineConfig) -> Result<(RateTable, AggregationSummary)> {
    let year_index = load_start_years(&config.start_year_file)?;
    let classifier = build_classifier(config)?;
    info!("Oncology keywords: {}", classifier.keywords());

    let (rates, summary) =
        aggregate_trials_from_path(&config.trial_table, &year_index, &classifier)?;
    info!("{summary}");
    info!("Success rates computed for {} years", rates.len());
    Ok((rates, summary))
}
