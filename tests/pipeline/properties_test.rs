#[cfg(test)]
mod tests {
    use crate::utils::{TRIAL_HEADER, trial_row};
    use onco_rate::loader::read_start_years;
    use onco_rate::{Icd10NeoplasmFilter, OncologyClassifier, RateTable, compute_rates};
    use std::path::Path;

    const YEARS: &str = "\
NCT001\t2013\tx
NCT002\t2013\tx
NCT003\t2014\tx
NCT004\t2014\tx
NCT005\t2014\tx
NCT006\tunknown\tx
";

    fn rates_for(rows: &[String]) -> RateTable {
        let mut content = format!("{TRIAL_HEADER}\n");
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        let years = read_start_years(YEARS.as_bytes(), Path::new("years.txt")).unwrap();
        let classifier = OncologyClassifier::new(Box::new(Icd10NeoplasmFilter::new()));
        compute_rates(content.as_bytes(), &years, &classifier).unwrap()
    }

    fn base_rows() -> Vec<String> {
        vec![
            trial_row("NCT001", 1, "['Breast Cancer']", "[]"),
            trial_row("NCT002", 0, "['Hypertension']", "[['C34.90']]"),
            trial_row("NCT003", 1, "['Melanoma']", "[['C43.9']]"),
            trial_row("NCT004", 0, "['Renal Cell Carcinoma']", "[['C64.9']]"),
            trial_row("NCT005", 0, "['Solid Tumor']", "[]"),
        ]
    }

    #[test]
    fn test_rates_stay_in_percentage_range() {
        let rates = rates_for(&base_rows());
        assert_eq!(rates.len(), 2);
        for (_, rate) in rates.iter() {
            assert!((0.0..=100.0).contains(&rate));
        }
        assert!((rates.get(2013).unwrap() - 50.0).abs() < 1e-9);
        assert!((rates.get(2014).unwrap() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_without_known_year_do_not_change_rates() {
        let mut rows = base_rows();
        rows.push(trial_row("NCT006", 1, "['Breast Cancer']", "[]"));
        rows.push(trial_row("NCT404", 1, "['Breast Cancer']", "[]"));
        assert_eq!(rates_for(&rows), rates_for(&base_rows()));
    }

    #[test]
    fn test_non_oncology_rows_do_not_change_rates() {
        let mut rows = base_rows();
        rows.push(trial_row("NCT001", 1, "['Asthma']", "[['J45.909']]"));
        rows.push(trial_row("NCT003", 0, "['Diabetes']", "not a list"));
        assert_eq!(rates_for(&rows), rates_for(&base_rows()));
    }
}
