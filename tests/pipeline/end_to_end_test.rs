#[cfg(test)]
mod tests {
    use crate::utils::{Fixture, trial_row};
    use onco_rate::{OncoRateError, format_report, pipeline};

    #[test]
    fn test_report_for_mixed_trials() {
        let rows = [
            trial_row("NCT001", 1, "['Breast Cancer']", "[]"),
            trial_row("NCT002", 0, "['Prostate Neoplasms']", "[]"),
            trial_row("NCT003", 1, "['Diabetes']", r#"["['C50.1']"]"#),
            trial_row("NCT004", 1, "['Asthma']", "[['J45.909']]"),
            trial_row("NCT005", 1, "['Glioma Tumor']", "[]"),
            trial_row("NCT006", 0, "['Liver Cancer']", "[]"),
        ];
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let fixture = Fixture::new(
            &rows,
            &[
                "NCT001\tJanuary 2015\tx",
                "NCT002\tMarch 2015\tx",
                "NCT003\t2016\tx",
                "NCT004\t2016\tx",
                "NCT005\t\t",
            ],
        );

        let (rates, summary) = pipeline::run(&fixture.config).unwrap();

        assert_eq!(format_report(&rates), "2015\t50.00\n2016\t100.00\n");
        assert_eq!(summary.rows_read, 6);
        assert_eq!(summary.counted, 3);
        assert_eq!(summary.non_oncology, 1);
        assert_eq!(summary.unknown_year, 1);
        assert_eq!(summary.missing_year, 1);
    }

    #[test]
    fn test_empty_start_date_excludes_trial() {
        let row = trial_row("NCT001", 1, "['Breast Cancer']", "[]");
        let fixture = Fixture::new(&[&row], &["NCT001\t\t"]);

        let (rates, summary) = pipeline::run(&fixture.config).unwrap();
        assert!(rates.is_empty());
        assert_eq!(summary.unknown_year, 1);
    }

    #[test]
    fn test_two_field_start_year_line_is_fatal() {
        let row = trial_row("NCT001", 1, "['Breast Cancer']", "[]");
        let fixture = Fixture::new(&[&row], &["NCT001\t2015"]);

        let err = pipeline::run(&fixture.config).unwrap_err();
        assert!(matches!(
            err,
            OncoRateError::MalformedStartYearLine { line: 1, found: 2, .. }
        ));
    }

    #[test]
    fn test_missing_trial_table_is_fatal() {
        let mut fixture = Fixture::new(&[], &["NCT001\t2015\tx"]);
        fixture.config.trial_table = fixture.dir.path().join("absent.csv");

        let err = pipeline::run(&fixture.config).unwrap_err();
        assert!(matches!(err, OncoRateError::Io { .. }));
    }

    #[test]
    fn test_mapping_file_drives_code_path() {
        let rows = [
            trial_row("NCT001", 1, "['Diabetes']", "[['C50.1']]"),
            trial_row("NCT002", 1, "['Obesity']", "[['E66.9', 'Z99.9']]"),
            trial_row("NCT003", 0, "['Anemia']", "[['Q99.9', 'D63.0']]"),
        ];
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let fixture = Fixture::new(
            &rows,
            &["NCT001\t2012\tx", "NCT002\t2012\tx", "NCT003\t2012\tx"],
        )
        .with_mapping("icd10_code,ccs_category\nC50.1,24\nE66.9,58\nD63.0,40\n");

        let (rates, summary) = pipeline::run(&fixture.config).unwrap();

        // Z999 and Q999 are absent from the mapping and only count as misses
        assert_eq!(summary.counted, 2);
        assert_eq!(format_report(&rates), "2012\t50.00\n");
    }

    #[test]
    fn test_runs_are_idempotent() {
        let rows = [
            trial_row("NCT001", 1, "['Breast Cancer']", "[]"),
            trial_row("NCT002", 0, "['Colon Cancer']", "[]"),
            trial_row("NCT003", 1, "['Lymphoma']", "[['C83.3']]"),
        ];
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let fixture = Fixture::new(
            &rows,
            &["NCT001\t2010\tx", "NCT002\t2011\tx", "NCT003\t2011\tx"],
        );

        let first = pipeline::run(&fixture.config).unwrap();
        let second = pipeline::run(&fixture.config).unwrap();
        assert_eq!(first, second);
    }
}
