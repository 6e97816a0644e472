//! Runner for computing one asset under several methods
//!
//! Holds the asset once and fans out across methods in parallel.

use log::debug;
use rayon::prelude::*;

use crate::schedule::{Method, Schedule, ScheduleError, ScheduleRequest, ScheduleSummary};

/// One asset, many methods
///
/// # Example
/// ```ignore
/// let runner = ScheduleRunner::new(request);
/// for (method, result) in runner.run_methods(&Method::ALL) {
///     println!("{}: {:?}", method, result.map(|s| s.summary()));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleRunner {
    /// Asset terms; the method field is replaced per run
    base_request: ScheduleRequest,
}

impl ScheduleRunner {
    pub fn new(base_request: ScheduleRequest) -> Self {
        Self { base_request }
    }

    /// Run the base request as-is
    pub fn run(&self) -> Result<Schedule, ScheduleError> {
        self.base_request.compute()
    }

    /// Run the asset under a specific method
    pub fn run_method(&self, method: Method) -> Result<Schedule, ScheduleError> {
        self.base_request.clone().with_method(method).compute()
    }

    /// Run every listed method in parallel, results in input order
    pub fn run_methods(&self, methods: &[Method]) -> Vec<(Method, Result<Schedule, ScheduleError>)> {
        debug!("Running {} methods in parallel", methods.len());
        methods
            .par_iter()
            .map(|&method| (method, self.run_method(method)))
            .collect()
    }

    /// Summaries for every supported method.
    ///
    /// The asset terms do not depend on the method, so either every method
    /// succeeds or the shared validation error is returned.
    pub fn compare_all(&self) -> Result<Vec<ScheduleSummary>, ScheduleError> {
        self.run_methods(&Method::ALL)
            .into_iter()
            .map(|(_, result)| result.map(|s| s.summary()))
            .collect()
    }

    pub fn request(&self) -> &ScheduleRequest {
        &self.base_request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn runner() -> ScheduleRunner {
        ScheduleRunner::new(
            ScheduleRequest::new(
                dec!(24000),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
                Method::StraightLine,
            )
            .with_salvage(dec!(2400)),
        )
    }

    #[test]
    fn test_run_methods_keeps_order() {
        let results = runner().run_methods(&Method::ALL);
        let methods: Vec<_> = results.iter().map(|(m, _)| *m).collect();
        assert_eq!(methods, Method::ALL.to_vec());
        for (method, result) in results {
            let schedule = result.unwrap();
            assert_eq!(schedule.request().method, method);
            assert_eq!(schedule.final_book_value(), dec!(2400));
        }
    }

    #[test]
    fn test_accelerated_methods_front_load() {
        let summaries = runner().compare_all().unwrap();
        assert_eq!(summaries.len(), 3);

        // Every method depreciates the same base in total
        assert!(summaries.iter().all(|s| s.total_expense == dec!(21600)));

        let sl = &summaries[0];
        let ddb = &summaries[1];
        let soyd = &summaries[2];
        assert!(ddb.first_year_expense > sl.first_year_expense);
        assert!(soyd.first_year_expense > sl.first_year_expense);
    }

    #[test]
    fn test_compare_all_propagates_validation_error() {
        let mut request = runner().request().clone();
        request.end_date = request.start_date;
        let err = ScheduleRunner::new(request).compare_all().unwrap_err();
        assert_eq!(err, ScheduleError::InvalidPeriod);
    }
}
