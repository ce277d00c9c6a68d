// Report service - Operational reporting views
use crate::domain::reports::{DateRange, Report};

#[derive(Clone, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, range: DateRange) -> Report {
        Report::for_range(range)
    }
}
