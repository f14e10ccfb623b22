use crate::commands::{CmdResult, DashboardSummary};
use crate::error::Result;
use crate::list::InternshipList;
use crate::model::Status;

/// Computes the dashboard summary: total count, the record with the nearest
/// deadline, and a per-status breakdown in canonical status order.
pub fn run(internships: &InternshipList) -> Result<CmdResult> {
    let nearest_deadline = internships
        .iter()
        .min_by_key(|i| i.deadline)
        .cloned();

    let status_counts = Status::ALL
        .iter()
        .map(|&status| {
            let count = internships.iter().filter(|i| i.status == status).count();
            (status, count)
        })
        .collect();

    let mut result = CmdResult::default();
    result.dashboard = Some(DashboardSummary {
        username: internships.username().map(str::to_string),
        total: internships.len(),
        nearest_deadline,
        status_counts,
    });
    Ok(result)
}
