use serde::{Deserialize, Serialize};

/// Workload figures computed by the backend for the signed-in employee.
/// The console displays them verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    /// Sum of the employee's allocation percentages.
    #[serde(rename = "totalAlloc")]
    pub total_alloc: f64,
    /// Remaining availability in percent.
    pub availability: f64,
    /// Project duration in days.
    pub duration: f64,
}
