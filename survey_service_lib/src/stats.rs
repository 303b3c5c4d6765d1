use serde::Serialize;

/// Collection totals, computed on demand and never persisted. Only ever
/// serialized outward.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_survey_answers: u64,
    pub total_reports: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let stats = Stats { total_survey_answers: 3, total_reports: 1 };
        let encoded = serde_json::to_value(stats).unwrap();
        assert_eq!(encoded["total_survey_answers"], 3);
        assert_eq!(encoded["total_reports"], 1);
    }
}
