use serde::{Deserialize, Serialize};

/// A free-text incident report with an optional location. Like survey
/// answers, the identifier is assigned server-side on submission.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Report {
    #[serde(default)]
    pub report_id: String,
    pub date: String,
    pub time: String,
    pub anonymous: bool,
    #[serde(default)]
    pub email: Option<String>,
    pub report_description: String,
    pub country: String,
    pub city: String,
    pub street: String,
}

impl Report {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: String,
        time: String,
        anonymous: bool,
        email: Option<String>,
        report_description: String,
        country: String,
        city: String,
        street: String,
    ) -> Self {
        Self {
            report_id: String::new(),
            date,
            time,
            anonymous,
            email,
            report_description,
            country,
            city,
            street,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_payload() {
        let payload = r#"{
            "date": "2024-05-12",
            "time": "22:10",
            "anonymous": true,
            "report_description": "broken street light",
            "country": "Denmark",
            "city": "Copenhagen",
            "street": "Langelinie"
        }"#;

        let report: Report = serde_json::from_str(payload).unwrap();
        assert_eq!(report.report_id, "");
        assert!(report.email.is_none());
        assert_eq!(report.report_description, "broken street light");
        assert_eq!(report.city, "Copenhagen");
    }

    #[test]
    fn round_trips_through_wire_format() {
        let report = Report::new(
            "2024-05-12".into(),
            "22:10".into(),
            false,
            Some("someone@example.com".into()),
            "pothole".into(),
            "Denmark".into(),
            "Aarhus".into(),
            "Banegaardspladsen".into(),
        );

        let encoded = serde_json::to_string(&report).unwrap();
        let decoded: Report = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, report);
    }

    #[test]
    fn missing_description_is_rejected() {
        let payload = r#"{
            "date": "2024-05-12",
            "time": "22:10",
            "anonymous": true,
            "country": "Denmark",
            "city": "Copenhagen",
            "street": "Langelinie"
        }"#;

        assert!(serde_json::from_str::<Report>(payload).is_err());
    }
}
