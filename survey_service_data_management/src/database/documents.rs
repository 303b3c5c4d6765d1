use serde::{Deserialize, Serialize};
use survey_service_lib::{
    report::Report,
    survey_answer::{QuestionAnswer, SurveyAnswer},
};

/// Persisted shape of a survey answer. The collections use flattened
/// lowercase field names, which differ from the JSON wire names in
/// `survey_service_lib`; conversion happens only at this boundary.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SurveyAnswerDocument {
    #[serde(rename = "surveyanswerid")]
    pub survey_answer_id: String,
    #[serde(rename = "surveyid")]
    pub survey_id: i32,
    pub date: String,
    pub time: String,
    pub anonymous: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "questionanswers")]
    pub question_answers: Vec<QuestionAnswerDocument>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuestionAnswerDocument {
    #[serde(rename = "questionid")]
    pub question_id: i32,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReportDocument {
    #[serde(rename = "reportid")]
    pub report_id: String,
    pub date: String,
    pub time: String,
    pub anonymous: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "reportdescription")]
    pub report_description: String,
    pub country: String,
    pub city: String,
    pub street: String,
}

impl From<SurveyAnswer> for SurveyAnswerDocument {
    fn from(answer: SurveyAnswer) -> Self {
        Self {
            survey_answer_id: answer.survey_answer_id,
            survey_id: answer.survey_id,
            date: answer.date,
            time: answer.time,
            anonymous: answer.anonymous,
            email: answer.email,
            question_answers: answer
                .question_answers
                .into_iter()
                .map(|qa| QuestionAnswerDocument { question_id: qa.question_id, answer: qa.answer })
                .collect(),
        }
    }
}

impl From<SurveyAnswerDocument> for SurveyAnswer {
    fn from(document: SurveyAnswerDocument) -> Self {
        Self {
            survey_answer_id: document.survey_answer_id,
            survey_id: document.survey_id,
            date: document.date,
            time: document.time,
            anonymous: document.anonymous,
            email: document.email,
            question_answers: document
                .question_answers
                .into_iter()
                .map(|qa| QuestionAnswer { question_id: qa.question_id, answer: qa.answer })
                .collect(),
        }
    }
}

impl From<Report> for ReportDocument {
    fn from(report: Report) -> Self {
        Self {
            report_id: report.report_id,
            date: report.date,
            time: report.time,
            anonymous: report.anonymous,
            email: report.email,
            report_description: report.report_description,
            country: report.country,
            city: report.city,
            street: report.street,
        }
    }
}

impl From<ReportDocument> for Report {
    fn from(document: ReportDocument) -> Self {
        Self {
            report_id: document.report_id,
            date: document.date,
            time: document.time,
            anonymous: document.anonymous,
            email: document.email,
            report_description: document.report_description,
            country: document.country,
            city: document.city,
            street: document.street,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_answer() -> SurveyAnswer {
        SurveyAnswer {
            survey_answer_id: "abc-123".into(),
            survey_id: 4,
            date: "2024-03-01".into(),
            time: "10:00".into(),
            anonymous: false,
            email: Some("someone@example.com".into()),
            question_answers: vec![QuestionAnswer { question_id: 1, answer: "yes".into() }],
        }
    }

    #[test]
    fn answer_document_uses_flattened_field_names() {
        let document = SurveyAnswerDocument::from(sample_answer());
        let encoded = serde_json::to_value(&document).unwrap();

        assert_eq!(encoded["surveyanswerid"], "abc-123");
        assert_eq!(encoded["surveyid"], 4);
        assert_eq!(encoded["questionanswers"][0]["questionid"], 1);
        assert!(encoded.get("survey_answer_id").is_none());
    }

    #[test]
    fn report_document_uses_flattened_field_names() {
        let report = Report {
            report_id: "r-1".into(),
            date: "2024-05-12".into(),
            time: "22:10".into(),
            anonymous: true,
            email: None,
            report_description: "broken street light".into(),
            country: "Denmark".into(),
            city: "Copenhagen".into(),
            street: "Langelinie".into(),
        };

        let encoded = serde_json::to_value(ReportDocument::from(report)).unwrap();
        assert_eq!(encoded["reportid"], "r-1");
        assert_eq!(encoded["reportdescription"], "broken street light");
        assert!(encoded.get("report_description").is_none());
    }

    #[test]
    fn answer_conversion_round_trips() {
        let answer = sample_answer();
        let back = SurveyAnswer::from(SurveyAnswerDocument::from(answer.clone()));
        assert_eq!(back, answer);
    }
}
