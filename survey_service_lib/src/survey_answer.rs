use serde::{Deserialize, Serialize};

/// A respondent's submission for one survey. The identifier is assigned by
/// the server on submission, so incoming payloads may omit it; whatever a
/// client supplies is discarded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SurveyAnswer {
    #[serde(default)]
    pub survey_answer_id: String,
    pub survey_id: i32,
    pub date: String,
    pub time: String,
    pub anonymous: bool,
    #[serde(default)]
    pub email: Option<String>,
    pub question_answers: Vec<QuestionAnswer>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuestionAnswer {
    pub question_id: i32,
    pub answer: String,
}

impl SurveyAnswer {
    pub fn new(
        survey_id: i32,
        date: String,
        time: String,
        anonymous: bool,
        email: Option<String>,
        question_answers: Vec<QuestionAnswer>,
    ) -> Self {
        Self {
            survey_answer_id: String::new(),
            survey_id,
            date,
            time,
            anonymous,
            email,
            question_answers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_payload() {
        let payload = r#"{
            "survey_id": 7,
            "date": "2024-03-01",
            "time": "14:30",
            "anonymous": false,
            "email": "someone@example.com",
            "question_answers": [
                {"question_id": 1, "answer": "yes"},
                {"question_id": 2, "answer": "no"}
            ]
        }"#;

        let answer: SurveyAnswer = serde_json::from_str(payload).unwrap();
        assert_eq!(answer.survey_answer_id, "");
        assert_eq!(answer.survey_id, 7);
        assert_eq!(answer.email.as_deref(), Some("someone@example.com"));
        assert_eq!(answer.question_answers.len(), 2);
        assert_eq!(answer.question_answers[0].question_id, 1);
        assert_eq!(answer.question_answers[1].answer, "no");
    }

    #[test]
    fn email_is_optional() {
        let payload = r#"{
            "survey_id": 1,
            "date": "2024-03-01",
            "time": "08:00",
            "anonymous": true,
            "question_answers": []
        }"#;

        let answer: SurveyAnswer = serde_json::from_str(payload).unwrap();
        assert!(answer.email.is_none());
    }

    #[test]
    fn missing_survey_id_is_rejected() {
        let payload = r#"{"date": "2024-03-01", "time": "08:00", "anonymous": true, "question_answers": []}"#;
        assert!(serde_json::from_str::<SurveyAnswer>(payload).is_err());
    }

    #[test]
    fn question_order_survives_round_trip() {
        let answer = SurveyAnswer::new(
            3,
            "2024-03-01".into(),
            "09:15".into(),
            false,
            None,
            vec![
                QuestionAnswer { question_id: 5, answer: "c".into() },
                QuestionAnswer { question_id: 2, answer: "a".into() },
                QuestionAnswer { question_id: 9, answer: "b".into() },
            ],
        );

        let encoded = serde_json::to_string(&answer).unwrap();
        let decoded: SurveyAnswer = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, answer);
    }
}
