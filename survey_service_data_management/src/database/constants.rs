pub const DATABASE_NAME: &str = "survey_service_database";

pub const SURVEY_ANSWER_COLLECTION: &str = "survey_answer_collection";
pub const REPORT_COLLECTION: &str = "report_collection";

// Queried document fields.
pub const SURVEY_ANSWER_ID: &str = "surveyanswerid";
pub const SURVEY_ID: &str = "surveyid";
pub const REPORT_ID: &str = "reportid";
