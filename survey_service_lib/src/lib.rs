pub mod report;
pub mod stats;
pub mod survey_answer;
