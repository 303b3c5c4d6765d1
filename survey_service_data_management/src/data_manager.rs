use survey_service_lib::{report::Report, stats::Stats, survey_answer::SurveyAnswer};

use crate::{DataManagerError, database::db::SurveyDatabase};

#[derive(Clone)]
pub struct DataManager {
    pub(crate) database: SurveyDatabase,
}

/// The public interface for all survey service data management.
impl DataManager {
    /// Connects to the store. A failure here is fatal to the service; the
    /// caller is expected to exit rather than retry.
    pub async fn start(uri: &str) -> Result<Self, DataManagerError> {
        let database = SurveyDatabase::connect(uri).await?;

        Ok(DataManager { database })
    }

    pub async fn submit_answer(&self, answer: &SurveyAnswer) -> Result<(), DataManagerError> {
        self.database.insert_answer(answer).await
    }

    pub async fn submit_report(&self, report: &Report) -> Result<(), DataManagerError> {
        self.database.insert_report(report).await
    }

    pub async fn get_survey_answers(
        &self,
        page: u32,
        page_size: u32,
        survey_id: Option<i32>,
    ) -> Result<Vec<SurveyAnswer>, DataManagerError> {
        self.database.get_answers(page, page_size, survey_id).await
    }

    pub async fn get_survey_answer_by_id(&self, survey_answer_id: &str) -> Result<SurveyAnswer, DataManagerError> {
        self.database.get_answer_by_id(survey_answer_id).await
    }

    pub async fn get_reports(&self, page: u32, page_size: u32) -> Result<Vec<Report>, DataManagerError> {
        self.database.get_reports(page, page_size).await
    }

    pub async fn get_report_by_id(&self, report_id: &str) -> Result<Report, DataManagerError> {
        self.database.get_report_by_id(report_id).await
    }

    pub async fn get_stats(&self) -> Result<Stats, DataManagerError> {
        self.database.get_stats().await
    }
}
