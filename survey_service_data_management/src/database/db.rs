use std::{future::IntoFuture, time::Duration};

use futures::TryStreamExt;
use mongodb::{Client, Collection, bson::doc};
use survey_service_lib::{report::Report, stats::Stats, survey_answer::SurveyAnswer};

use crate::DataManagerError;

use super::{
    constants::*,
    documents::{ReportDocument, SurveyAnswerDocument},
};

/// Every store operation is bounded by this timeout; nothing is retried.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct SurveyDatabase {
    client: Client,
}

impl SurveyDatabase {
    pub async fn connect(uri: &str) -> Result<Self, DataManagerError> {
        let client = bounded(Client::with_uri_str(uri)).await?;

        // The driver connects lazily, so ping once to fail fast on an
        // unreachable store.
        bounded(client.database(DATABASE_NAME).run_command(doc! { "ping": 1 })).await?;
        tracing::info!("Connected to {DATABASE_NAME}");

        Ok(Self { client })
    }

    fn answers(&self) -> Collection<SurveyAnswerDocument> {
        self.client.database(DATABASE_NAME).collection(SURVEY_ANSWER_COLLECTION)
    }

    fn reports(&self) -> Collection<ReportDocument> {
        self.client.database(DATABASE_NAME).collection(REPORT_COLLECTION)
    }

    pub async fn insert_answer(&self, answer: &SurveyAnswer) -> Result<(), DataManagerError> {
        let document = SurveyAnswerDocument::from(answer.clone());
        bounded(self.answers().insert_one(document)).await.map(|_| ())
    }

    pub async fn insert_report(&self, report: &Report) -> Result<(), DataManagerError> {
        let document = ReportDocument::from(report.clone());
        bounded(self.reports().insert_one(document)).await.map(|_| ())
    }

    /// Lists answers in insertion order, optionally filtered to one survey.
    pub async fn get_answers(
        &self,
        page: u32,
        page_size: u32,
        survey_id: Option<i32>,
    ) -> Result<Vec<SurveyAnswer>, DataManagerError> {
        let filter = match survey_id {
            Some(id) => doc! { SURVEY_ID: id },
            None => doc! {},
        };

        let collection = self.answers();
        let documents: Vec<SurveyAnswerDocument> = bounded(async move {
            collection
                .find(filter)
                .skip(skip_for_page(page, page_size))
                .limit(page_size as i64)
                .await?
                .try_collect()
                .await
        })
        .await?;

        Ok(documents.into_iter().map(SurveyAnswer::from).collect())
    }

    pub async fn get_answer_by_id(&self, survey_answer_id: &str) -> Result<SurveyAnswer, DataManagerError> {
        bounded(self.answers().find_one(doc! { SURVEY_ANSWER_ID: survey_answer_id }))
            .await?
            .map(SurveyAnswer::from)
            .ok_or(DataManagerError::NotFound)
    }

    pub async fn get_reports(&self, page: u32, page_size: u32) -> Result<Vec<Report>, DataManagerError> {
        let collection = self.reports();
        let documents: Vec<ReportDocument> = bounded(async move {
            collection
                .find(doc! {})
                .skip(skip_for_page(page, page_size))
                .limit(page_size as i64)
                .await?
                .try_collect()
                .await
        })
        .await?;

        Ok(documents.into_iter().map(Report::from).collect())
    }

    pub async fn get_report_by_id(&self, report_id: &str) -> Result<Report, DataManagerError> {
        bounded(self.reports().find_one(doc! { REPORT_ID: report_id }))
            .await?
            .map(Report::from)
            .ok_or(DataManagerError::NotFound)
    }

    pub async fn get_stats(&self) -> Result<Stats, DataManagerError> {
        let total_survey_answers = bounded(self.answers().count_documents(doc! {})).await?;
        let total_reports = bounded(self.reports().count_documents(doc! {})).await?;

        Ok(Stats { total_survey_answers, total_reports })
    }
}

async fn bounded<T>(
    operation: impl IntoFuture<Output = Result<T, mongodb::error::Error>>,
) -> Result<T, DataManagerError> {
    tokio::time::timeout(OPERATION_TIMEOUT, operation)
        .await
        .map_err(|_| DataManagerError::Timeout)?
        .map_err(DataManagerError::Database)
}

/// Pages are 1-based; page 1 starts at the first document.
fn skip_for_page(page: u32, page_size: u32) -> u64 {
    (page as u64).saturating_sub(1) * page_size as u64
}
