use survey_service_data_management::DataManager;

/// Shared across all in-flight requests. The data manager's store client is
/// internally pooled, so handlers never coordinate beyond holding this.
pub struct ServerState {
    pub data_manager: DataManager,
}
