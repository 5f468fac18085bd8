use crate::analysis::analysis_service::AnalysisService;

#[derive(Clone)]
pub struct AppService {
    pub analysis_service: AnalysisService,
}

impl AppService {
    pub fn new() -> Self {
        let analysis_service = AnalysisService::new();

        Self { analysis_service }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            service: AppService::new(),
        }
    }
}
