use super::Action;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<()> {
    match action {
        Action::Check {
            data_index,
            jobs_service,
        } => crate::preflight::run(data_index, jobs_service).await,
    }
}
