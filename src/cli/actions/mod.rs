mod run;

use crate::checker::DatabaseTarget;

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Check {
        data_index: DatabaseTarget,
        jobs_service: DatabaseTarget,
    },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
