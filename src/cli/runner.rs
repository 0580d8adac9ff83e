//! Runner wiring configuration, registry client, aggregation and report

use crate::aggregate::aggregate;
use crate::common::{NoProgress, ProgressObserver, human_size};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{IndicatifProgress, render_report};
use crate::registry::{HarborClient, RegistryApi};
use std::time::Instant;
use tracing::{debug, info};

pub struct Runner {
    config: AppConfig,
}

impl Runner {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Query the configured registry and print the report to stdout
    pub async fn run(&self) -> Result<()> {
        let client = self.create_registry_client()?;
        let observer = self.create_observer();

        let report = self.build_report(&client, observer.as_ref()).await?;
        println!("{}", report);
        Ok(())
    }

    /// Aggregate `project` through `api` and render the table.
    ///
    /// Nothing is rendered unless every listing call succeeded.
    pub async fn build_report<A>(&self, api: &A, observer: &dyn ProgressObserver) -> Result<String>
    where
        A: RegistryApi + ?Sized,
    {
        let start_time = Instant::now();
        info!(project = %self.config.project, "collecting artifact sizes");

        let summaries = aggregate(api, &self.config.project, observer).await?;

        let total: i64 = summaries.iter().map(|s| s.total_size_bytes).sum();
        info!(
            repositories = summaries.len(),
            total = %human_size(total),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "aggregation completed"
        );

        Ok(render_report(
            &self.config.project,
            &summaries,
            self.config.sort,
        ))
    }

    fn create_registry_client(&self) -> Result<HarborClient> {
        let registry = &self.config.registry;
        debug!(host = %registry.host, "setting up registry client");
        if let Some(auth) = &registry.auth {
            debug!(username = %auth.username, "using basic authentication");
        }

        HarborClient::new(registry.clone())
    }

    fn create_observer(&self) -> Box<dyn ProgressObserver> {
        if self.config.progress {
            Box::new(IndicatifProgress::new())
        } else {
            Box::new(NoProgress)
        }
    }
}
