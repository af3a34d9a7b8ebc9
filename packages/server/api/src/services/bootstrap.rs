use crate::config::DefaultAdmin;
use crate::services::auth_service::AuthService;
use anyhow::Result;
use database::Database;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// How startup preparation of the database proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapMode {
    /// The database answered at boot: migrate and seed before serving.
    Eager,
    /// The database was down: keep probing in the background.
    Deferred,
}

impl BootstrapMode {
    pub fn for_connection(connected: bool) -> Self {
        if connected {
            Self::Eager
        } else {
            Self::Deferred
        }
    }
}

/// Schema migrations plus the default administrator.
pub struct Bootstrap {
    db: Arc<Database>,
    admin: DefaultAdmin,
}

impl Bootstrap {
    pub fn new(db: Arc<Database>, admin: DefaultAdmin) -> Self {
        Self { db, admin }
    }

    /// Runs now, or spawns a retry loop that runs once the database is back.
    pub async fn start(self, mode: BootstrapMode) -> Result<()> {
        match mode {
            BootstrapMode::Eager => self.run().await,
            BootstrapMode::Deferred => {
                tokio::spawn(self.run_when_ready());
                Ok(())
            }
        }
    }

    async fn run(&self) -> Result<()> {
        self.db.migrate().await?;
        if let Err(e) = AuthService::new(self.db.clone())
            .ensure_default_admin(&self.admin)
            .await
        {
            tracing::warn!("Could not ensure default administrator: {:#}", e);
        }
        Ok(())
    }

    async fn run_when_ready(self) {
        let this = &self;
        let attempts = retry_until_ok(
            || async move {
                this.db.health_check().await?;
                this.run().await
            },
            backoff,
        )
        .await;
        tracing::info!("Database reachable after {} attempt(s), bootstrap complete", attempts);
    }
}

/// Exponential delay starting at one second, capped at a minute.
pub fn backoff(attempt: u32) -> Duration {
    Duration::from_secs(1u64 << attempt.saturating_sub(1).min(6)).min(MAX_BACKOFF)
}

/// Calls `task` until it succeeds and returns the number of attempts made.
pub async fn retry_until_ok<F, Fut, D>(mut task: F, delay: D) -> u32
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<()>>,
    D: Fn(u32) -> Duration,
{
    let mut attempt = 1;
    loop {
        match task().await {
            Ok(()) => return attempt,
            Err(e) => {
                let wait = delay(attempt);
                tracing::warn!(
                    "Database bootstrap attempt {} failed, retrying in {:?}: {:#}",
                    attempt,
                    wait,
                    e
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
        }
    }
}
