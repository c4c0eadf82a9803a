use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError, model::message_handle::MessageHandle,
    service::server_status::ServerStatusService,
};

/// Every five minutes, on the minute.
pub const STATUS_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the server status scheduler
///
/// Runs one status cycle immediately, then every five minutes. The message handle
/// lives behind a mutex held for the whole cycle, so a cycle that overruns the
/// interval delays the next one instead of running alongside it.
///
/// # Arguments
/// - `service`: Status service shared with the scheduled job
pub async fn start_scheduler(service: Arc<ServerStatusService>) -> Result<(), AppError> {
    let handle = Arc::new(Mutex::new(MessageHandle::new()));

    {
        let mut handle = handle.lock().await;
        service.run_cycle(&mut handle).await;
    }

    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_service = service.clone();
    let job_handle = handle.clone();

    let job = Job::new_async(STATUS_SCHEDULE, move |_uuid, _lock| {
        let service = job_service.clone();
        let handle = job_handle.clone();

        Box::pin(async move {
            let mut handle = handle.lock().await;
            service.run_cycle(&mut handle).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Server status scheduler started");

    Ok(())
}
