mod advent_task;

use std::sync::Arc;
use std::time::Duration;

use poise::serenity_prelude as serenity;
use tokio::time;
use tracing::{error, info};

use crate::config::AppConfig;

pub struct SchedulerContext {
    pub config: AppConfig,
    pub http: Arc<serenity::Http>,
}

pub fn spawn_scheduler(config: AppConfig, http: Arc<serenity::Http>) {
    if !config.scheduler.enabled {
        info!("Scheduler is disabled in configuration");
        return;
    }

    info!("Spawning scheduler tasks");
    let ctx = Arc::new(SchedulerContext { config, http });

    spawn_daily_task(ctx);
}

fn spawn_daily_task(ctx: Arc<SchedulerContext>) {
    let interval_mins = ctx.config.scheduler.timer_check_mins;
    info!(interval_mins, "Starting daily leaderboard task");

    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_secs(interval_mins * 60));
        let mut last_posted = None;
        loop {
            interval.tick().await;
            if let Err(e) = advent_task::check_and_publish(&ctx, &mut last_posted).await {
                error!(error = ?e, "Daily leaderboard task failed");
            }
        }
    });
}
