//! Background scheduled tasks for the application.
//!
//! The only recurring job is the daily admin code batch. Call `spawn_all` once
//! during startup to launch it.

use crate::services::AdminCodeService;
use chrono::{Duration, Local, NaiveDateTime, NaiveTime};

/// Time to wait from `now` until the next local `at`.
///
/// If `at` has already passed today (or is exactly now), the next run is tomorrow.
pub fn duration_until_next_run(now: NaiveDateTime, at: NaiveTime) -> std::time::Duration {
    let today_run = now.date().and_time(at);
    let next_run = if today_run > now {
        today_run
    } else {
        today_run + Duration::days(1)
    };
    (next_run - now).to_std().unwrap_or_default()
}

/// Spawn all background tasks.
///
/// Notes
/// - Each run appends a new batch; overlapping with a manual trigger yields two batches.
/// - This function detaches tasks via `tokio::spawn`; it does not block.
pub fn spawn_all(admin_code_service: AdminCodeService, daily_at: NaiveTime) {
    // 每天固定时间生成管理员验证码
    tokio::spawn(async move {
        loop {
            let wait = duration_until_next_run(Local::now().naive_local(), daily_at);
            log::info!(
                "Next daily admin code generation in {}s (at {daily_at})",
                wait.as_secs()
            );
            tokio::time::sleep(wait).await;

            log::info!("Running daily admin code generation job...");
            match admin_code_service.generate_daily_batch().await {
                Ok(batch) => log::info!("Daily admin codes generated for {}", batch.date),
                Err(e) => log::error!("Failed to generate daily admin codes: {e:?}"),
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_later_today() {
        let wait = duration_until_next_run(at(6, 0, 0), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(wait.as_secs(), 2 * 3600 + 30 * 60);
    }

    #[test]
    fn test_already_passed_runs_tomorrow() {
        let wait = duration_until_next_run(at(23, 0, 0), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(wait.as_secs(), 3600);
    }

    #[test]
    fn test_exactly_now_waits_a_full_day() {
        let wait = duration_until_next_run(at(0, 0, 0), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(wait.as_secs(), 24 * 3600);
    }
}
