//! Batch API group resources

pub mod cronjob;
pub mod job;

pub use cronjob::new_cron_job_list;
pub use job::new_job_list;
