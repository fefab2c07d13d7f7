pub mod conflict;
pub mod returns;
pub mod schedule;
pub mod utilization;
pub mod validate;
