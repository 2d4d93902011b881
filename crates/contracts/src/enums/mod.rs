pub mod activity_status;

pub use activity_status::ActivityStatus;
