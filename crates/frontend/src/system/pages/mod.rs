pub mod home;
pub mod work_in_progress;
