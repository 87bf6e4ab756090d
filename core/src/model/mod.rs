pub mod config;
pub mod free_time;
pub mod life;
pub mod parent_time;
pub mod weekend;
pub mod work_life;
pub mod year;
