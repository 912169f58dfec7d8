pub mod add;
pub mod dispatch;
pub mod shared;
pub mod task;
pub mod user;
pub mod work;
