pub mod author;
pub mod check;
pub mod dispatch;
pub mod post;
pub mod shared;
