pub mod checklist;
pub mod dispatch;
pub mod serve;
