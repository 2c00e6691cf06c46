//! 中间件
//!
//! - request_context：为每个请求生成 request_id/trace_id，写入日志 span 和响应头

pub mod request_context;

pub use request_context::request_context;
