pub(crate) mod error;
pub(crate) mod formatter;
pub(crate) mod member;
pub(crate) mod message;
pub(crate) mod metric;
pub(crate) mod ranking;
