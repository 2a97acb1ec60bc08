//! Route paths shared by links and programmatic navigation

pub const HOME: &str = "/";
pub const CREATE_POINT: &str = "/create-point";
