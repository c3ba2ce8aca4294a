#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod modal;
