#![allow(dead_code)]

pub mod asserts;
pub mod builders;
pub mod headers;
pub mod logs;
