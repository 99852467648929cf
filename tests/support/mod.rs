#![allow(dead_code)]

pub mod manual_clock;
pub mod recorder;
