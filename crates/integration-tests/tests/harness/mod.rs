// Not every test binary exercises the full harness surface
#![allow(dead_code)]

pub mod config;
pub mod mock_elevenlabs;
pub mod server;
