#![allow(dead_code)]

pub mod mock_clipboard;
pub mod mock_host;
