#![allow(clippy::new_without_default)]

pub mod error;
pub mod movie;
pub mod util;
pub mod view;
pub mod yts;
