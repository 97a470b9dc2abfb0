#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod model;
pub mod pagination;
pub mod store;

mod error;

pub use crate::error::{DataError, DataResult};
