#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod identifier;
pub mod interface;
pub mod literal;
pub mod task;
pub mod workflow;

#[doc(hidden)]
pub mod prelude;
