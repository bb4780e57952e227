#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(
    clippy::all,
    clippy::await_holding_lock,
    clippy::dbg_macro,
    clippy::doc_markdown,
    clippy::enum_glob_use,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::flat_map_option,
    clippy::implicit_clone,
    clippy::indexing_slicing,
    clippy::inefficient_to_string,
    clippy::manual_ok_or,
    clippy::map_err_ignore,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::mem_forget,
    clippy::mut_mut,
    clippy::needless_borrow,
    clippy::needless_continue,
    clippy::option_option,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::semicolon_if_nothing_returned,
    clippy::string_add,
    clippy::string_lit_as_bytes,
    clippy::todo,
    clippy::unimplemented,
    clippy::unnested_or_patterns,
    clippy::verbose_file_reads,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    unexpected_cfgs
)]

pub mod codec;
mod error;
mod job_data;
mod job_store;
mod queue;
mod queue_builder;
mod queue_lists;
mod storage_keys;


pub use crate::error::ValqError;
pub use crate::job_data::{JobData, JobId};
pub use crate::queue::Queue;
pub use crate::queue_builder::QueueBuilder;
