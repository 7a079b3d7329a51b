// SPDX-License-Identifier: Apache-2.0

//! A small recursive-descent JSON parser that builds an owned tree.
//!
//! The whole input is parsed in one call into a [`Node`] tree. Lookups walk
//! the tree by key ([`Node::get`]) or position ([`Node::at`]), and typed
//! accessors such as [`Node::as_f64`] fall back to a default for the wrong
//! kind. A failed parse returns a [`ParseError`] and leaves nothing
//! allocated.
//!
//! The crate is `no_std` with `alloc` when the default `std` feature is
//! turned off. The integer width of parsed numbers is picked with one of the
//! `int8`, `int32` or `int64` features.
//!
//! ```
//! use jsontree::{parse, Kind};
//!
//! let root = parse(r#"{"sensor": "t1", "readings": [20.5, 21, 19.75]}"#)?;
//! assert_eq!(root.kind(), Kind::Object);
//!
//! let readings = root.get("readings").expect("readings present");
//! assert_eq!(readings.count(), 3);
//! assert_eq!(readings.at(1).map_or(0, |n| n.as_int()), 21);
//! assert!(readings.at(0).and_then(|n| n.as_number()).is_some_and(|n| n.is_float()));
//!
//! // Wrong kind or missing member: typed accessors return the default
//! assert_eq!(root.get("sensor").map_or(0.0, |n| n.as_f64()), 0.0);
//! assert!(root.get("missing").is_none());
//!
//! jsontree::free(Some(root));
//! # Ok::<(), jsontree::ParseError>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

// Compile-time configuration validation
mod config_check;

mod config;
pub use config::ParseConfig;

mod cursor;

mod escape_processor;

mod int_parser;
pub use int_parser::Int;

mod number_parser;

mod scalar;

mod container;

mod parser;
pub use parser::{parse, parse_slice, parse_slice_with_config, parse_with_config};

mod node;
pub use node::{Kind, Node, Number, Value};

mod printer;
pub use printer::Dump;

mod free;
pub use free::free;

mod parse_error;
pub use parse_error::ParseError;
