//! Time-based UUIDs (version 1) reordered for efficient storage and indexing
//!
//! ```rust
//! let id = optimized_uuid::create(None);
//! println!("{}", id); // e.g. "11D8EEBC58E0A7D796690800200C9A66"
//!
//! let standard = optimized_uuid::reverse(&id).unwrap();
//! println!("{}", standard); // e.g. "58e0a7d7-eebc-11d8-9669-0800200c9a66"
//! assert!(optimized_uuid::is_valid(&id));
//! ```
//!
//! # Field order
//!
//! A UUIDv1 stores the lowest 32 bits of its timestamp first, so values generated one after
//! another differ at the very beginning and scatter across a B-tree index. This library moves
//! the slowly changing high part of the timestamp to the front and leaves the clock sequence and
//! node at the end:
//!
//! ```text
//! standard:  time_low - time_mid - time_hi_and_version - clock_seq - node
//!            58e0a7d7 - eebc     - 11d8                - 9669      - 0800200c9a66
//!
//! optimized: time_hi_and_version time_mid time_low clock_seq node
//!            11D8                EEBC     58E0A7D7 9669      0800200C9A66
//! ```
//!
//! The optimized form has no separators and is rendered in upper case, which makes it fit a
//! `CHAR(32)` column; [`OptimizedUuid::as_bytes`] gives the same order as 16 bytes for a
//! `BINARY(16)` column. The reordering is a pure permutation, so [`reverse`] restores the
//! original value.
//!
//! # Typed interface
//!
//! [`Uuid`] and [`OptimizedUuid`] hold the two byte orders of the same 128-bit value and convert
//! into each other with [`From`]:
//!
//! ```rust
//! use optimized_uuid::{OptimizedUuid, Uuid};
//!
//! let standard: Uuid = "58e0a7d7-eebc-11d8-9669-0800200c9a66".parse()?;
//! let optimized = OptimizedUuid::from(standard);
//! assert_eq!(optimized.to_string(), "11D8EEBC58E0A7D796690800200C9A66");
//! assert_eq!(Uuid::from(optimized), standard);
//! # Ok::<(), optimized_uuid::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables the string-level functions and integration with `std::time::SystemTime`.
//! - `global_gen` (implies `std`) enables the process-wide default generator behind [`create`],
//!   [`uuid1`], and [`optimized_uuid()`].
//!
//! Optional features:
//!
//! - `serde` enables serialization/deserialization of [`Uuid`] and [`OptimizedUuid`].
//! - `uuid` enables conversion from/to the `uuid::Uuid` type.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

mod optimized;
pub use optimized::OptimizedUuid;

mod options;
pub use options::V1Options;

pub mod generator;
pub use generator::V1Generator;

mod codec;
#[cfg(feature = "global_gen")]
pub use codec::create;
#[cfg(feature = "std")]
pub use codec::{is_valid, is_valid_v1, optimize, reverse};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{optimized_uuid, uuid1, uuid1_with};
