#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A hash set implementation using separate chaining.
///
/// This module provides a `HashSet` that wraps the `HashTable` and provides
/// a standard set interface with configurable hashers.
pub mod hash_set;

/// The raw separate-chaining hash table.
///
/// `HashTable` operates on caller-provided hashes and equality predicates
/// and makes no hashing decisions of its own.
pub mod hash_table;

pub use hash_set::HashSet;
pub use hash_table::Entry;
pub use hash_table::HashTable;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The default hash builder used by [`HashSet`].
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The default hash builder used by [`HashSet`].
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// Stand-in for the default hash builder when neither the `std` nor
        /// the `foldhash` feature is enabled. It cannot be constructed;
        /// supply a hasher explicitly via [`HashSet::with_hasher`].
        pub enum DefaultHashBuilder {}
    }
}
