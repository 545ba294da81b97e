//! # termlink Match Resolver (`matcher`)
//!
//! ## Purpose
//!
//! The pattern index reports *every* dictionary literal it finds, so one
//! stretch of text can produce several competing candidates: `persoon` and
//! `persoonsgegeven` at the same offset, or two multi-word terms that share a
//! word. `matcher` reduces that raw list to a single ordered sequence in which
//! every byte of the text belongs to at most one match.
//!
//! ## Policy
//!
//! - Process start offsets left to right.
//! - At each start, the longest candidate wins.
//! - Equal lengths are settled by registration ordinal (dictionary build
//!   order), so results are deterministic.
//! - Anything starting inside a chosen span is discarded.
//!
//! ## Example Usage
//!
//! ```
//! use index::{IndexConfig, PatternIndex};
//! use matcher::resolve;
//!
//! let index = PatternIndex::from_entries(
//!     IndexConfig::default(),
//!     [("persoon", 'A'), ("persoonsgegeven", 'B')],
//! );
//! let text = "Een persoonsgegeven van een persoon.";
//! let resolved = resolve(index.find_matches(text));
//!
//! let picked: Vec<(char, &str)> = resolved.iter().map(|m| (m.payload, m.text)).collect();
//! assert_eq!(picked, vec![('B', "persoonsgegeven"), ('A', "persoon")]);
//! ```

mod resolve;

pub use crate::resolve::{resolve, ResolvedMatch};
