//! 惰性、可组合的拉取式序列处理。
//!
//! ```
//! use lseq::{Cursor, filter, flat_map, map, seq, take};
//!
//! let mut pipe = seq(vec![1, 2, 3, 4, 5, 6, 7, 8, 9])
//!     >> filter(|v: &i64| v % 2 == 0)
//!     >> take(4)
//!     >> map(|v: i64| (v + 100).to_string())
//!     >> flat_map(|s: String| seq(s.chars().map(|c| c as i64 - 48).collect::<Vec<_>>()));
//!
//! let mut digits = Vec::new();
//! while pipe.has_more() {
//!     digits.push(pipe.next()?);
//! }
//! assert_eq!(digits, vec![1, 0, 2, 1, 0, 4, 1, 0, 6, 1, 0, 8]);
//! # Ok::<(), lseq::SeqErr>(())
//! ```

pub mod cursor;
pub mod err;
pub mod op;
pub mod pipe;

pub use cursor::{Cursor, Empty, Iter, Source};
pub use err::SeqErr;
pub use op::{Stage, filter, flat_map, map, take};
pub use pipe::{Pipe, compose, seq};

/// 整数类型
pub type Integer = i64;
