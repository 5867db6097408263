//! 组合子。
//!
//! 每个工厂函数返回一个尚未连接的阶段（[`Stage`]），组合时阶段接收内部游标的所有权并产出新的游标。
//! 谓词与变换均以泛型闭包参数表示：
//!  - 过滤：`FnMut(&T) -> bool`；
//!  - 映射：`FnMut(S) -> R`；
//!  - 展平映射：`FnMut(S) -> K`，其中`K: Cursor<Item = R>`。

mod filter;
mod flat_map;
mod map;
mod take;

use crate::cursor::Cursor;

pub use filter::{Filter, FilterCursor, filter};
pub use flat_map::{FlatMap, FlatMapCursor, flat_map};
pub use map::{Map, MapCursor, map};
pub use take::{Take, TakeCursor, take};

/// 未连接的组合子。
///
/// `attach`按值消耗阶段与内部游标，因此一个阶段不可能被连接两次。
pub trait Stage<C: Cursor> {
    type Output: Cursor;

    fn attach(self, inner: C) -> Self::Output;
}
