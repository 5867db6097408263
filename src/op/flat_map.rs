use crate::cursor::{Cursor, Empty, Slot};
use crate::err::SeqErr;
use crate::op::Stage;
use itertools::Either;
use std::marker::PhantomData;

/// 展平映射阶段，把每个元素展开为子游标并按顺序连接所有子游标的输出。
pub struct FlatMap<S, F> {
    transform: F,
    _marker: PhantomData<fn(S)>,
}

pub fn flat_map<S, K, F>(transform: F) -> FlatMap<S, F>
where
    F: FnMut(S) -> K,
    K: Cursor,
{
    FlatMap { transform, _marker: PhantomData }
}

impl<C, K, F> Stage<C> for FlatMap<C::Item, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> K,
    K: Cursor,
{
    type Output = FlatMapCursor<C, F, K>;

    fn attach(self, outer: C) -> FlatMapCursor<C, F, K> {
        FlatMapCursor { outer, transform: self.transform, current: Either::Left(Empty::new()), slot: Slot::new() }
    }
}

/// 持有外层游标与当前展平游标，当前展平游标初始为空游标。
///
/// 每次`has_more`至多从当前展平游标取一个元素；当前展平游标耗尽后才会向外层游标拉取下一个元素，
/// 因此第`i`个子序列的全部元素都排在第`i+1`个子序列之前，空子序列被直接跳过。
pub struct FlatMapCursor<C, F, K: Cursor> {
    outer: C,
    transform: F,
    current: Either<Empty<K::Item>, K>,
    slot: Slot<K::Item>,
}

impl<C, K, F> Cursor for FlatMapCursor<C, F, K>
where
    C: Cursor,
    F: FnMut(C::Item) -> K,
    K: Cursor,
{
    type Item = K::Item;

    fn has_more(&mut self) -> bool {
        if self.slot.is_ready() {
            return true;
        }
        loop {
            if let Some(pulled) = self.current.pull() {
                return self.slot.fill(pulled);
            }
            match self.outer.pull() {
                Some(Ok(item)) => self.current = Either::Right((self.transform)(item)),
                Some(Err(err)) => return self.slot.fill(Err(err)),
                None => return false,
            }
        }
    }

    fn next(&mut self) -> Result<K::Item, SeqErr> {
        self.slot.take("flat_map")
    }
}
