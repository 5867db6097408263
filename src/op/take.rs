use crate::Integer;
use crate::cursor::{Cursor, Slot};
use crate::err::SeqErr;
use crate::op::Stage;
use std::marker::PhantomData;

/// 截取阶段，最多放行`count`个元素。
pub struct Take<T> {
    count: usize,
    _marker: PhantomData<fn() -> T>,
}

/// 负数视为0，得到始终为空的游标；超出`usize`范围的正数视为`usize::MAX`。
pub fn take<T>(count: Integer) -> Take<T> {
    Take { count: usize::try_from(count).unwrap_or(if count < 0 { 0 } else { usize::MAX }), _marker: PhantomData }
}

impl<C: Cursor> Stage<C> for Take<C::Item> {
    type Output = TakeCursor<C>;

    fn attach(self, inner: C) -> TakeCursor<C> {
        TakeCursor { inner, count: self.count, taken: 0, slot: Slot::new() }
    }
}

pub struct TakeCursor<C: Cursor> {
    inner: C,
    count: usize,
    taken: usize,
    slot: Slot<C::Item>,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        if self.slot.is_ready() {
            return true;
        }
        // 达到数量后不再拉取内部游标
        if self.taken >= self.count {
            return false;
        }
        match self.inner.pull() {
            Some(pulled) => {
                self.taken += 1;
                self.slot.fill(pulled)
            }
            None => false,
        }
    }

    fn next(&mut self) -> Result<C::Item, SeqErr> {
        self.slot.take("take")
    }
}
