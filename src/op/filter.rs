use crate::cursor::{Cursor, Slot};
use crate::err::SeqErr;
use crate::op::Stage;
use std::marker::PhantomData;

/// 过滤阶段，丢弃不满足谓词的元素。
pub struct Filter<T, P> {
    predicate: P,
    _marker: PhantomData<fn(&T) -> bool>,
}

pub fn filter<T, P>(predicate: P) -> Filter<T, P>
where
    P: FnMut(&T) -> bool,
{
    Filter { predicate, _marker: PhantomData }
}

impl<C, P> Stage<C> for Filter<C::Item, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Output = FilterCursor<C, P>;

    fn attach(self, inner: C) -> FilterCursor<C, P> {
        FilterCursor { inner, predicate: self.predicate, slot: Slot::new() }
    }
}

pub struct FilterCursor<C: Cursor, P> {
    inner: C,
    predicate: P,
    slot: Slot<C::Item>,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        if self.slot.is_ready() {
            return true;
        }
        while let Some(pulled) = self.inner.pull() {
            match pulled {
                Ok(item) => {
                    if (self.predicate)(&item) {
                        return self.slot.fill(Ok(item));
                    }
                }
                Err(err) => return self.slot.fill(Err(err)),
            }
        }
        false
    }

    fn next(&mut self) -> Result<C::Item, SeqErr> {
        self.slot.take("filter")
    }
}
