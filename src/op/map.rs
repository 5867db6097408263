use crate::cursor::{Cursor, Slot};
use crate::err::SeqErr;
use crate::op::Stage;
use std::marker::PhantomData;

/// 映射阶段，一对一变换元素，可改变元素类型。
pub struct Map<S, F> {
    transform: F,
    _marker: PhantomData<fn(S)>,
}

pub fn map<S, R, F>(transform: F) -> Map<S, F>
where
    F: FnMut(S) -> R,
{
    Map { transform, _marker: PhantomData }
}

impl<C, R, F> Stage<C> for Map<C::Item, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> R,
{
    type Output = MapCursor<C, F, R>;

    fn attach(self, inner: C) -> MapCursor<C, F, R> {
        MapCursor { inner, transform: self.transform, slot: Slot::new() }
    }
}

pub struct MapCursor<C, F, R> {
    inner: C,
    transform: F,
    slot: Slot<R>,
}

impl<C, R, F> Cursor for MapCursor<C, F, R>
where
    C: Cursor,
    F: FnMut(C::Item) -> R,
{
    type Item = R;

    fn has_more(&mut self) -> bool {
        if self.slot.is_ready() {
            return true;
        }
        match self.inner.pull() {
            Some(pulled) => self.slot.fill(pulled.map(&mut self.transform)),
            None => false,
        }
    }

    fn next(&mut self) -> Result<R, SeqErr> {
        self.slot.take("map")
    }
}
