use crate::err::SeqErr;
use itertools::Either;
use std::iter::Fuse;
use std::marker::PhantomData;

/// 游标：有状态、单遍、拉取式的元素生产者。
///
/// `has_more` 负责推进内部状态并准备下一个元素，`next` 只取出最近一次准备好的元素。
/// 没有紧邻的、返回`true`的`has_more`就调用`next`会得到[`SeqErr::Sequencing`]。
/// 元素按值移出，所以同一次`has_more`之后第二次调用`next`同样是协议错误。
pub trait Cursor {
    type Item;

    /// 尝试准备下一个元素，返回是否存在。重复调用不会跳过已准备好的元素。
    fn has_more(&mut self) -> bool;

    /// 取出已准备好的元素。
    fn next(&mut self) -> Result<Self::Item, SeqErr>;

    /// `has_more`与`next`的组合，组合子内部按此方式从内部游标拉取。
    fn pull(&mut self) -> Option<Result<Self::Item, SeqErr>> {
        if self.has_more() { Some(self.next()) } else { None }
    }

    /// 转为标准迭代器，元素为`Result`。
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter { cursor: self }
    }

    /// 拉取至耗尽，遇到第一个错误即返回。
    fn try_collect(self) -> Result<Vec<Self::Item>, SeqErr>
    where
        Self: Sized,
    {
        self.iter().collect()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    fn next(&mut self) -> Result<Self::Item, SeqErr> {
        (**self).next()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    fn next(&mut self) -> Result<Self::Item, SeqErr> {
        (**self).next()
    }
}

impl<L, R> Cursor for Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn has_more(&mut self) -> bool {
        match self {
            Either::Left(left) => left.has_more(),
            Either::Right(right) => right.has_more(),
        }
    }

    fn next(&mut self) -> Result<Self::Item, SeqErr> {
        match self {
            Either::Left(left) => left.next(),
            Either::Right(right) => right.next(),
        }
    }
}

/// 游标到标准迭代器的适配。
#[derive(Debug)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = Result<C::Item, SeqErr>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.pull()
    }
}

/// 单元素缓存：`has_more`成功时填入，`next`时取出。
#[derive(Debug)]
pub(crate) struct Slot<T> {
    ready: Option<Result<T, SeqErr>>,
}

impl<T> Slot<T> {
    pub(crate) fn new() -> Slot<T> {
        Slot { ready: None }
    }

    #[inline]
    pub(crate) fn is_ready(&self) -> bool {
        self.ready.is_some()
    }

    /// 填入就绪元素，总是返回`true`，便于`has_more`直接返回。
    #[inline]
    pub(crate) fn fill(&mut self, item: Result<T, SeqErr>) -> bool {
        self.ready = Some(item);
        true
    }

    pub(crate) fn take(&mut self, cursor: &'static str) -> Result<T, SeqErr> {
        self.ready.take().unwrap_or_else(|| Err(SeqErr::sequencing(cursor)))
    }
}

/// 源：把有限集合包装为游标。耗尽后`has_more`永远返回`false`。
#[derive(Debug)]
pub struct Source<I: Iterator> {
    iter: Fuse<I>,
    slot: Slot<I::Item>,
}

impl<I: Iterator> Source<I> {
    pub fn new<C>(items: C) -> Source<I>
    where
        C: IntoIterator<IntoIter = I>,
    {
        Source { iter: items.into_iter().fuse(), slot: Slot::new() }
    }
}

impl<I: Iterator> Cursor for Source<I> {
    type Item = I::Item;

    fn has_more(&mut self) -> bool {
        if self.slot.is_ready() {
            return true;
        }
        match self.iter.next() {
            Some(item) => self.slot.fill(Ok(item)),
            None => false,
        }
    }

    fn next(&mut self) -> Result<Self::Item, SeqErr> {
        self.slot.take("source")
    }
}

/// 空游标：从不产生元素，用作展平组合子“当前无可展平内容”的占位。
#[derive(Debug)]
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    pub fn new() -> Empty<T> {
        Empty { _marker: PhantomData }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Empty::new()
    }
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        false
    }

    fn next(&mut self) -> Result<T, SeqErr> {
        Err(SeqErr::sequencing("empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_yields_in_order() {
        let mut source = Source::new(vec![1, 2, 3]);
        assert!(source.has_more());
        assert_eq!(Ok(1), source.next());
        assert!(source.has_more());
        assert_eq!(Ok(2), source.next());
        assert!(source.has_more());
        assert_eq!(Ok(3), source.next());
        assert!(!source.has_more());
    }

    #[test]
    fn test_source_stays_exhausted() {
        let mut source = Source::new(Vec::<i32>::new());
        for _ in 0..5 {
            assert!(!source.has_more());
        }
        let mut source = Source::new(["a"]);
        assert_eq!(Some(Ok("a")), source.pull());
        for _ in 0..5 {
            assert!(!source.has_more());
        }
    }

    #[test]
    fn test_source_repeated_has_more_does_not_skip() {
        let mut source = Source::new(1..=3);
        assert!(source.has_more());
        assert!(source.has_more());
        assert!(source.has_more());
        assert_eq!(Ok(1), source.next());
        assert_eq!(vec![2, 3], source.try_collect().unwrap());
    }

    #[test]
    fn test_source_next_without_has_more() {
        let mut source = Source::new(vec![1, 2]);
        assert_eq!(Err(SeqErr::sequencing("source")), source.next());
        assert!(source.has_more());
        assert_eq!(Ok(1), source.next());
        assert_eq!(Err(SeqErr::sequencing("source")), source.next());
    }

    #[test]
    fn test_source_next_after_exhaustion() {
        let mut source = Source::new(vec![1]);
        assert_eq!(Some(Ok(1)), source.pull());
        assert!(!source.has_more());
        assert_eq!(Err(SeqErr::sequencing("source")), source.next());
    }

    #[test]
    fn test_empty() {
        let mut empty = Empty::<String>::new();
        assert!(!empty.has_more());
        assert!(!empty.has_more());
        assert_eq!(Err(SeqErr::sequencing("empty")), empty.next());
        assert!(Empty::<u8>::default().try_collect().unwrap().is_empty());
    }

    #[test]
    fn test_either_delegates() {
        let mut left: Either<Empty<i32>, Source<std::vec::IntoIter<i32>>> = Either::Left(Empty::new());
        assert!(!left.has_more());
        let right: Either<Empty<i32>, _> = Either::Right(Source::new(vec![4, 5]));
        assert_eq!(vec![4, 5], right.try_collect().unwrap());
    }

    #[test]
    fn test_boxed_and_borrowed() {
        let mut boxed: Box<dyn Cursor<Item = char>> = Box::new(Source::new("ab".chars()));
        assert_eq!(Some(Ok('a')), boxed.pull());
        let mut borrowed = &mut boxed;
        assert_eq!(Some(Ok('b')), borrowed.pull());
        assert!(!borrowed.has_more());
    }

    #[test]
    fn test_iter() {
        let items = Source::new(vec!["x", "y"]).iter().collect::<Vec<_>>();
        assert_eq!(vec![Ok("x"), Ok("y")], items);
    }
}
