use crate::cursor::{Cursor, Source};
use crate::err::SeqErr;
use crate::op::Stage;
use std::ops::Shr;

/// 流水线的头部游标。
///
/// 通过`>>`、[`Pipe::then`]或[`compose`]连接阶段，每次连接都会把当前头部移入阶段，
/// 并以阶段产出的游标作为新的头部。连接本身不会拉取任何元素。
pub struct Pipe<C> {
    cursor: C,
}

/// 把有限集合包装为流水线的起点。
pub fn seq<T: IntoIterator>(items: T) -> Pipe<Source<T::IntoIter>> {
    Pipe { cursor: Source::new(items) }
}

/// 把`head`交给`stage`独占，返回新的头部游标。
pub fn compose<C, S>(head: C, stage: S) -> S::Output
where
    C: Cursor,
    S: Stage<C>,
{
    stage.attach(head)
}

impl<C: Cursor> Pipe<C> {
    pub fn new(cursor: C) -> Pipe<C> {
        Pipe { cursor }
    }

    pub fn then<S: Stage<C>>(self, stage: S) -> Pipe<S::Output> {
        Pipe { cursor: compose(self.cursor, stage) }
    }

    /// 擦除具体类型，便于在运行时逐步追加阶段。
    pub fn boxed(self) -> Pipe<Box<dyn Cursor<Item = C::Item>>>
    where
        C: 'static,
    {
        Pipe { cursor: Box::new(self.cursor) }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Cursor for Pipe<C> {
    type Item = C::Item;

    #[inline]
    fn has_more(&mut self) -> bool {
        self.cursor.has_more()
    }

    #[inline]
    fn next(&mut self) -> Result<C::Item, SeqErr> {
        self.cursor.next()
    }
}

impl<C, S> Shr<S> for Pipe<C>
where
    C: Cursor,
    S: Stage<C>,
{
    type Output = Pipe<S::Output>;

    fn shr(self, stage: S) -> Pipe<S::Output> {
        self.then(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Empty;
    use crate::op::{filter, flat_map, map, take};
    use itertools::Itertools;

    fn digits(s: String) -> Pipe<Source<std::vec::IntoIter<i64>>> {
        seq(s.chars().map(|c| c as i64 - '0' as i64).collect_vec())
    }

    #[test]
    fn test_end_to_end() {
        let mut pipe = seq(vec![1, 2, 3, 4, 5, 6, 7, 8, 9])
            >> filter(|v: &i64| v % 2 == 0)
            >> take(4)
            >> map(|v: i64| (v + 100).to_string())
            >> flat_map(digits);
        let mut output = Vec::new();
        while pipe.has_more() {
            output.push(pipe.next().unwrap());
        }
        assert_eq!(vec![1, 0, 2, 1, 0, 4, 1, 0, 6, 1, 0, 8], output);
        assert!(!pipe.has_more());
    }

    #[test]
    fn test_stage_outputs() {
        let evens = (seq(1..=9) >> filter(|v: &i32| v % 2 == 0)).try_collect().unwrap();
        assert_eq!(vec![2, 4, 6, 8], evens);
        let taken = (seq(vec![2, 4, 6, 8]) >> take(4)).try_collect().unwrap();
        assert_eq!(vec![2, 4, 6, 8], taken);
        let mapped = (seq(vec![2, 4, 6, 8]) >> map(|v: i32| (v + 100).to_string())).try_collect().unwrap();
        assert_eq!(vec!["102", "104", "106", "108"], mapped);
    }

    #[test]
    fn test_then_and_compose_agree_with_shr() {
        let by_then = seq(1..=20)
            .then(filter(|v: &i32| v % 3 == 0))
            .then(map(|v: i32| v * 2))
            .then(take(3))
            .try_collect()
            .unwrap();
        let by_compose =
            compose(compose(compose(Source::new(1..=20), filter(|v: &i32| v % 3 == 0)), map(|v: i32| v * 2)), take(3))
                .try_collect()
                .unwrap();
        assert_eq!(vec![6, 12, 18], by_then);
        assert_eq!(by_then, by_compose);
    }

    #[test]
    fn test_empty_chain_behaves_like_source() {
        let mut pipe = seq(vec!['a', 'b']);
        let mut source = Source::new(vec!['a', 'b']);
        assert_eq!(source.next(), pipe.next());
        for _ in 0..3 {
            assert_eq!(source.has_more(), pipe.has_more());
            assert_eq!(source.next(), pipe.next());
        }
        assert_eq!(source.has_more(), pipe.has_more());
    }

    #[test]
    fn test_next_before_has_more_on_chain() {
        let mut pipe = seq(vec![1]) >> map(|v: i32| v + 1);
        assert_eq!(Err(SeqErr::Sequencing { cursor: "map" }), pipe.next());
        assert_eq!(Some(Ok(2)), pipe.pull());
        assert!(!pipe.has_more());
        assert_eq!(Err(SeqErr::Sequencing { cursor: "map" }), pipe.next());
    }

    /// 声称有元素却无法给出的游标，用于验证错误原样向外传递。
    struct Broken {
        remaining: usize,
    }

    impl Cursor for Broken {
        type Item = i32;

        fn has_more(&mut self) -> bool {
            self.remaining > 0
        }

        fn next(&mut self) -> Result<i32, SeqErr> {
            self.remaining -= 1;
            Err(SeqErr::Sequencing { cursor: "broken" })
        }
    }

    #[test]
    fn test_inner_error_propagates_unchanged() {
        let broken = SeqErr::Sequencing { cursor: "broken" };
        let mut pipe = Pipe::new(Broken { remaining: 2 })
            >> filter(|_: &i32| false)
            >> take(10)
            >> map(|v: i32| v.to_string())
            >> flat_map(|s: String| seq(s.into_bytes()));
        assert!(pipe.has_more());
        assert_eq!(Err(broken.clone()), pipe.next());
        assert_eq!(Some(Err(broken.clone())), pipe.pull());
        assert!(!pipe.has_more());
        let collected = (Pipe::new(Broken { remaining: 1 }) >> take(1)).try_collect();
        assert_eq!(Err(broken), collected);
    }

    #[test]
    fn test_sub_cursor_error_propagates_unchanged() {
        let broken = SeqErr::Sequencing { cursor: "broken" };
        let mut pipe = seq(vec![1, 0, 2])
            >> flat_map(|v: usize| {
                if v == 0 {
                    itertools::Either::Right(Broken { remaining: 1 })
                } else {
                    itertools::Either::Left(Source::new(vec![v as i32; v]))
                }
            })
            >> map(|v: i32| v * 10);
        assert_eq!(Some(Ok(10)), pipe.pull());
        assert!(pipe.has_more());
        assert!(pipe.has_more());
        assert_eq!(Err(broken), pipe.next());
        assert_eq!(Some(Ok(20)), pipe.pull());
        assert_eq!(Some(Ok(20)), pipe.pull());
        assert!(!pipe.has_more());
    }

    #[test]
    fn test_boxed_chain_extends_at_runtime() {
        let mut pipe = seq(vec!["a b", "", "c"]).then(map(|s: &str| s.to_string())).boxed();
        pipe = (pipe >> filter(|s: &String| !s.is_empty())).boxed();
        pipe = (pipe >> flat_map(|s: String| seq(s.split(' ').map(String::from).collect_vec()))).boxed();
        assert_eq!(vec!["a", "b", "c"], pipe.try_collect().unwrap());
    }

    #[test]
    fn test_pipe_over_empty() {
        let pipe = Pipe::new(Empty::<i32>::new()) >> map(|v: i32| v * 2);
        assert!(pipe.into_inner().try_collect().unwrap().is_empty());
    }
}
