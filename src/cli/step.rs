use crate::cli::cond::Condition;
use crate::cli::fmt::{FmtArg, fmt_args};
use crate::cli::{Chain, Item};
use cmd_help::CmdHelp;
use itertools::Itertools;
use lseq::{Integer, Pipe, Source, filter, flat_map, map, seq, take};

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Step {
    /// filter      保留满足条件的数据，丢弃其他数据。
    ///             filter <condition>
    ///                 <condition> 条件表达式，参考下方的条件说明。
    ///             例如：
    ///                 filter even
    ///                 filter !empty
    ///                 filter reg '^\d+$'
    Filter { cond: Condition },
    /// take        保留前N个数据，之后不再读取上游数据。
    ///             take <count>
    ///                 <count> 需要保留的数量，必须为整数，必选，负数视为0。
    Take { count: Integer },
    /// map         逐个转换数据。
    ///             map upper|lower|add <n>|fmt <template>
    ///                 upper       转为ASCII大写。
    ///                 lower       转为ASCII小写。
    ///                 add <n>     整数数据加上<n>，无法解析为整数的数据保持不变。
    ///                 fmt <template>
    ///                             以{v}表示原数据，生成新的文本，支持Rust格式说明，
    ///                             例如{v:>5}、{v:#x}、{v:.2}，数据不支持该格式时保持不变。
    ///             例如：
    ///                 map add 100
    ///                 map fmt "item: {v}"
    ///                 map fmt {v:08b}
    Map(MapArg),
    /// flat        把每个数据展开为多个数据，按顺序依次输出。
    ///             flat chars|split <sep>
    ///                 chars       展开为单个字符。
    ///                 split <sep> 按<sep>分割。
    ///             例如：
    ///                 flat chars
    ///                 flat split ,
    Flat(FlatArg),
}

#[derive(Debug, PartialEq)]
pub(crate) enum MapArg {
    Upper,
    Lower,
    Add(Integer),
    Fmt(String),
}

#[derive(Debug, PartialEq)]
pub(crate) enum FlatArg {
    Chars,
    Split(String),
}

impl Step {
    pub(crate) fn new_filter(cond: Condition) -> Step {
        Step::Filter { cond }
    }
    pub(crate) fn new_take(count: Integer) -> Step {
        Step::Take { count }
    }

    pub(crate) fn wrap(self, chain: Chain) -> Chain {
        match self {
            Step::Filter { cond } => (chain >> filter(move |item: &Item| cond.test(item))).boxed(),
            Step::Take { count } => (chain >> take(count)).boxed(),
            Step::Map(arg) => (chain >> map(move |item: Item| arg.apply(item))).boxed(),
            Step::Flat(arg) => (chain >> flat_map(move |item: Item| arg.expand(item))).boxed(),
        }
    }
}

impl MapArg {
    fn apply(&self, mut item: Item) -> Item {
        match self {
            MapArg::Upper => {
                item.make_ascii_uppercase();
                item
            }
            MapArg::Lower => {
                item.make_ascii_lowercase();
                item
            }
            MapArg::Add(n) => match item.parse::<Integer>() {
                Ok(v) => v.saturating_add(*n).to_string(),
                Err(_) => item,
            },
            // 模板在解析时已校验，数据类型不支持格式时保持原数据
            MapArg::Fmt(template) => fmt_args(template, &[("v", FmtArg::from(item.as_str()))]).unwrap_or(item),
        }
    }
}

impl FlatArg {
    fn expand(&self, item: Item) -> Pipe<Source<std::vec::IntoIter<Item>>> {
        match self {
            FlatArg::Chars => seq(item.chars().map(String::from).collect_vec()),
            FlatArg::Split(sep) => seq(item.split(sep.as_str()).map(String::from).collect_vec()),
        }
    }
}
