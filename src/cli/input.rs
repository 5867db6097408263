use crate::cli::Chain;
use cmd_help::CmdHelp;
use lseq::{Integer, seq};
use std::io;

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// in          从标准输入读取，每行一个数据，读取出错时结束。
    ///             未指定输入时的默认输入。
    StdIn,
    /// of          使用直接字面值作为输入。
    ///             of <value>|[ <value>[ <value>][...] ]
    ///                 <value> 字面值，多个值时使用中括号包围，单独的`[`或`]`需要使用`\[`或`\]`转义。
    ///             例如：
    ///                 of line
    ///                 of [ 1 2 3 ]
    Of { values: Vec<String> },
    /// gen         生成指定范围内的整数作为输入。
    ///             gen <start>,<end>[,<step>]
    ///                 <start> 起始值，包含，必选。
    ///                 <end>   结束值，不包含，必选。
    ///                 <step>  步长，必须为正整数，可选，未指定时为1。
    ///             例如：
    ///                 gen 0,10        生成：0 1 2 3 4 5 6 7 8 9
    ///                 gen 0,10,3      生成：0 3 6 9
    ///                 gen 10,0        无数据生成
    Gen { start: Integer, end: Integer, step: Integer },
}

impl Input {
    pub(crate) fn new_std_in() -> Input {
        Input::StdIn
    }
    pub(crate) fn new_of(values: Vec<String>) -> Input {
        Input::Of { values }
    }
    pub(crate) fn new_gen(start: Integer, end: Integer, step: Integer) -> Input {
        Input::Gen { start, end, step }
    }

    pub(crate) fn chain(self) -> Chain {
        match self {
            Input::StdIn => seq(io::stdin().lines().map_while(Result::ok)).boxed(),
            Input::Of { values } => seq(values).boxed(),
            Input::Gen { start, end, step } => {
                // 步长在解析时已校验为正数，超出`usize`范围时只会产出起始值
                let step = usize::try_from(step).unwrap_or(usize::MAX);
                seq((start..end).step_by(step).map(|v| v.to_string())).boxed()
            }
        }
    }
}
