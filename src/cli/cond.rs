use cmd_help::CmdHelp;
use lseq::Integer;
use regex::Regex;

/// 条件
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Condition {
    Yes(Select),
    No(Select),
}

impl Condition {
    pub(crate) fn new(select: Select, not: bool) -> Condition {
        if not { Condition::No(select) } else { Condition::Yes(select) }
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        match self {
            Condition::Yes(select) => select.select(input),
            Condition::No(select) => !select.select(input),
        }
    }
}

/// 选择
#[derive(Debug, Clone, CmdHelp)]
pub(crate) enum Select {
    /// [!]num
    ///     选择可以解析为整数或浮点数的数据。
    Num,
    /// [!]even
    ///     选择偶数，无法解析为整数的数据不选择。
    /// [!]odd
    ///     选择奇数，无法解析为整数的数据不选择。
    Parity { even: bool },
    /// [!]empty
    ///     选择空字符串。
    Empty,
    /// [!]reg <exp>
    ///     选择匹配给定正则表达式的数据。
    ///     <exp>   正则表达式，必选。
    ///     例如：
    ///         reg '^\d+$'
    RegMatch { regex: Regex },
}

impl PartialEq for Select {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Select::Num, Select::Num) => true,
            (Select::Parity { even: l }, Select::Parity { even: r }) => l == r,
            (Select::Empty, Select::Empty) => true,
            // Regex 比较模式字符串
            (Select::RegMatch { regex: l }, Select::RegMatch { regex: r }) => l.as_str() == r.as_str(),
            _ => false,
        }
    }
}

impl Select {
    pub(crate) fn new_parity(even: bool) -> Select {
        Select::Parity { even }
    }
    pub(crate) fn new_reg_match(regex: Regex) -> Select {
        Select::RegMatch { regex }
    }

    fn select(&self, input: &str) -> bool {
        match self {
            Select::Num => input.parse::<Integer>().is_ok() || input.parse::<f64>().is_ok(),
            Select::Parity { even } => input.parse::<Integer>().map(|v| (v % 2 == 0) == *even).unwrap_or(false),
            Select::Empty => input.is_empty(),
            Select::RegMatch { regex } => regex.is_match(input),
        }
    }

    #[cfg(test)]
    fn yes(self) -> Condition {
        Condition::new(self, false)
    }

    #[cfg(test)]
    fn no(self) -> Condition {
        Condition::new(self, true)
    }
}
