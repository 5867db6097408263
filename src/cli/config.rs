use cmd_help::CmdHelp;

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Config {
    /// -h          打印帮助信息。
    Help,
    /// -V          打印版本。
    Version,
    /// -v          执行前打印解析得到的流水线。
    Verbose,
    /// -d          仅解析，不执行。
    DryRun,
    /// --eval      以Token模式解析下一个参数。
    ///             --eval <token>
    ///                 <token> 完整的流水线文本，支持使用双引号或单引号包围带空格的参数。
    ///             例如：
    ///                 --eval "of [ 1 2 3 ] map fmt 'n {v}'"
    Eval,
}
