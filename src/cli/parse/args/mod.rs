use crate::cli::err::CliErr;
use crate::cli::input::Input;
use crate::cli::output::Output;
use crate::cli::parse::args::input::parse_input;
use crate::cli::parse::args::output::parse_output;
use crate::cli::parse::args::step::parse_steps;
use crate::cli::step::Step;
use std::iter::Peekable;
use std::str::FromStr;

mod config;
mod input;
mod output;
mod step;

pub(crate) use config::parse_configs;

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Step>, Output), CliErr> {
    let input = parse_input(&mut args)?;
    let steps = parse_steps(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(CliErr::UnknownArgs { args: remaining }) } else { Ok((input, steps, output)) }
}

/// 解析单个参数，或中括号包围的一个以上参数：
///  - `arg`
///  - `[ arg0 arg1 ... ]`
fn parse_arg_or_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, CliErr> {
    match args.next() {
        Some(value) => {
            if value == "[" {
                // 多值开始
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value == "]" {
                        // 多值结束
                        return if values.is_empty() { Err(CliErr::ArgNotEnough { cmd, arg }) } else { Ok(values) };
                    } else {
                        values.push(escaped(value))
                    }
                }
                Err(CliErr::UnclosingMultiArg { cmd, arg })
            } else if value == "]" {
                // 未开启的多值结束
                Err(CliErr::UnexpectedClosingBracket { cmd, arg })
            } else {
                Ok(vec![escaped(value)])
            }
        }
        None => Err(CliErr::MissingArg { cmd, arg }),
    }
}

fn escaped(arg: String) -> String {
    if arg == "\\[" || arg == "\\]" { arg[1..].to_string() } else { arg }
}

/// 消耗必选参数并解析为指定类型。
fn parse_required<T: FromStr<Err: ToString>>(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<T, CliErr> {
    match args.next() {
        Some(value) => value.parse::<T>().map_err(|err| CliErr::ArgParseErr {
            cmd,
            arg,
            error: err.to_string(),
            arg_value: value,
        }),
        None => Err(CliErr::MissingArg { cmd, arg }),
    }
}

fn consume_if<F>(args: &mut Peekable<impl Iterator<Item = String>>, f: F) -> Option<String>
where
    F: FnOnce(&String) -> bool,
{
    args.next_if(f)
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').map(String::from).peekable()
}
