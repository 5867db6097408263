use crate::cli::cond::{Condition, Select};
use crate::cli::err::CliErr;
use crate::cli::fmt::check_template;
use crate::cli::parse::args::parse_required;
use crate::cli::step::{FlatArg, MapArg, Step};
use lseq::Integer;
use regex::Regex;
use std::iter::Peekable;

pub(in crate::cli::parse::args) fn parse_steps(
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> Result<Vec<Step>, CliErr> {
    let mut steps = vec![];
    while let Some(step) = parse_step(args)? {
        steps.push(step);
    }
    Ok(steps)
}

fn parse_step(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Step>, CliErr> {
    match args.peek() {
        Some(cmd) => {
            if cmd.eq_ignore_ascii_case("filter") {
                args.next();
                parse_filter(args)
            } else if cmd.eq_ignore_ascii_case("take") {
                args.next();
                Ok(Some(Step::new_take(parse_required::<Integer>(args, "take", "count")?)))
            } else if cmd.eq_ignore_ascii_case("map") {
                args.next();
                parse_map(args)
            } else if cmd.eq_ignore_ascii_case("flat") {
                args.next();
                parse_flat(args)
            } else {
                Ok(None)
            }
        }
        None => Ok(None),
    }
}

fn parse_filter(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Step>, CliErr> {
    let Some(mut cond) = args.next() else {
        return Err(CliErr::MissingArg { cmd: "filter", arg: "condition" });
    };
    // 否定：`!cond`或`! cond`
    let not = cond.starts_with('!');
    if cond == "!" {
        match args.next() {
            Some(next) => cond = next,
            None => return Err(CliErr::MissingArg { cmd: "filter", arg: "condition" }),
        }
    } else if not {
        cond.remove(0);
    }
    let select = match cond.to_ascii_lowercase().as_str() {
        "num" => Select::Num,
        "even" => Select::new_parity(true),
        "odd" => Select::new_parity(false),
        "empty" => Select::Empty,
        "reg" => {
            let reg = parse_required::<String>(args, "filter reg", "exp")?;
            match Regex::new(&reg) {
                Ok(regex) => Select::new_reg_match(regex),
                Err(err) => return Err(CliErr::ParseRegexErr { reg, err: err.to_string() }),
            }
        }
        _ => {
            return Err(CliErr::ArgParseErr {
                cmd: "filter",
                arg: "condition",
                arg_value: cond,
                error: "unknown condition".to_string(),
            });
        }
    };
    Ok(Some(Step::new_filter(Condition::new(select, not))))
}

fn parse_map(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Step>, CliErr> {
    let Some(mode) = args.next() else {
        return Err(CliErr::MissingArg { cmd: "map", arg: "mode" });
    };
    let arg = match mode.to_ascii_lowercase().as_str() {
        "upper" => MapArg::Upper,
        "lower" => MapArg::Lower,
        "add" => MapArg::Add(parse_required::<Integer>(args, "map add", "n")?),
        "fmt" => {
            let template = parse_required::<String>(args, "map fmt", "template")?;
            if let Err(pos) = check_template(&template) {
                return Err(CliErr::ArgParseErr {
                    cmd: "map fmt",
                    arg: "template",
                    arg_value: template,
                    error: format!("invalid format at {pos}"),
                });
            }
            MapArg::Fmt(template)
        }
        _ => {
            return Err(CliErr::ArgParseErr {
                cmd: "map",
                arg: "mode",
                arg_value: mode,
                error: "expect `upper`, `lower`, `add` or `fmt`".to_string(),
            });
        }
    };
    Ok(Some(Step::Map(arg)))
}

fn parse_flat(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Step>, CliErr> {
    let Some(mode) = args.next() else {
        return Err(CliErr::MissingArg { cmd: "flat", arg: "mode" });
    };
    let arg = match mode.to_ascii_lowercase().as_str() {
        "chars" => FlatArg::Chars,
        "split" => {
            let sep = parse_required::<String>(args, "flat split", "sep")?;
            if sep.is_empty() {
                return Err(CliErr::ArgParseErr {
                    cmd: "flat split",
                    arg: "sep",
                    arg_value: sep,
                    error: "separator must not be empty".to_string(),
                });
            }
            FlatArg::Split(sep)
        }
        _ => {
            return Err(CliErr::ArgParseErr {
                cmd: "flat",
                arg: "mode",
                arg_value: mode,
                error: "expect `chars` or `split`".to_string(),
            });
        }
    };
    Ok(Some(Step::Flat(arg)))
}
