mod cond;
mod config;
mod err;
mod fmt;
mod input;
mod output;
mod parse;
mod print;
mod step;

use crate::cli::cond::Select;
use crate::cli::config::Config;
use crate::cli::err::CliErr;
use crate::cli::input::Input;
use crate::cli::output::Output;
use crate::cli::step::Step;
use crate::println_info;
use itertools::Itertools;
use lseq::{Cursor, Pipe};
use std::iter::Peekable;

/// 命令行流水线中的数据
pub(crate) type Item = String;

/// 运行时逐步构建的流水线
pub(crate) type Chain = Pipe<Box<dyn Cursor<Item = Item>>>;

pub(crate) fn run() -> Result<(), CliErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::args::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("lseq {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let (input, steps, output) =
        if configs.contains(&Config::Eval) { parse_eval_token(&mut args)? } else { parse::args::parse(args)? };
    if configs.contains(&Config::Verbose) {
        println_info!("Input:");
        println!("    {:?}", input);
        println_info!("Step:");
        println!("{}", steps.iter().map(|step| format!("    {:?}", step)).join("\n"));
        println_info!("Output:");
        println!("    {:?}", output);
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }
    let chain = steps.into_iter().fold(input.chain(), |chain, step| step.wrap(chain));
    output.handle(chain)
}

fn parse_eval_token(
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> Result<(Input, Vec<Step>, Output), CliErr> {
    let Some(token) = args.next() else {
        return Err(CliErr::MissingArg { cmd: "--eval", arg: "token" });
    };
    let remaining = args.collect_vec();
    if !remaining.is_empty() {
        return Err(CliErr::UnknownArgs { args: remaining });
    }
    match parse::token::tokenize(&token) {
        Ok(tokens) => parse::args::parse(tokens.into_iter().peekable()),
        Err(error) => Err(CliErr::ArgParseErr { cmd: "--eval", arg: "token", arg_value: token, error }),
    }
}

fn print_help() {
    println_info!("Usage: lseq [<config>...] [<input>] [<step>...] [<output>]");
    let sections = [
        ("Config:", Config::all_help()),
        ("Input:", Input::all_help()),
        ("Step:", Step::all_help()),
        ("Condition:", Select::all_help()),
        ("Output:", Output::all_help()),
    ];
    for (title, helps) in sections {
        println_info!("{title}");
        println!("{}", helps.iter().map(|(_, help)| help).join("\n"));
    }
}
