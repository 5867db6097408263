use crate::cli::err::CliErr;
use crate::cli::output::Output;
use crate::cli::parse::args::consume_if;
use std::iter::Peekable;

pub(in crate::cli::parse::args) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, CliErr> {
    if consume_if(args, |cmd| cmd.eq_ignore_ascii_case("to")).is_none() {
        return Ok(Output::new_std_out());
    }
    match args.peek() {
        Some(output) => {
            if output.eq_ignore_ascii_case("file") {
                args.next(); // 消耗`file`
                parse_file(args)
            } else if output.eq_ignore_ascii_case("out") {
                args.next(); // 消耗`out`
                Ok(Output::new_std_out())
            } else {
                Ok(Output::new_std_out())
            }
        }
        None => Ok(Output::new_std_out()),
    }
}

fn parse_file(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, CliErr> {
    match args.next() {
        Some(file) => {
            let append = consume_if(args, |s| s.eq_ignore_ascii_case("append")).is_some();
            Ok(Output::new_file(file, append))
        }
        None => Err(CliErr::MissingArg { cmd: "to file", arg: "file" }),
    }
}
