use crate::cli::err::CliErr;
use crate::cli::input::Input;
use crate::cli::parse::args::parse_arg_or_arg1;
use lseq::Integer;
use std::iter::Peekable;

pub(in crate::cli::parse::args) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, CliErr> {
    match args.peek() {
        Some(cmd) => {
            if cmd.eq_ignore_ascii_case("in") {
                args.next();
                Ok(Input::new_std_in())
            } else if cmd.eq_ignore_ascii_case("of") {
                args.next();
                Ok(Input::new_of(parse_arg_or_arg1(args, "of", "value")?))
            } else if cmd.eq_ignore_ascii_case("gen") {
                args.next();
                parse_gen(args)
            } else {
                Ok(Input::new_std_in()) // 默认从标准输入获取
            }
        }
        None => Ok(Input::new_std_in()),
    }
}

fn parse_gen(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, CliErr> {
    let Some(range) = args.next() else {
        return Err(CliErr::MissingArg { cmd: "gen", arg: "range" });
    };
    let invalid = |error: &str| CliErr::ArgParseErr {
        cmd: "gen",
        arg: "range",
        arg_value: range.clone(),
        error: error.to_string(),
    };
    let parts = range.split(',').map(str::trim).collect::<Vec<_>>();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(invalid("expect `<start>,<end>[,<step>]`"));
    }
    let mut values = Vec::with_capacity(parts.len());
    for part in &parts {
        values.push(part.parse::<Integer>().map_err(|err| invalid(&err.to_string()))?);
    }
    let step = values.get(2).copied().unwrap_or(1);
    if step <= 0 {
        return Err(invalid("step must be positive"));
    }
    Ok(Input::new_gen(values[0], values[1], step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::args::build_args;

    #[test]
    fn test_parse_std_in() {
        let mut args = build_args("in");
        assert_eq!(Ok(Input::new_std_in()), parse_input(&mut args));
        assert!(args.next().is_none());

        let mut args = build_args("take 1");
        assert_eq!(Ok(Input::new_std_in()), parse_input(&mut args));
        assert_eq!(Some("take".to_string()), args.next());
    }

    #[test]
    fn test_parse_of() {
        let mut args = build_args("of a");
        assert_eq!(Ok(Input::new_of(vec!["a".to_string()])), parse_input(&mut args));
        assert!(args.next().is_none());

        let mut args = build_args("of [ a b ] take");
        assert_eq!(Ok(Input::new_of(vec!["a".to_string(), "b".to_string()])), parse_input(&mut args));
        assert_eq!(Some("take".to_string()), args.next());
    }

    #[test]
    fn test_parse_gen() {
        assert_eq!(Ok(Input::new_gen(0, 10, 1)), parse_input(&mut build_args("gen 0,10")));
        assert_eq!(Ok(Input::new_gen(-5, 10, 3)), parse_input(&mut build_args("gen -5,10,3")));
        assert_eq!(Err(CliErr::MissingArg { cmd: "gen", arg: "range" }), parse_input(&mut build_args("gen")));
        assert_eq!(
            Err(CliErr::ArgParseErr {
                cmd: "gen",
                arg: "range",
                arg_value: "0,10,0".to_string(),
                error: "step must be positive".to_string()
            }),
            parse_input(&mut build_args("gen 0,10,0"))
        );
        assert!(matches!(parse_input(&mut build_args("gen 0")), Err(CliErr::ArgParseErr { .. })));
        assert!(matches!(parse_input(&mut build_args("gen 0,x")), Err(CliErr::ArgParseErr { .. })));
        assert!(matches!(parse_input(&mut build_args("gen 0,1,2,3")), Err(CliErr::ArgParseErr { .. })));
    }
}
