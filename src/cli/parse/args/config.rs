use crate::cli::config::Config;
use std::iter::Peekable;

pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = parse_config(args.peek()) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: Option<&String>) -> Option<Config> {
    match arg?.as_str() {
        "-h" => Some(Config::Help),
        "-V" => Some(Config::Version),
        "-v" => Some(Config::Verbose),
        "-d" => Some(Config::DryRun),
        "--eval" => Some(Config::Eval),
        _ => None, // 遇到未知参数，停止解析（由调用者处理）
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::args::build_args;

    #[test]
    fn test_parse_configs() {
        let mut args = build_args("-v -d of a");
        assert_eq!(vec![Config::Verbose, Config::DryRun], parse_configs(&mut args));
        assert_eq!(Some("of".to_string()), args.next());

        let mut args = build_args("--eval -h");
        assert_eq!(vec![Config::Eval, Config::Help], parse_configs(&mut args));
        assert!(args.next().is_none());

        let mut args = build_args("of -v");
        assert!(parse_configs(&mut args).is_empty());
        assert_eq!(Some("of".to_string()), args.next());
    }
}
