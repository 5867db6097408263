use lseq::SeqErr;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum CliErr {
    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Closing bracket (`]`) for argument `{arg}` is required for cmd `{cmd}`")]
    UnclosingMultiArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unexpected closing bracket of argument `{arg}` for cmd `{cmd}`")]
    UnexpectedClosingBracket { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Bad Arg] Invalid regex `{reg}`: {err}")]
    ParseRegexErr { reg: String, err: String },

    #[error("[Output] Open output file `{file}` error: {err}")]
    OpenOutputFileErr { file: String, err: String },

    #[error("[Output] Write item `{item}` to file `{file}` error: {err}")]
    WriteToOutputFileErr { file: String, item: String, err: String },

    #[error(transparent)]
    Seq(#[from] SeqErr),
}

impl Termination for CliErr {
    fn report(self) -> ExitCode {
        crate::println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl CliErr {
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            CliErr::ArgParseErr { .. } => 1,
            CliErr::MissingArg { .. } => 2,
            CliErr::ArgNotEnough { .. } => 3,
            CliErr::UnclosingMultiArg { .. } => 4,
            CliErr::UnexpectedClosingBracket { .. } => 5,
            CliErr::UnknownArgs { .. } => 6,
            CliErr::ParseRegexErr { .. } => 7,
            CliErr::OpenOutputFileErr { .. } => 8,
            CliErr::WriteToOutputFileErr { .. } => 9,
            CliErr::Seq(_) => 10,
        }
    }
}
