use crate::cli::Chain;
use crate::cli::err::CliErr;
use cmd_help::CmdHelp;
use lseq::Cursor;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// to out      输出到标准输出，每行一个数据。
    ///             未指定输出时的默认输出。
    StdOut,
    /// to file     输出到文件，每行一个数据。
    ///             to file <file>[ append]
    ///                 <file>  文件路径，必选。
    ///                 append  追加输出而不是覆盖，可选。
    ///             例如：
    ///                 to file out.txt
    ///                 to file out.txt append
    File { file: String, append: bool },
}

impl Output {
    pub(crate) fn new_std_out() -> Output {
        Output::StdOut
    }
    pub(crate) fn new_file(file: String, append: bool) -> Output {
        Output::File { file, append }
    }

    pub(crate) fn handle(self, mut chain: Chain) -> Result<(), CliErr> {
        match self {
            Output::StdOut => {
                while chain.has_more() {
                    println!("{}", chain.next()?);
                }
                Ok(())
            }
            Output::File { file, append } => {
                let fout = OpenOptions::new()
                    .write(true)
                    .truncate(!append)
                    .append(append)
                    .create(true)
                    .open(&file)
                    .map_err(|err| CliErr::OpenOutputFileErr { file: file.clone(), err: err.to_string() })?;
                let mut writer = BufWriter::new(fout);
                while chain.has_more() {
                    let item = chain.next()?;
                    if let Err(err) = writeln!(writer, "{item}") {
                        return Err(CliErr::WriteToOutputFileErr { file, item, err: err.to_string() });
                    }
                }
                writer
                    .flush()
                    .map_err(|err| CliErr::WriteToOutputFileErr { file, item: String::new(), err: err.to_string() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lseq::seq;

    fn chain_of(values: &[&str]) -> Chain {
        seq(values.iter().map(|s| s.to_string()).collect::<Vec<_>>()).boxed()
    }

    #[test]
    fn test_file_overwrite_and_append() {
        let path = std::env::temp_dir().join(format!("lseq-output-{}.txt", std::process::id()));
        let file = path.to_string_lossy().to_string();
        Output::new_file(file.clone(), false).handle(chain_of(&["a", "b"])).unwrap();
        assert_eq!("a\nb\n", std::fs::read_to_string(&path).unwrap());
        Output::new_file(file.clone(), true).handle(chain_of(&["c"])).unwrap();
        assert_eq!("a\nb\nc\n", std::fs::read_to_string(&path).unwrap());
        Output::new_file(file, false).handle(chain_of(&["d"])).unwrap();
        assert_eq!("d\n", std::fs::read_to_string(&path).unwrap());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_open_error() {
        let dir = std::env::temp_dir().to_string_lossy().to_string();
        let result = Output::new_file(dir.clone(), false).handle(chain_of(&["a"]));
        assert!(matches!(result, Err(CliErr::OpenOutputFileErr { file, .. }) if file == dir));
    }
}
