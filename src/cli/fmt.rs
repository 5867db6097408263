use crate::cli::Item;
use lseq::Integer;
use rt_format::{Format, FormatArgument, ParsedFormat, Specifier};
use std::collections::HashMap;
use std::fmt;

/// 模板中的参数值，整数和浮点数支持数值格式，其他文本只支持`Display`和`Debug`。
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FmtArg {
    Integer(Integer),
    Float(f64),
    Text(Item),
}

impl From<&str> for FmtArg {
    fn from(value: &str) -> Self {
        if let Ok(integer) = value.parse::<Integer>() {
            FmtArg::Integer(integer)
        } else if let Ok(float) = value.parse::<f64>() {
            FmtArg::Float(float)
        } else {
            FmtArg::Text(value.to_string())
        }
    }
}

impl FormatArgument for FmtArg {
    fn supports_format(&self, specifier: &Specifier) -> bool {
        match self {
            FmtArg::Integer(_) => true,
            FmtArg::Float(_) => {
                matches!(specifier.format, Format::Display | Format::Debug | Format::LowerExp | Format::UpperExp)
            }
            FmtArg::Text(_) => matches!(specifier.format, Format::Display | Format::Debug),
        }
    }

    fn fmt_display(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FmtArg::Integer(v) => fmt::Display::fmt(v, f),
            FmtArg::Float(v) => fmt::Display::fmt(v, f),
            FmtArg::Text(v) => fmt::Display::fmt(v, f),
        }
    }

    fn fmt_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FmtArg::Integer(v) => fmt::Debug::fmt(v, f),
            FmtArg::Float(v) => fmt::Debug::fmt(v, f),
            FmtArg::Text(v) => fmt::Debug::fmt(v, f),
        }
    }

    fn fmt_octal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FmtArg::Integer(v) => fmt::Octal::fmt(v, f),
            _ => Err(fmt::Error),
        }
    }

    fn fmt_lower_hex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FmtArg::Integer(v) => fmt::LowerHex::fmt(v, f),
            _ => Err(fmt::Error),
        }
    }

    fn fmt_upper_hex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FmtArg::Integer(v) => fmt::UpperHex::fmt(v, f),
            _ => Err(fmt::Error),
        }
    }

    fn fmt_binary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FmtArg::Integer(v) => fmt::Binary::fmt(v, f),
            _ => Err(fmt::Error),
        }
    }

    fn fmt_lower_exp(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FmtArg::Integer(v) => fmt::LowerExp::fmt(v, f),
            FmtArg::Float(v) => fmt::LowerExp::fmt(v, f),
            FmtArg::Text(_) => Err(fmt::Error),
        }
    }

    fn fmt_upper_exp(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FmtArg::Integer(v) => fmt::UpperExp::fmt(v, f),
            FmtArg::Float(v) => fmt::UpperExp::fmt(v, f),
            FmtArg::Text(_) => Err(fmt::Error),
        }
    }
}

/// 以命名参数格式化模板，失败时返回出错的位置。
pub(crate) fn fmt_args(template: &str, args: &[(&str, FmtArg)]) -> Result<String, usize> {
    let positional: &[FmtArg] = &[];
    let named: HashMap<&str, FmtArg> = args.iter().cloned().collect();
    ParsedFormat::parse(template, positional, &named).map(|parsed| parsed.to_string())
}

/// 检查模板能否以`v`为唯一参数格式化，整数参数支持全部格式。
pub(crate) fn check_template(template: &str) -> Result<(), usize> {
    fmt_args(template, &[("v", FmtArg::Integer(0))]).map(|_| ())
}
