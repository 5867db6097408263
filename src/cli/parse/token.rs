use nom::branch::alt;
use nom::bytes::complete::{take_until, take_while1};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{all_consuming, map};
use nom::error::context;
use nom::multi::separated_list0;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use nom_language::error::{VerboseError, convert_error};

pub(in crate::cli::parse) type ParserError<'a> = VerboseError<&'a str>;

/// 把`--eval`的整段文本切分为参数，切分结果再按参数模式解析。
pub(crate) fn tokenize(input: &str) -> Result<Vec<String>, String> {
    match parse_tokens(input) {
        Ok((_, tokens)) => Ok(tokens),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(convert_error(input, err)),
        Err(nom::Err::Incomplete(_)) => Err("incomplete token".to_string()),
    }
}

fn parse_tokens(input: &str) -> IResult<&str, Vec<String>, ParserError<'_>> {
    context("Tokens", all_consuming(delimited(multispace0, separated_list0(multispace1, arg), multispace0)))
        .parse(input)
}

/// 解析单个参数：双引号、单引号包围的参数可以包含空白字符。
fn arg(input: &str) -> IResult<&str, String, ParserError<'_>> {
    context(
        "Arg",
        map(
            alt((
                delimited(char('"'), take_until("\""), char('"')),  // 双引号参数
                delimited(char('\''), take_until("'"), char('\'')), // 单引号参数
                take_while1(|c: char| !c.is_whitespace() && c != '"' && c != '\''), // 不带引号的参数
            )),
            |arg: &str| arg.to_string(),
        ),
    )
    .parse(input)
}
