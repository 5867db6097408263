use thiserror::Error;

/// 游标协议错误。
///
/// 组合子不会重试，也不会从内部游标的错误中恢复：内部错误会作为就绪元素缓存，
/// 并由外层的 `next` 原样返回，直到最外层的调用者。
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SeqErr {
    #[error("[Sequencing] `next` called on `{cursor}` cursor without a preceding successful `has_more`")]
    Sequencing { cursor: &'static str },
}

impl SeqErr {
    pub(crate) fn sequencing(cursor: &'static str) -> SeqErr {
        SeqErr::Sequencing { cursor }
    }
}
