//! 错误类型定义

use thiserror::Error;

/// 棋盘与记谱错误
///
/// 走法生成与落子本身不做校验（越界坐标属于调用方编程错误），
/// 无子可走也不是错误而是正常的终局信号
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChessError {
    /// 无效的位置
    #[error("invalid position: ({row}, {col})")]
    InvalidPosition { row: i8, col: i8 },

    /// 无效的 FEN 字符串
    #[error("invalid FEN string: {reason}")]
    InvalidFen { reason: String },
}

/// 操作结果类型
pub type Result<T> = std::result::Result<T, ChessError>;
