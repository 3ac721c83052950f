//! 常量定义

/// 棋盘边长（行列数相同）
pub const BOARD_SIZE: usize = 8;

/// 棋盘格子总数
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
