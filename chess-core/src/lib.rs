//! 国际象棋核心库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 伪合法走法生成（无将军检测与特殊规则）
//! - FEN 格式解析与生成
//!
//! 引擎边界：调用方传入完整的棋盘快照与行棋方，
//! 库本身不保存任何对局状态

mod board;
mod constants;
mod error;
mod fen;
mod moves;
mod piece;

pub use board::Board;
pub use constants::*;
pub use error::{ChessError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use moves::{Move, MoveGenerator};
pub use piece::{Piece, PieceType, Position, Side};
