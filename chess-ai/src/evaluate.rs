//! 棋局评估函数

use chess_core::{Board, Piece, PieceType, Position, Side};

/// 评估器
pub struct Evaluator;

/// 棋子位置分值表
///
/// 按上方阵营的行号书写，下方阵营取垂直镜像（行号取 7 - row）
mod position_tables {
    /// 兵的位置分值
    pub const PAWN: [[i32; 8]; 8] = [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [50, 50, 50, 50, 50, 50, 50, 50],
        [10, 10, 20, 30, 30, 20, 10, 10],
        [5, 5, 10, 25, 25, 10, 5, 5],
        [0, 0, 0, 20, 20, 0, 0, 0],
        [5, -5, -10, 0, 0, -10, -5, 5],
        [5, 10, 10, -20, -20, 10, 10, 5],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ];

    /// 马的位置分值
    pub const KNIGHT: [[i32; 8]; 8] = [
        [-50, -40, -30, -30, -30, -30, -40, -50],
        [-40, -20, 0, 0, 0, 0, -20, -40],
        [-30, 0, 10, 15, 15, 10, 0, -30],
        [-30, 5, 15, 20, 20, 15, 5, -30],
        [-30, 0, 15, 20, 20, 15, 0, -30],
        [-30, 5, 10, 15, 15, 10, 5, -30],
        [-40, -20, 0, 5, 5, 0, -20, -40],
        [-50, -40, -30, -30, -30, -30, -40, -50],
    ];
}

/// 位置分值的缩放除数
const POSITION_DIVISOR: i32 = 10;

impl Evaluator {
    /// 评估棋局
    ///
    /// 符号约定：黑方为正，白方为负，正值表示黑方占优。
    /// 整个引擎统一使用该约定，搜索的极大/极小方向、
    /// 选子排序方向与终局哨兵符号都以此为准
    pub fn evaluate(board: &Board) -> i32 {
        let mut score = 0;

        for (pos, piece) in board.all_pieces() {
            let piece_score = Self::evaluate_piece(board, pos, piece);
            match piece.side {
                Side::Dark => score += piece_score,
                Side::Light => score -= piece_score,
            }
        }

        score
    }

    /// 评估单个棋子的价值（子力分加位置分）
    fn evaluate_piece(board: &Board, pos: Position, piece: Piece) -> i32 {
        piece.value() + Self::position_bonus(board, pos, piece)
    }

    /// 获取位置加成分
    ///
    /// 只有兵和马使用位置表，象、车、后、王不加位置分
    /// （有意保留的不对称，不是遗漏）
    fn position_bonus(board: &Board, pos: Position, piece: Piece) -> i32 {
        // 位置表按上方阵营书写，下方阵营行号垂直镜像
        let row = if piece.side == board.orientation() {
            7 - pos.row as usize
        } else {
            pos.row as usize
        };
        let col = pos.col as usize;

        let table_value = match piece.piece_type {
            PieceType::Pawn => position_tables::PAWN[row][col],
            PieceType::Knight => position_tables::KNIGHT[row][col],
            _ => return 0,
        };

        table_value / POSITION_DIVISOR
    }

    /// 快速评估（仅计算子力差，不含位置分）
    pub fn evaluate_material(board: &Board) -> i32 {
        let mut score = 0;
        for (_, piece) in board.all_pieces() {
            match piece.side {
                Side::Dark => score += piece.value(),
                Side::Light => score -= piece.value(),
            }
        }
        score
    }
}
