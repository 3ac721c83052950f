//! 伪合法走法生成
//!
//! 只遵循棋子的行棋模式与占位规则，不做将军检测，
//! 也不含王车易位、吃过路兵、升变等特殊规则

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::{Piece, PieceType, Position, Side};

/// 直线方向
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// 斜线方向
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// 八方向（直线加斜线）
const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// 马的 8 个跳跃偏移
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
    /// 被移动的棋子，仅批量枚举时填充（信息性字段，应用走法不需要）
    pub piece: Option<Piece>,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            piece: None,
        }
    }

    /// 创建带棋子信息的走法
    pub fn with_piece(from: Position, to: Position, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece: Some(piece),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定格子上棋子的所有伪合法目标格
    ///
    /// 不做行棋权过滤（由调用方决定轮到谁走），格子为空时返回空列表。
    /// 所有目标格由边界检查过的偏移推导而来，必然在棋盘内
    pub fn pseudo_legal_moves(board: &Board, pos: Position) -> Vec<Position> {
        let piece = match board.get(pos) {
            Some(piece) => piece,
            None => return Vec::new(),
        };

        let mut moves = Vec::new();
        Self::generate_piece_moves(board, pos, piece, &mut moves);
        moves
    }

    /// 生成指定阵营所有棋子的伪合法走法
    pub fn all_moves(board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        let mut targets = Vec::new();

        for (pos, piece) in board.pieces(side) {
            targets.clear();
            Self::generate_piece_moves(board, pos, piece, &mut targets);
            for &to in &targets {
                moves.push(Move::with_piece(pos, to, piece));
            }
        }

        moves
    }

    /// 按棋子类型分发生成
    fn generate_piece_moves(board: &Board, pos: Position, piece: Piece, moves: &mut Vec<Position>) {
        match piece.piece_type {
            PieceType::Pawn => Self::generate_pawn_moves(board, pos, piece.side, moves),
            PieceType::Knight => Self::generate_knight_moves(board, pos, piece.side, moves),
            PieceType::Bishop => {
                Self::generate_sliding_moves(board, pos, piece.side, &BISHOP_DIRS, moves)
            }
            PieceType::Rook => {
                Self::generate_sliding_moves(board, pos, piece.side, &ROOK_DIRS, moves)
            }
            PieceType::Queen => {
                Self::generate_sliding_moves(board, pos, piece.side, &QUEEN_DIRS, moves)
            }
            PieceType::King => Self::generate_king_moves(board, pos, piece.side, moves),
        }
    }

    /// 生成兵的走法
    fn generate_pawn_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Position>) {
        let forward = board.forward_dir(side);

        // 前进一格，目标必须为空
        if let Some(to) = pos.offset(forward, 0) {
            if board.get(to).is_none() {
                moves.push(to);

                // 初始行可前进两格，途经格与目标格都必须为空
                if pos.row == board.start_row(side) {
                    if let Some(two) = pos.offset(forward * 2, 0) {
                        if board.get(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        // 斜吃，目标必须是敌方棋子
        for dc in [-1i8, 1i8] {
            if let Some(to) = pos.offset(forward, dc) {
                if let Some(target) = board.get(to) {
                    if target.side != side {
                        moves.push(to);
                    }
                }
            }
        }
    }

    /// 生成马的走法
    fn generate_knight_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Position>) {
        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(to) = pos.offset(dr, dc) {
                Self::try_add_move(board, to, side, moves);
            }
        }
    }

    /// 生成王的走法（相邻 8 格，无易位，不检测送将）
    fn generate_king_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Position>) {
        for dr in -1i8..=1 {
            for dc in -1i8..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(to) = pos.offset(dr, dc) {
                    Self::try_add_move(board, to, side, moves);
                }
            }
        }
    }

    /// 生成滑动棋子（车/象/后）的走法
    ///
    /// 沿方向逐格推进：空格可走，遇敌方棋子停在吃子格，遇己方棋子止步
    fn generate_sliding_moves(
        board: &Board,
        pos: Position,
        side: Side,
        dirs: &[(i8, i8)],
        moves: &mut Vec<Position>,
    ) {
        for &(dr, dc) in dirs {
            let mut current = pos;
            while let Some(to) = current.offset(dr, dc) {
                match board.get(to) {
                    Some(target) => {
                        if target.side != side {
                            moves.push(to);
                        }
                        break;
                    }
                    None => moves.push(to),
                }
                current = to;
            }
        }
    }

    /// 尝试添加走法（目标为空格或敌方棋子时可走）
    fn try_add_move(board: &Board, to: Position, side: Side, moves: &mut Vec<Position>) {
        match board.get(to) {
            Some(target) => {
                if target.side != side {
                    moves.push(to);
                }
            }
            None => moves.push(to),
        }
    }
}
