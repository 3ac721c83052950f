//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_CELLS, BOARD_SIZE};
use crate::moves::Move;
use crate::piece::{Piece, PieceType, Position, Side};

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，索引为 row * 8 + col，使用 Vec 以支持 serde
    squares: Vec<Option<Piece>>,
    /// 位于棋盘下方（大行号一侧）的阵营，决定兵的前进方向
    orientation: Side,
}

impl Board {
    /// 创建空棋盘（默认白方在下）
    pub fn empty() -> Self {
        Self {
            squares: vec![None; BOARD_CELLS],
            orientation: Side::Light,
        }
    }

    /// 创建初始棋盘，`bottom` 为位于下方的阵营
    ///
    /// 两种朝向各对应一个固定开局布局，翻转布局时王后两列互换
    pub fn initial(bottom: Side) -> Self {
        let mut board = Self {
            squares: vec![None; BOARD_CELLS],
            orientation: bottom,
        };
        let top = bottom.opponent();

        let back_rank = match bottom {
            Side::Light => [
                PieceType::Rook,
                PieceType::Knight,
                PieceType::Bishop,
                PieceType::Queen,
                PieceType::King,
                PieceType::Bishop,
                PieceType::Knight,
                PieceType::Rook,
            ],
            Side::Dark => [
                PieceType::Rook,
                PieceType::Knight,
                PieceType::Bishop,
                PieceType::King,
                PieceType::Queen,
                PieceType::Bishop,
                PieceType::Knight,
                PieceType::Rook,
            ],
        };

        for (col, &piece_type) in back_rank.iter().enumerate() {
            let col = col as u8;
            board.set(Position::new_unchecked(0, col), Some(Piece::new(piece_type, top)));
            board.set(Position::new_unchecked(7, col), Some(Piece::new(piece_type, bottom)));
        }
        for col in 0..BOARD_SIZE as u8 {
            board.set(Position::new_unchecked(1, col), Some(Piece::new(PieceType::Pawn, top)));
            board.set(Position::new_unchecked(6, col), Some(Piece::new(PieceType::Pawn, bottom)));
        }

        board
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = piece;
        }
    }

    /// 移动棋子（不检查规则），返回被吃的棋子
    ///
    /// 调用方在落子前通过返回值收集被吃子
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<Piece> {
        let piece = self.get(from);
        let captured = self.get(to);
        self.set(from, None);
        self.set(to, piece);
        captured
    }

    /// 应用走法，返回修改后的副本，原棋盘保持不变
    ///
    /// 搜索从同一局面展开多个假想分支，分支之间不得互相污染，
    /// 因此假想走法只落在副本上
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.move_piece(mv.from, mv.to);
        next
    }

    /// 获取指定阵营的所有棋子位置
    pub fn pieces(&self, side: Side) -> Vec<(Position, Piece)> {
        let mut result = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new_unchecked(row as u8, col as u8);
                if let Some(piece) = self.get(pos) {
                    if piece.side == side {
                        result.push((pos, piece));
                    }
                }
            }
        }
        result
    }

    /// 获取所有棋子
    pub fn all_pieces(&self) -> Vec<(Position, Piece)> {
        let mut result = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new_unchecked(row as u8, col as u8);
                if let Some(piece) = self.get(pos) {
                    result.push((pos, piece));
                }
            }
        }
        result
    }

    /// 位于棋盘下方的阵营
    pub fn orientation(&self) -> Side {
        self.orientation
    }

    /// 兵的前进方向：下方阵营向小行号推进，上方阵营向大行号推进
    pub fn forward_dir(&self, side: Side) -> i8 {
        if side == self.orientation {
            -1
        } else {
            1
        }
    }

    /// 兵的初始行
    pub fn start_row(&self, side: Side) -> u8 {
        if side == self.orientation {
            6
        } else {
            1
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial(Side::Light)
    }
}
