//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_CELLS, BOARD_SIZE};

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    /// 兵
    Pawn,
    /// 马
    Knight,
    /// 象
    Bishop,
    /// 车
    Rook,
    /// 后
    Queen,
    /// 王
    King,
}

impl PieceType {
    /// 获取棋子的基础分值（用于 AI 评估）
    pub fn value(&self) -> i32 {
        match self {
            PieceType::Pawn => 10,
            PieceType::Knight => 30,
            PieceType::Bishop => 30,
            PieceType::Rook => 50,
            PieceType::Queen => 90,
            PieceType::King => 900,
        }
    }

    /// 获取 FEN 字符（白方大写，黑方小写）
    pub fn to_fen_char(&self, side: Side) -> char {
        let c = match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match side {
            Side::Light => c.to_ascii_uppercase(),
            Side::Dark => c,
        }
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<(PieceType, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::Light
        } else {
            Side::Dark
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        Some((piece_type, side))
    }
}

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 白方
    Light,
    /// 黑方
    Dark,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// 获取 FEN 字符
    pub fn to_fen_char(&self) -> char {
        match self {
            Side::Light => 'w',
            Side::Dark => 'b',
        }
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<Side> {
        match c {
            'w' | 'W' => Some(Side::Light),
            'b' | 'B' => Some(Side::Dark),
            _ => None,
        }
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    /// 创建新棋子
    pub fn new(piece_type: PieceType, side: Side) -> Self {
        Self { piece_type, side }
    }

    /// 判断两个棋子是否敌对（分属两个阵营）
    pub fn is_opponent(&self, other: &Piece) -> bool {
        self.side != other.side
    }

    /// 获取棋子显示符号
    pub fn display_char(&self) -> char {
        match (self.piece_type, self.side) {
            (PieceType::Pawn, Side::Light) => '♙',
            (PieceType::Knight, Side::Light) => '♘',
            (PieceType::Bishop, Side::Light) => '♗',
            (PieceType::Rook, Side::Light) => '♖',
            (PieceType::Queen, Side::Light) => '♕',
            (PieceType::King, Side::Light) => '♔',
            (PieceType::Pawn, Side::Dark) => '♟',
            (PieceType::Knight, Side::Dark) => '♞',
            (PieceType::Bishop, Side::Dark) => '♝',
            (PieceType::Rook, Side::Dark) => '♜',
            (PieceType::Queen, Side::Dark) => '♛',
            (PieceType::King, Side::Dark) => '♚',
        }
    }

    /// 获取 FEN 字符
    pub fn to_fen_char(&self) -> char {
        self.piece_type.to_fen_char(self.side)
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<Piece> {
        PieceType::from_fen_char(c).map(|(piece_type, side)| Piece { piece_type, side })
    }

    /// 获取棋子分值
    pub fn value(&self) -> i32 {
        self.piece_type.value()
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-7)，0 为顶部
    pub row: u8,
    /// 列 (0-7)
    pub col: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 获取偏移后的位置，越界返回 None
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let new_row = self.row as i8 + dr;
        let new_col = self.col as i8 + dc;
        if new_row >= 0
            && (new_row as usize) < BOARD_SIZE
            && new_col >= 0
            && (new_col as usize) < BOARD_SIZE
        {
            Some(Position {
                row: new_row as u8,
                col: new_col as u8,
            })
        } else {
            None
        }
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_CELLS {
            Some(Position {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_values() {
        assert_eq!(PieceType::Pawn.value(), 10);
        assert_eq!(PieceType::Knight.value(), 30);
        assert_eq!(PieceType::Bishop.value(), 30);
        assert_eq!(PieceType::Rook.value(), 50);
        assert_eq!(PieceType::Queen.value(), 90);
        assert_eq!(PieceType::King.value(), 900);
    }

    #[test]
    fn test_piece_fen_char() {
        let light_king = Piece::new(PieceType::King, Side::Light);
        assert_eq!(light_king.to_fen_char(), 'K');

        let dark_king = Piece::new(PieceType::King, Side::Dark);
        assert_eq!(dark_king.to_fen_char(), 'k');

        assert_eq!(
            Piece::from_fen_char('Q'),
            Some(Piece::new(PieceType::Queen, Side::Light))
        );
        assert_eq!(
            Piece::from_fen_char('n'),
            Some(Piece::new(PieceType::Knight, Side::Dark))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn test_piece_display_char() {
        let light_king = Piece::new(PieceType::King, Side::Light);
        assert_eq!(light_king.display_char(), '♔');

        let dark_pawn = Piece::new(PieceType::Pawn, Side::Dark);
        assert_eq!(dark_pawn.display_char(), '♟');
    }

    #[test]
    fn test_is_opponent() {
        let light_pawn = Piece::new(PieceType::Pawn, Side::Light);
        let dark_pawn = Piece::new(PieceType::Pawn, Side::Dark);
        let light_rook = Piece::new(PieceType::Rook, Side::Light);

        assert!(light_pawn.is_opponent(&dark_pawn));
        assert!(dark_pawn.is_opponent(&light_rook));
        assert!(!light_pawn.is_opponent(&light_rook));
    }

    #[test]
    fn test_position_valid() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(7, 7).is_some());
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, 8).is_none());
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new_unchecked(0, 0);
        assert_eq!(pos.offset(1, 1), Some(Position::new_unchecked(1, 1)));
        assert_eq!(pos.offset(-1, 0), None);
        assert_eq!(pos.offset(0, -1), None);

        let pos = Position::new_unchecked(7, 7);
        assert_eq!(pos.offset(1, 0), None);
        assert_eq!(pos.offset(-2, -1), Some(Position::new_unchecked(5, 6)));
    }

    #[test]
    fn test_position_index_roundtrip() {
        for index in 0..BOARD_CELLS {
            let pos = Position::from_index(index).unwrap();
            assert_eq!(pos.to_index(), index);
        }
        assert!(Position::from_index(BOARD_CELLS).is_none());
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Light.opponent(), Side::Dark);
        assert_eq!(Side::Dark.opponent(), Side::Light);
    }
}
