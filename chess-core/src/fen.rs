//! FEN 格式解析和生成
//!
//! 只处理棋子布局与走子方两段：
//! `<布局> <走子方>`
//!
//! 示例：
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`
//!
//! 易位权、吃过路兵等后续字段对应的规则不在引擎范围内，
//! 解析时一并忽略，因此完整的标准 FEN 也能接受

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::ChessError;
use crate::piece::{Piece, Position, Side};

/// 初始局面 FEN
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 解析 FEN 字符串为棋盘与走子方
    pub fn parse(fen: &str) -> Result<(Board, Side), ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(ChessError::InvalidFen {
                reason: "empty FEN string".to_string(),
            });
        }

        let board = Self::parse_board(parts[0])?;

        // 走子方（省略时默认白方）
        let side = if parts.len() > 1 {
            match Side::from_fen_char(parts[1].chars().next().unwrap_or(' ')) {
                Some(side) => side,
                None => {
                    return Err(ChessError::InvalidFen {
                        reason: format!("invalid side to move: {}", parts[1]),
                    })
                }
            }
        } else {
            Side::Light
        };

        Ok((board, side))
    }

    /// 解析棋盘布局段
    ///
    /// FEN 自上而下书写，首行即 row 0
    fn parse_board(board_str: &str) -> Result<Board, ChessError> {
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(ChessError::InvalidFen {
                reason: format!("expected 8 rows, got {}", rows.len()),
            });
        }

        let mut board = Board::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0u8;

            for c in row_str.chars() {
                if col >= BOARD_SIZE as u8 {
                    return Err(ChessError::InvalidFen {
                        reason: format!("row {} has too many columns", row),
                    });
                }

                if let Some(empty_count) = c.to_digit(10) {
                    col += empty_count as u8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    board.set(Position::new_unchecked(row as u8, col), Some(piece));
                    col += 1;
                } else {
                    return Err(ChessError::InvalidFen {
                        reason: format!("invalid piece character: {}", c),
                    });
                }
            }

            if col != BOARD_SIZE as u8 {
                return Err(ChessError::InvalidFen {
                    reason: format!("row {} has {} columns, expected 8", row, col),
                });
            }
        }

        Ok(board)
    }

    /// 将棋盘与走子方编码为 FEN 字符串
    pub fn encode(board: &Board, side: Side) -> String {
        format!("{} {}", Self::board_to_string(board), side.to_fen_char())
    }

    /// 将棋盘编码为 FEN 布局段
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for row in 0..BOARD_SIZE {
            let mut row_str = String::new();
            let mut empty_count = 0;

            for col in 0..BOARD_SIZE {
                if let Some(piece) = board.get(Position::new_unchecked(row as u8, col as u8)) {
                    if empty_count > 0 {
                        row_str.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    row_str.push(piece.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                row_str.push_str(&empty_count.to_string());
            }

            rows.push(row_str);
        }

        rows.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceType;

    #[test]
    fn test_parse_initial_fen() {
        let (board, side) = Fen::parse(INITIAL_FEN).unwrap();

        assert_eq!(side, Side::Light);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_fen_roundtrip() {
        let (board, side) = Fen::parse(INITIAL_FEN).unwrap();
        let fen = Fen::encode(&board, side);
        assert_eq!(fen, INITIAL_FEN);

        let (board2, side2) = Fen::parse(&fen).unwrap();
        assert_eq!(board, board2);
        assert_eq!(side, side2);
    }

    #[test]
    fn test_parse_custom_fen() {
        let fen = "4k3/8/8/3q4/8/8/8/4K3 b";
        let (board, side) = Fen::parse(fen).unwrap();

        assert_eq!(side, Side::Dark);
        assert_eq!(
            board.get(Position::new_unchecked(0, 4)),
            Some(Piece::new(PieceType::King, Side::Dark))
        );
        assert_eq!(
            board.get(Position::new_unchecked(3, 3)),
            Some(Piece::new(PieceType::Queen, Side::Dark))
        );
        assert_eq!(
            board.get(Position::new_unchecked(7, 4)),
            Some(Piece::new(PieceType::King, Side::Light))
        );
        assert_eq!(board.all_pieces().len(), 3);
    }

    #[test]
    fn test_parse_standard_fen_extra_fields() {
        // 标准 FEN 的易位、吃过路兵、计步字段被忽略
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let (board, side) = Fen::parse(fen).unwrap();
        assert_eq!(board, Board::default());
        assert_eq!(side, Side::Light);
    }

    #[test]
    fn test_parse_missing_side_defaults_to_light() {
        let (_, side) = Fen::parse("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(side, Side::Light);
    }

    #[test]
    fn test_invalid_fen() {
        // 行数不对
        assert!(Fen::parse("8/8/8").is_err());

        // 列数不对
        assert!(Fen::parse("9/8/8/8/8/8/8/8 w").is_err());
        assert!(Fen::parse("7/8/8/8/8/8/8/8 w").is_err());

        // 无效字符
        assert!(Fen::parse("4x3/8/8/8/8/8/8/8 w").is_err());

        // 无效走子方
        assert!(Fen::parse("8/8/8/8/8/8/8/8 r").is_err());

        // 空串
        assert!(Fen::parse("").is_err());
    }
}
