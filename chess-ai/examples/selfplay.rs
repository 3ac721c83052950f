//! 引擎自对弈演示
//!
//! 运行方式:
//! ```bash
//! cargo run -p chess-ai --example selfplay
//! ```
//!
//! 引擎只负责选子；落子、收集被吃子、交换行棋方都由调用方完成

use chess_ai::{AiEngine, Difficulty};
use chess_core::{Board, Fen, Side};

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut board = Board::default();
    let mut light = AiEngine::from_difficulty(Difficulty::Medium);
    let mut dark = AiEngine::from_difficulty(Difficulty::Easy);

    println!(
        "白方难度: {}, 黑方难度: {}",
        Difficulty::Medium.name(),
        Difficulty::Easy.name()
    );

    let mut turn = Side::Light;
    let mut captured = Vec::new();

    for ply in 1..=60 {
        let engine = match turn {
            Side::Light => &mut light,
            Side::Dark => &mut dark,
        };

        let mv = match engine.best_move(&board, turn) {
            Some(mv) => mv,
            None => {
                println!("第 {} 手: {:?} 无子可走, 对局结束", ply, turn);
                break;
            }
        };

        // 落子前先检查目标格，收集被吃的棋子
        if let Some(piece) = board.move_piece(mv.from, mv.to) {
            captured.push(piece);
        }

        println!("第 {} 手: {:?} {}", ply, turn, mv);
        turn = turn.opponent();
    }

    println!("终局 FEN: {}", Fen::encode(&board, turn));
    println!(
        "被吃子: {}",
        captured
            .iter()
            .map(|p| p.display_char())
            .collect::<String>()
    );

    Ok(())
}
