//! 搜索引擎
//!
//! 实现固定深度 Minimax + Alpha-Beta 剪枝，
//! 以及按难度档位随机降级的选子策略

use chess_core::{Board, Move, MoveGenerator, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;

/// 终局哨兵分值
///
/// 一方无子可走时按极端局面计分。真正的将杀/逼和检测不在规则范围内，
/// 这只是临近终局的启发式近似，不是精确值
const TERMINAL_SCORE: i32 = 10_000;

/// 随机降级时的候选池大小
const TOP_MOVE_POOL: usize = 5;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 入门：depth=2, 30% 概率随机选子
    Easy,
    /// 进阶：depth=3, 15% 概率随机选子
    Medium,
    /// 高手：depth=4, 5% 概率随机选子
    Hard,
    /// 大师：depth=5, 不随机
    Master,
}

impl Difficulty {
    /// 获取难度显示名
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "入门",
            Difficulty::Medium => "进阶",
            Difficulty::Hard => "高手",
            Difficulty::Master => "大师",
        }
    }
}

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 搜索深度
    pub depth: u8,
    /// 随机降级概率
    pub randomness: f32,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                depth: 2,
                randomness: 0.3,
            },
            Difficulty::Medium => Self {
                difficulty,
                depth: 3,
                randomness: 0.15,
            },
            Difficulty::Hard => Self {
                difficulty,
                depth: 4,
                randomness: 0.05,
            },
            Difficulty::Master => Self {
                difficulty,
                depth: 5,
                randomness: 0.0,
            },
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// AI 引擎
///
/// 引擎不持有棋局：每次调用接收完整的棋盘快照与行棋方，返回决策。
/// 结构体里只有配置与节点计数
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 搜索最佳走法
    ///
    /// 无子可走时返回 None，由调用方作为终局信号处理；
    /// 一个子都没有的阵营自然落入同一条路径
    pub fn best_move(&mut self, board: &Board, engine_side: Side) -> Option<Move> {
        let ranked = self.ranked_moves(board, engine_side);
        if ranked.is_empty() {
            return None;
        }

        let mv = Self::choose_ranked(&ranked, self.config.randomness, &mut rand::thread_rng());
        debug!("选定走法 {}", mv);
        Some(mv)
    }

    /// 为指定阵营的每个候选走法打分并排序
    ///
    /// 首个元素是对 engine_side 最有利的走法，
    /// 同分走法保持枚举顺序（稳定排序）
    pub fn ranked_moves(&mut self, board: &Board, engine_side: Side) -> Vec<(Move, i32)> {
        self.nodes_searched = 0;

        let moves = MoveGenerator::all_moves(board, engine_side);
        debug!("开始评估 {} 个候选走法, 深度 {}", moves.len(), self.config.depth);

        let mut ranked: Vec<(Move, i32)> = moves
            .into_iter()
            .map(|mv| {
                let next = board.apply_move(&mv);
                // 根节点落子之后轮到对手应着
                let score = self.minimax(
                    &next,
                    self.config.depth.saturating_sub(1),
                    i32::MIN,
                    i32::MAX,
                    engine_side == Side::Light,
                    engine_side,
                );
                (mv, score)
            })
            .collect();

        // 评估分黑方为正：黑方执子时分数高者在前，白方执子时分数低者在前
        match engine_side {
            Side::Dark => ranked.sort_by(|a, b| b.1.cmp(&a.1)),
            Side::Light => ranked.sort_by(|a, b| a.1.cmp(&b.1)),
        }

        if let Some((_, best_score)) = ranked.first() {
            debug!(
                "搜索完成: 最佳分值 {}, 共访问 {} 个节点",
                best_score, self.nodes_searched
            );
        }

        ranked
    }

    /// Minimax + Alpha-Beta 剪枝
    ///
    /// 评估分黑方为正，因此极大节点行棋的总是黑方；
    /// engine_side 在整个递归中保持不变，锚定行棋方的推导。
    /// 剪枝只减少访问的分支，不改变返回值
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        engine_side: Side,
    ) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 {
            return Evaluator::evaluate(board);
        }

        let to_move = if maximizing == (engine_side == Side::Dark) {
            engine_side
        } else {
            engine_side.opponent()
        };

        let moves = MoveGenerator::all_moves(board, to_move);

        // 无子可走：按极端终局计分（见 TERMINAL_SCORE）
        if moves.is_empty() {
            return if maximizing {
                -TERMINAL_SCORE
            } else {
                TERMINAL_SCORE
            };
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let next = board.apply_move(&mv);
                let score = self.minimax(&next, depth - 1, alpha, beta, false, engine_side);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let next = board.apply_move(&mv);
                let score = self.minimax(&next, depth - 1, alpha, beta, true, engine_side);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// 按随机降级概率从排序结果中选取走法
    ///
    /// 命中降级时从前 min(5, n) 个候选里均匀随机选取，
    /// 这是低难度档位走棋更弱、更多变的机制
    fn choose_ranked<R: Rng>(ranked: &[(Move, i32)], randomness: f32, rng: &mut R) -> Move {
        if randomness > 0.0 && rng.gen::<f32>() < randomness {
            let pool = &ranked[..ranked.len().min(TOP_MOVE_POOL)];
            if let Some(&(mv, _)) = pool.choose(rng) {
                return mv;
            }
        }
        ranked[0].0
    }

    /// 获取最近一次搜索访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
