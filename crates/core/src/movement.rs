//! Single-step moves for the hero and hunters, including block chains and squishing.
//! A move is planned against the untouched board and applied only when the whole plan is
//! legal, so a `Blocked` result never changes anything.

use crate::board::Board;
use crate::types::*;

enum Mover {
    Hero,
    Hunter(HunterId),
}

struct PushPlan {
    blocks: Vec<Pos>,
    victims: Vec<Pos>,
}

pub fn attempt_move(board: &mut Board, mover_pos: Pos, direction: Direction) -> MoveOutcome {
    let mover = match board.occupant(mover_pos) {
        Occupant::Hero => Mover::Hero,
        Occupant::Hunter(id) => Mover::Hunter(id),
        _ => return MoveOutcome::Blocked,
    };
    let target = mover_pos.step(direction);

    match board.occupant(target) {
        Occupant::Empty => {
            commit_mover(board, &mover, target);
            MoveOutcome::Moved(target)
        }
        // A hunter may step onto the hero; the session resolves the catch afterwards.
        Occupant::Hero if matches!(mover, Mover::Hunter(_)) => {
            commit_mover(board, &mover, target);
            MoveOutcome::Moved(target)
        }
        Occupant::Block(_) => match plan_push(board, target, direction) {
            Some(plan) => apply_push(board, &mover, target, direction, plan),
            None => MoveOutcome::Blocked,
        },
        Occupant::Wall | Occupant::Hero | Occupant::Hunter(_) | Occupant::Egg(_) => {
            MoveOutcome::Blocked
        }
    }
}

/// Walks the chain starting at `head`, one cell per iteration, bounded by the board extent.
fn plan_push(board: &Board, head: Pos, direction: Direction) -> Option<PushPlan> {
    let max_steps = board.width().max(board.height());
    let mut plan = PushPlan { blocks: Vec::new(), victims: Vec::new() };
    let mut cursor = head;

    for _ in 0..=max_steps {
        // A hunter standing on the hero hides it from `occupant`.
        if board.hero() == Some(cursor) {
            return None;
        }
        match board.occupant(cursor) {
            Occupant::Block(_) => plan.blocks.push(cursor),
            Occupant::Empty => return Some(plan),
            Occupant::Hunter(_) | Occupant::Egg(_) => {
                let beyond = cursor.step(direction);
                if !matches!(board.occupant(beyond), Occupant::Block(_)) {
                    return None;
                }
                plan.victims.push(cursor);
            }
            Occupant::Wall | Occupant::Hero => return None,
        }
        cursor = cursor.step(direction);
    }
    None
}

fn apply_push(
    board: &mut Board,
    mover: &Mover,
    target: Pos,
    direction: Direction,
    plan: PushPlan,
) -> MoveOutcome {
    let squished: Vec<Squish> = plan
        .victims
        .iter()
        .filter_map(|&pos| board.remove_enemy_at(pos).map(|victim| Squish { pos, victim }))
        .collect();
    for &block in plan.blocks.iter().rev() {
        board.shift_block(block, block.step(direction));
    }
    commit_mover(board, mover, target);
    MoveOutcome::PushedAndMoved { to: target, blocks: plan.blocks.len(), squished }
}

fn commit_mover(board: &mut Board, mover: &Mover, target: Pos) {
    match mover {
        Mover::Hero => board.move_hero(target),
        Mover::Hunter(id) => board.move_hunter(*id, target),
    }
}
