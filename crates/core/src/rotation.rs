//! Rotation of the active piece.
//!
//! There is no wall kick: a rotation that would collide at the current
//! position is simply rejected.

use crate::collision::collides;
use crate::player::{Offset, Player};
use crate::stage::Stage;

/// Rotate the player's shape a quarter turn in place.
///
/// Returns the rotated player if it fits at its current position, `None` otherwise.
pub fn try_rotate(player: &Player, stage: &Stage) -> Option<Player> {
    let rotated = player.with_shape(player.tetromino.rotated());
    if collides(&rotated, stage, Offset::NONE) {
        return None;
    }
    Some(rotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Position;
    use crate::tetrominos::shape_of;
    use crate::types::PieceKind;

    #[test]
    fn test_rotation_in_open_space() {
        let stage = Stage::new(20, 12);
        let p = Player::spawn(&shape_of(PieceKind::T), Position::new(4, 4));
        let r = try_rotate(&p, &stage).expect("room to rotate");
        assert_eq!(r.pos, p.pos);
        assert_eq!(r.tetromino, p.tetromino.rotated());
    }

    #[test]
    fn test_rotation_rejected_at_left_wall() {
        let stage = Stage::new(20, 12);
        // I occupies local column 1 only; at x = -1 it is flush with the wall.
        // Rotating lays it across local row 2, columns 0..4, i.e. x = -1.
        let p = Player::spawn(&shape_of(PieceKind::I), Position::new(-1, 0));
        assert!(try_rotate(&p, &stage).is_none());
    }
}
