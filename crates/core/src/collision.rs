//! Collision detection between a piece and the stage.

use crate::player::{Offset, Player};
use crate::stage::Stage;

/// Would `player`, displaced by `offset`, hit a wall, the floor, or a non-clear cell?
///
/// Only occupied shape entries are tested. Rows above the top edge are open;
/// everything at or below the floor, left of column 0, or at/after the last
/// column collides. Pure: the stage and player are left untouched.
pub fn collides(player: &Player, stage: &Stage, offset: Offset) -> bool {
    let width = stage.width() as i32;
    let height = stage.height() as i32;

    player.absolute_cells().any(|(x, y, _)| {
        let x = x + offset.dx;
        let y = y + offset.dy;

        if y >= height || x < 0 || x >= width {
            return true;
        }
        if y < 0 {
            return false;
        }
        !stage.is_clear(x, y)
    })
}
