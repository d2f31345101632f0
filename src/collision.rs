//! Hit testing between bullets, cats and the player.
//!
//! Lane matching is exact: every x on the field is a lane offset, so two
//! entities in the same lane compare equal.

use crate::config::GameConfig;
use crate::entities::{Bullet, Player};
use crate::spawn::SpawnGrid;

/// How far a cat's bottom edge may overlap the player before it counts.
pub const HIT_LEAD_TOLERANCE: f32 = 5.0;
/// How far past the player's bottom edge a cat's top must be to still count.
pub const HIT_TRAIL_TOLERANCE: f32 = 10.0;

/// Drop cats that fell past the bottom and bullets that left through the top.
pub fn prune_out_of_bounds(grid: &mut SpawnGrid, bullets: &mut Vec<Bullet>, config: &GameConfig) {
    grid.retain(|e| e.y <= config.game_height);
    bullets.retain(|b| b.y + config.player_height >= 0.0);
}

/// Destroy every bullet/cat pair that overlaps and return the number of hits.
///
/// Lanes are scanned in index order and, within a lane, bullets in firing
/// order. A bullet or cat consumed earlier in the scan is skipped; removals
/// are applied once the scan completes.
pub fn resolve_bullet_hits(grid: &mut SpawnGrid, bullets: &mut Vec<Bullet>, config: &GameConfig) -> u32 {
    let mut spent = vec![false; bullets.len()];
    let mut killed: Vec<usize> = Vec::new();

    for (lane, enemy) in grid.enemies() {
        for (bi, bullet) in bullets.iter().enumerate() {
            if spent[bi] {
                continue;
            }
            if bullet.x == enemy.x
                && bullet.y <= enemy.y + config.enemy_height
                && bullet.y + config.player_height >= enemy.y
            {
                spent[bi] = true;
                killed.push(lane);
                break;
            }
        }
    }

    for &lane in &killed {
        grid.remove(lane);
        log::debug!("Cat in lane {} purged", lane);
    }
    let mut flags = spent.into_iter();
    bullets.retain(|_| !flags.next().unwrap_or(false));

    killed.len() as u32
}

/// Whether any cat is touching the player. Does not change any state.
pub fn player_touched(grid: &SpawnGrid, player: &Player, config: &GameConfig) -> bool {
    grid.enemies().any(|(_, enemy)| {
        enemy.x == player.x()
            && enemy.y + config.enemy_height - HIT_LEAD_TOLERANCE >= player.y
            && enemy.y + HIT_TRAIL_TOLERANCE < player.y + config.player_height
    })
}
