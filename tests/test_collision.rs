use kittens::collision::*;
use kittens::entities::{Bullet, Enemy, Player};
use kittens::spawn::SpawnGrid;
use kittens::GameConfig;

fn grid_with(enemies: &[(usize, f32)]) -> SpawnGrid {
    let mut grid = SpawnGrid::new(8, 6).unwrap();
    for &(lane, y) in enemies {
        assert!(grid.place(lane, Enemy { x: lane as f32 * 75.0, y, base_speed: 0.5 }));
    }
    grid
}

/// Player in lane 2 (x = 150) with its top edge at y = 546.
fn player_at_546() -> Player {
    let mut player = Player::in_lane(2, &GameConfig::default());
    player.y = 546.0;
    player
}

fn bullet(x: f32, y: f32) -> Bullet {
    Bullet { x, y, speed: 0.5 }
}

// ── Bullet × Enemy ────────────────────────────────────────────────────────────

#[test]
fn bullet_hits_enemy_with_overlapping_span() {
    // 200 <= 250 + 156 and 200 + 54 >= 250
    let config = GameConfig::default();
    let mut grid = grid_with(&[(2, 250.0)]);
    let mut bullets = vec![bullet(150.0, 200.0)];
    let hits = resolve_bullet_hits(&mut grid, &mut bullets, &config);
    assert_eq!(hits, 1);
    assert!(grid.get(2).is_none());
    assert!(bullets.is_empty());
}

#[test]
fn bullet_in_other_lane_misses() {
    let config = GameConfig::default();
    let mut grid = grid_with(&[(2, 250.0)]);
    let mut bullets = vec![bullet(225.0, 250.0)];
    assert_eq!(resolve_bullet_hits(&mut grid, &mut bullets, &config), 0);
    assert_eq!(bullets.len(), 1);
    assert!(grid.get(2).is_some());
}

#[test]
fn bullet_below_enemy_misses() {
    // bullet.y 407 > 250 + 156
    let config = GameConfig::default();
    let mut grid = grid_with(&[(2, 250.0)]);
    let mut bullets = vec![bullet(150.0, 407.0)];
    assert_eq!(resolve_bullet_hits(&mut grid, &mut bullets, &config), 0);
}

#[test]
fn bullet_above_enemy_misses() {
    // 195 + 54 < 250
    let config = GameConfig::default();
    let mut grid = grid_with(&[(2, 250.0)]);
    let mut bullets = vec![bullet(150.0, 195.0)];
    assert_eq!(resolve_bullet_hits(&mut grid, &mut bullets, &config), 0);
}

#[test]
fn span_edges_count_as_hits() {
    let config = GameConfig::default();
    let mut grid = grid_with(&[(1, 100.0), (3, 100.0)]);
    let mut bullets = vec![bullet(75.0, 256.0), bullet(225.0, 46.0)];
    assert_eq!(resolve_bullet_hits(&mut grid, &mut bullets, &config), 2);
}

#[test]
fn first_bullet_consumes_enemy_second_survives() {
    let config = GameConfig::default();
    let mut grid = grid_with(&[(2, 250.0)]);
    let mut bullets = vec![bullet(150.0, 300.0), bullet(150.0, 260.0)];
    assert_eq!(resolve_bullet_hits(&mut grid, &mut bullets, &config), 1);
    assert_eq!(bullets, vec![bullet(150.0, 260.0)]);
}

#[test]
fn each_lane_scores_independently() {
    let config = GameConfig::default();
    let mut grid = grid_with(&[(0, 100.0), (4, 100.0), (7, 100.0)]);
    let mut bullets = vec![bullet(300.0, 120.0), bullet(0.0, 120.0), bullet(450.0, 120.0)];
    assert_eq!(resolve_bullet_hits(&mut grid, &mut bullets, &config), 2);
    assert!(grid.get(0).is_none());
    assert!(grid.get(4).is_none());
    assert!(grid.get(7).is_some());
    assert_eq!(bullets, vec![bullet(450.0, 120.0)]);
}

// ── Pruning ───────────────────────────────────────────────────────────────────

#[test]
fn prune_removes_enemies_below_field() {
    let config = GameConfig::default();
    let mut grid = grid_with(&[(0, 600.0), (1, 600.5)]);
    let mut bullets = Vec::new();
    prune_out_of_bounds(&mut grid, &mut bullets, &config);
    assert!(grid.get(0).is_some());
    assert!(grid.get(1).is_none());
}

#[test]
fn prune_removes_bullets_fully_above_field() {
    let config = GameConfig::default();
    let mut grid = grid_with(&[]);
    let mut bullets = vec![bullet(0.0, -50.0), bullet(75.0, -60.0)];
    prune_out_of_bounds(&mut grid, &mut bullets, &config);
    assert_eq!(bullets, vec![bullet(0.0, -50.0)]);
}

// ── Enemy × Player ────────────────────────────────────────────────────────────

#[test]
fn enemy_just_short_of_player_is_harmless() {
    // 390 + 156 - 5 = 541 < 546
    let config = GameConfig::default();
    let grid = grid_with(&[(2, 390.0)]);
    let player = player_at_546();
    assert!(!player_touched(&grid, &player, &config));
}

#[test]
fn enemy_overlapping_player_kills() {
    // 400 + 151 = 551 >= 546 and 400 + 10 = 410 < 600
    let config = GameConfig::default();
    let grid = grid_with(&[(2, 400.0)]);
    let player = player_at_546();
    assert!(player_touched(&grid, &player, &config));
}

#[test]
fn enemy_in_neighbouring_lane_is_harmless() {
    let config = GameConfig::default();
    let grid = grid_with(&[(1, 400.0), (3, 400.0)]);
    let player = player_at_546();
    assert!(!player_touched(&grid, &player, &config));
}

#[test]
fn enemy_past_player_is_harmless() {
    // 590 + 10 = 600 is not < 600
    let config = GameConfig::default();
    let grid = grid_with(&[(2, 590.0)]);
    let player = player_at_546();
    assert!(!player_touched(&grid, &player, &config));
}

#[test]
fn walked_player_is_touched_in_fractional_lane() {
    let config = GameConfig {
        game_width: 10.0,
        enemy_width: 0.7,
        player_width: 0.7,
        ..GameConfig::default()
    };
    let mut player = Player::in_lane(0, &config);
    for _ in 0..9 {
        player.move_towards(kittens::input::Direction::Right, &config);
    }
    let mut grid = SpawnGrid::new(config.lane_count(), config.max_enemies).unwrap();
    let cat = Enemy { x: 9.0 * config.enemy_width, y: player.y - 100.0, base_speed: 0.5 };
    assert!(grid.place(9, cat));
    assert!(player_touched(&grid, &player, &config));
}
