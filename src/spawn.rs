//! Lane occupancy for the falling cats.
//!
//! The field is split into `lane_count` columns, each holding at most one
//! enemy. After every tick the grid is topped back up to `max_enemies`.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::Enemy;
use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct SpawnGrid {
    lanes: Vec<Option<Enemy>>,
    max_enemies: usize,
}

impl SpawnGrid {
    pub fn new(lane_count: usize, max_enemies: usize) -> Result<Self, ConfigError> {
        if max_enemies > lane_count {
            return Err(ConfigError::TooManyEnemies {
                max_enemies,
                lane_count,
            });
        }
        Ok(Self {
            lanes: vec![None; lane_count],
            max_enemies,
        })
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn max_enemies(&self) -> usize {
        self.max_enemies
    }

    pub fn occupied(&self) -> usize {
        self.lanes.iter().filter(|lane| lane.is_some()).count()
    }

    pub fn free_lanes(&self) -> Vec<usize> {
        self.lanes
            .iter()
            .enumerate()
            .filter(|(_, lane)| lane.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn get(&self, lane: usize) -> Option<&Enemy> {
        self.lanes.get(lane).and_then(Option::as_ref)
    }

    /// Live enemies with their lane index, in lane order.
    pub fn enemies(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.lanes
            .iter()
            .enumerate()
            .filter_map(|(i, lane)| lane.as_ref().map(|e| (i, e)))
    }

    pub fn enemies_mut(&mut self) -> impl Iterator<Item = &mut Enemy> {
        self.lanes.iter_mut().filter_map(Option::as_mut)
    }

    /// Put `enemy` into a free lane. Refused if the lane is taken, out of
    /// range, or the grid is already at its cap.
    pub fn place(&mut self, lane: usize, enemy: Enemy) -> bool {
        if self.occupied() >= self.max_enemies {
            return false;
        }
        match self.lanes.get_mut(lane) {
            Some(slot) if slot.is_none() => {
                *slot = Some(enemy);
                true
            }
            _ => false,
        }
    }

    /// Free `lane` so the next refill may use it.
    pub fn remove(&mut self, lane: usize) -> Option<Enemy> {
        self.lanes.get_mut(lane).and_then(Option::take)
    }

    /// Drop every enemy for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&Enemy) -> bool) {
        for lane in &mut self.lanes {
            if lane.as_ref().is_some_and(|e| !keep(e)) {
                *lane = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.lanes.iter_mut().for_each(|lane| *lane = None);
    }

    /// Fill random free lanes until `max_enemies` are alive. Returns how many
    /// enemies were spawned.
    pub fn refill(&mut self, config: &GameConfig, rng: &mut impl Rng) -> usize {
        let mut free = self.free_lanes();
        let mut spawned = 0;
        while self.occupied() < self.max_enemies && !free.is_empty() {
            let lane = free.swap_remove(rng.gen_range(0..free.len()));
            self.lanes[lane] = Some(Enemy::spawn(lane, config, rng));
            spawned += 1;
            log::debug!("Spawned enemy in lane {}", lane);
        }
        spawned
    }
}
