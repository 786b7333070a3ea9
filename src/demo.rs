// Scripted match feeding snapshots to the demo window

use glam::Vec2;
use tile_heroes::game::hero::{HeroId, HeroState, Meta, Orientation};

/// Every Nth turn a hero steps on a mine
const MINE_INTERVAL: u64 = 5;
const MINE_DAMAGE: f32 = 35.0;

fn step(orientation: Orientation) -> Vec2 {
    match orientation {
        Orientation::North => Vec2::new(0.0, -1.0),
        Orientation::East => Vec2::new(1.0, 0.0),
        Orientation::South => Vec2::new(0.0, 1.0),
        Orientation::West => Vec2::new(-1.0, 0.0),
    }
}

struct Walker {
    id: HeroId,
    spawn: Vec2,
    state: HeroState,
    facing: Orientation,
    path: Vec<Orientation>,
    step: usize,
    /// Lunge into the next cell every Nth step
    attack_every: Option<usize>,
    dead: bool,
}

impl Walker {
    fn new(id: HeroId, x: f32, y: f32, path: Vec<Orientation>, attack_every: Option<usize>) -> Self {
        Self {
            id,
            spawn: Vec2::new(x, y),
            state: HeroState::new(x, y, 100.0),
            facing: Orientation::South,
            path,
            step: 0,
            attack_every,
            dead: false,
        }
    }

    fn advance(&mut self, turn: u64) -> Meta {
        if self.dead {
            // Respawn: no prior state, so the hero snaps into place
            self.dead = false;
            self.state = HeroState {
                pos: self.spawn,
                life: 100.0,
            };
            return Meta::new(self.state, vec![Orientation::South]);
        }

        let direction = self.path[self.step % self.path.len()];
        self.step += 1;

        let from = self.state;
        let mut meta = Meta::transition(from, from, vec![self.facing, direction]);
        self.facing = direction;

        self.state.pos = from.pos + step(direction);
        meta.to.pos = self.state.pos;
        meta.moved = true;
        meta.attack = self
            .attack_every
            .is_some_and(|every| self.step % every == 0);

        if turn % MINE_INTERVAL == u64::from(self.id) % MINE_INTERVAL {
            self.state.life = (self.state.life - MINE_DAMAGE).max(0.0);
            meta.take_mine = true;
        }
        meta.to.life = self.state.life;
        meta.life = Some(self.state.life);

        if self.state.life <= 0.0 {
            meta.killed = true;
            self.dead = true;
        }

        meta
    }
}

/// A looping two-hero match
pub struct ScriptedMatch {
    turn: u64,
    walkers: Vec<Walker>,
}

impl Default for ScriptedMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedMatch {
    pub fn new() -> Self {
        use Orientation::*;
        Self {
            turn: 0,
            walkers: vec![
                Walker::new(1, 2.0, 2.0, vec![East, East, South, South, West, West, North, North], None),
                Walker::new(2, 7.0, 4.0, vec![North, West, West, South, East, East], Some(3)),
            ],
        }
    }

    /// First snapshot of every hero
    pub fn initial(&self) -> Vec<(HeroId, Meta)> {
        self.walkers
            .iter()
            .map(|w| (w.id, Meta::new(w.state, vec![w.facing])))
            .collect()
    }

    /// Snapshots for the next turn; the healthiest hero wears the crown
    pub fn next_turn(&mut self) -> Vec<(HeroId, Meta)> {
        self.turn += 1;
        let turn = self.turn;

        let mut metas: Vec<(HeroId, Meta)> = self
            .walkers
            .iter_mut()
            .map(|w| (w.id, w.advance(turn)))
            .collect();

        let best = metas
            .iter()
            .map(|(_, meta)| meta.to.life)
            .fold(f32::MIN, f32::max);
        let leaders = metas.iter().filter(|(_, m)| m.to.life == best).count();
        if leaders == 1 {
            for (_, meta) in &mut metas {
                meta.winning = meta.to.life == best;
            }
        }

        metas
    }
}
