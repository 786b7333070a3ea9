// Hero ownership for a scene

use super::entity::Hero;
use super::meta::Meta;
use super::style::HeroStyle;
use super::textures::HeroTextures;
use super::{HeroError, HeroId};
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::scene::DrawCommand;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/// Every hero shown in a scene, sharing one texture table and clock
pub struct HeroRoster<C: Clock + Clone = SystemClock> {
    heroes: Vec<Hero<C>>,
    textures: Arc<HeroTextures>,
    style: HeroStyle,
    clock: C,
}

impl<C: Clock + Clone> HeroRoster<C> {
    pub fn new(textures: Arc<HeroTextures>, style: HeroStyle, clock: C) -> Self {
        Self {
            heroes: Vec::new(),
            textures,
            style,
            clock,
        }
    }

    /// Create a hero from its first snapshot
    pub fn spawn(&mut self, id: HeroId, meta: Meta) -> Result<&Hero<C>, HeroError> {
        if self.get(id).is_some() {
            return Err(HeroError::DuplicateId(id));
        }

        let hero = Hero::with_style(
            id,
            meta,
            self.style.clone(),
            self.textures.clone(),
            self.clock.clone(),
        )?;
        info!("Spawned Hero{} at {}", id, hero.meta().to.pos);

        self.heroes.push(hero);
        Ok(&self.heroes[self.heroes.len() - 1])
    }

    /// Forward a snapshot to one hero
    pub fn update(
        &mut self,
        id: HeroId,
        meta: Meta,
        interpolation_time: Duration,
        consecutive_turn: bool,
    ) -> Result<(), HeroError> {
        self.get_mut(id)
            .ok_or(HeroError::NotFound(id))?
            .update_hero(meta, interpolation_time, consecutive_turn)
    }

    pub fn get(&self, id: HeroId) -> Option<&Hero<C>> {
        self.heroes.iter().find(|h| h.id() == id)
    }

    pub fn get_mut(&mut self, id: HeroId) -> Option<&mut Hero<C>> {
        self.heroes.iter_mut().find(|h| h.id() == id)
    }

    /// Render every hero for this frame
    pub fn render_all(&mut self) {
        for hero in &mut self.heroes {
            hero.render();
        }
    }

    /// Draw commands for every hero, in spawn order
    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        for hero in &self.heroes {
            hero.draw(out);
        }
    }

    /// Remove a hero from the scene
    pub fn remove(&mut self, id: HeroId) -> Option<Hero<C>> {
        let pos = self.heroes.iter().position(|h| h.id() == id)?;
        info!("Removed Hero{}", id);
        Some(self.heroes.remove(pos))
    }

    pub fn all(&self) -> &[Hero<C>] {
        &self.heroes
    }

    pub fn count(&self) -> usize {
        self.heroes.len()
    }

    pub fn textures(&self) -> &Arc<HeroTextures> {
        &self.textures
    }
}
