// Hero visual entity

use super::life_bar;
use super::meta::{Meta, Orientation};
use super::style::HeroStyle;
use super::textures::{HeroTextures, PlayerSlot, TextureSet};
use super::{HeroError, HeroId};
use crate::core::easing::{ATTACK, LIFE_DECREASE, LIFE_INCREASE};
use crate::core::math::{clamp01, lerp};
use crate::engine::assets::SubTexture;
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::scene::{draw_graphics, draw_sprite, DrawCommand, Graphics, Sprite};
use glam::Vec2;
use log::{debug, trace, warn};
use std::sync::Arc;
use std::time::Duration;

/// One animated hero on the tile grid
///
/// The hero owns three child nodes drawn in order: the life bar, the hero
/// sprite, and the blink overlay on top of it. It only reads snapshots; all
/// game logic lives in whatever produces them.
pub struct Hero<C: Clock = SystemClock> {
    id: HeroId,
    slot: PlayerSlot,
    tile_size: f32,
    style: HeroStyle,
    textures: Arc<HeroTextures>,
    clock: C,

    /// Node position in pixels
    position: Vec2,
    life_indicator: Graphics,
    hero_sprite: Sprite,
    blink_sprite: Sprite,

    meta: Meta,
    texture_set: TextureSet,
    /// When the current snapshot arrived
    updated_at: Duration,
    interpolation_time: Duration,
    consecutive_turn: bool,

    /// Last orientation and table pushed to the sprites
    displayed: Option<(Orientation, TextureSet)>,
    texture_swaps: u64,
}

impl<C: Clock> Hero<C> {
    /// Create a hero with the default style and draw its first frame
    pub fn new(
        id: HeroId,
        meta: Meta,
        tile_size: f32,
        textures: Arc<HeroTextures>,
        clock: C,
    ) -> Result<Self, HeroError> {
        Self::with_style(id, meta, HeroStyle::with_tile_size(tile_size), textures, clock)
    }

    /// Create a hero laid out by `style` and draw its first frame
    pub fn with_style(
        id: HeroId,
        meta: Meta,
        style: HeroStyle,
        textures: Arc<HeroTextures>,
        clock: C,
    ) -> Result<Self, HeroError> {
        let slot = textures.slot(id).ok_or(HeroError::InvalidId {
            id,
            max: textures.player_count(),
        })?;
        if !(style.tile_size.is_finite() && style.tile_size > 0.0) {
            return Err(HeroError::InvalidTileSize(style.tile_size));
        }
        meta.validate()?;

        let hero_sprite = Sprite::with_texture(
            style.sprite_offset,
            textures.hero(TextureSet::Normal, slot, Orientation::North),
        );
        let mut blink_sprite =
            Sprite::with_texture(style.sprite_offset, textures.blink(Orientation::North));
        blink_sprite.alpha = 0.0;

        let updated_at = clock.now();
        let mut hero = Self {
            id,
            slot,
            tile_size: style.tile_size,
            life_indicator: Graphics::new(style.life_bar_offset),
            style,
            textures,
            clock,
            position: Vec2::ZERO,
            hero_sprite,
            blink_sprite,
            texture_set: TextureSet::for_winning(meta.winning),
            meta,
            updated_at,
            interpolation_time: Duration::ZERO,
            consecutive_turn: false,
            displayed: None,
            texture_swaps: 0,
        };
        hero.render();

        Ok(hero)
    }

    /// Replace the current snapshot
    ///
    /// The transition animates over `interpolation_time` when `consecutive_turn`
    /// is set and the snapshot has a prior state; otherwise the next render
    /// snaps to it. A rejected snapshot leaves the previous one in place.
    pub fn update_hero(
        &mut self,
        meta: Meta,
        interpolation_time: Duration,
        consecutive_turn: bool,
    ) -> Result<(), HeroError> {
        if let Err(err) = meta.validate() {
            warn!("Hero{}: rejected snapshot: {}", self.id, err);
            return Err(err.into());
        }

        debug!("{}", self.log_meta(&meta));

        self.texture_set = TextureSet::for_winning(meta.winning);
        self.meta = meta;
        self.updated_at = self.clock.now();
        self.interpolation_time = interpolation_time;
        self.consecutive_turn = consecutive_turn;

        Ok(())
    }

    /// Per-frame update of every child node
    pub fn render(&mut self) {
        let elapsed = self.clock.now().saturating_sub(self.updated_at);
        let meta = &self.meta;

        let (life, position, orientation) = match meta.from {
            // Only a continuation of the displayed turn is worth animating
            Some(from) if self.consecutive_turn && !self.interpolation_time.is_zero() => {
                let p = clamp01(elapsed.as_secs_f32() / self.interpolation_time.as_secs_f32());

                let life_easing = if from.life < meta.to.life {
                    LIFE_INCREASE
                } else {
                    LIFE_DECREASE
                };
                let life = lerp(from.life, meta.to.life, life_easing.ease(p));

                let position = if meta.killed || meta.moved {
                    let progress = if meta.attack { ATTACK.ease(p) } else { p };
                    from.pos.lerp(meta.to.pos, progress)
                } else {
                    meta.to.pos
                };

                (life, position, meta.orientation_at(p))
            }
            _ => (meta.to.life, meta.to.pos, meta.final_orientation()),
        };

        self.draw_life_indicator(life);
        self.set_position(position);
        self.refresh_hero_sprite(orientation);

        // Flash cues run on their own clock, independent of the transition
        self.blink_sprite.alpha = if self.is_blinking(elapsed) { 1.0 } else { 0.0 };
    }

    /// South-facing texture from the active table, for portraits
    pub fn get_texture(&self) -> SubTexture {
        self.textures
            .hero(self.texture_set, self.slot, Orientation::South)
    }

    /// Single-line diagnostic summary of a snapshot
    pub fn log_meta(&self, meta: &Meta) -> String {
        format!("Hero{}: {}", self.id, meta.summary())
    }

    /// Flatten the child nodes into world-space draw commands
    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        draw_graphics(self.position, &self.life_indicator, out);
        draw_sprite(self.position, &self.hero_sprite, out);
        draw_sprite(self.position, &self.blink_sprite, out);
    }

    fn is_blinking(&self, elapsed: Duration) -> bool {
        let meta = &self.meta;
        meta.killed
            || ((meta.take_mine || meta.attacked) && elapsed < self.style.blink_duration)
    }

    fn draw_life_indicator(&mut self, life: f32) {
        life_bar::draw(
            &mut self.life_indicator,
            self.tile_size,
            self.style.life_bar_width,
            self.style.life_bar_blue,
            life,
        );
    }

    /// Place the node at a grid position
    fn set_position(&mut self, pos: Vec2) {
        self.position = pos * self.tile_size;
    }

    fn refresh_hero_sprite(&mut self, orientation: Orientation) {
        let wanted = (orientation, self.texture_set);
        if self.displayed == Some(wanted) {
            return;
        }
        self.displayed = Some(wanted);

        self.hero_sprite
            .set_texture(self.textures.hero(self.texture_set, self.slot, orientation));
        self.blink_sprite
            .set_texture(self.textures.blink(orientation));
        self.texture_swaps += 1;

        trace!(
            "Hero{}: facing {:?} ({:?} textures)",
            self.id,
            orientation,
            self.texture_set
        );
    }

    pub fn id(&self) -> HeroId {
        self.id
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Node position in pixels
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn texture_set(&self) -> TextureSet {
        self.texture_set
    }

    pub fn displayed_orientation(&self) -> Option<Orientation> {
        self.displayed.map(|(orientation, _)| orientation)
    }

    pub fn blink_alpha(&self) -> f32 {
        self.blink_sprite.alpha
    }

    pub fn life_indicator(&self) -> &Graphics {
        &self.life_indicator
    }

    pub fn hero_sprite(&self) -> &Sprite {
        &self.hero_sprite
    }

    pub fn blink_sprite(&self) -> &Sprite {
        &self.blink_sprite
    }

    /// Number of times the sprite textures were actually replaced
    pub fn texture_swaps(&self) -> u64 {
        self.texture_swaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::ManualClock;
    use crate::game::hero::meta::HeroState;
    use crate::game::hero::textures::tests::test_textures;
    use approx::assert_relative_eq;

    const TILE: f32 = 32.0;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn spawn(id: HeroId, meta: Meta, clock: &ManualClock) -> Hero<ManualClock> {
        Hero::new(id, meta, TILE, test_textures(), clock.clone()).unwrap()
    }

    fn bar_height(hero: &Hero<ManualClock>) -> f32 {
        hero.life_indicator().shapes()[0].height
    }

    fn standing(x: f32, y: f32, life: f32) -> Meta {
        Meta::new(HeroState::new(x, y, life), vec![Orientation::North])
    }

    #[test]
    fn test_first_snapshot_snaps() {
        let clock = ManualClock::new();
        let hero = spawn(1, standing(2.0, 3.0, 80.0), &clock);

        assert_eq!(hero.position(), Vec2::new(2.0 * TILE, 3.0 * TILE));
        assert_eq!(bar_height(&hero), (TILE * 0.8).round());
        assert_eq!(hero.blink_alpha(), 0.0);
        assert_eq!(hero.displayed_orientation(), Some(Orientation::North));
    }

    #[test]
    fn test_move_interpolates_linearly() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 100.0), &clock);

        let mut meta = Meta::transition(
            HeroState::new(0.0, 0.0, 100.0),
            HeroState::new(1.0, 0.0, 100.0),
            vec![Orientation::East, Orientation::North],
        );
        meta.moved = true;
        hero.update_hero(meta, ms(200), true).unwrap();

        clock.advance(ms(100));
        hero.render();
        assert_relative_eq!(hero.position().x, 0.5 * TILE, epsilon = 1e-3);
        assert_relative_eq!(hero.position().y, 0.0, epsilon = 1e-3);
        // Halfway through a two-step turn shows the second facing
        assert_eq!(hero.displayed_orientation(), Some(Orientation::North));

        clock.advance(ms(50));
        hero.render();
        assert_relative_eq!(hero.position().x, 0.75 * TILE, epsilon = 1e-3);

        clock.advance(ms(500));
        hero.render();
        assert_relative_eq!(hero.position().x, TILE, epsilon = 1e-3);
    }

    #[test]
    fn test_early_orientation_sample() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 100.0), &clock);
        let mut meta = Meta::transition(
            HeroState::new(0.0, 0.0, 100.0),
            HeroState::new(1.0, 0.0, 100.0),
            vec![Orientation::East, Orientation::North],
        );
        meta.moved = true;
        hero.update_hero(meta, ms(200), true).unwrap();

        clock.advance(ms(20));
        hero.render();
        assert_eq!(hero.displayed_orientation(), Some(Orientation::East));
    }

    #[test]
    fn test_attack_lunge_overshoots() {
        let clock = ManualClock::new();
        let mut hero = spawn(2, standing(0.0, 0.0, 100.0), &clock);

        let mut meta = Meta::transition(
            HeroState::new(0.0, 0.0, 100.0),
            HeroState::new(1.0, 0.0, 100.0),
            vec![Orientation::East],
        );
        meta.moved = true;
        meta.attack = true;
        hero.update_hero(meta, ms(200), true).unwrap();

        let mut furthest = f32::MIN;
        for _ in 0..20 {
            clock.advance(ms(10));
            hero.render();
            furthest = furthest.max(hero.position().x);
        }
        assert!(furthest > TILE, "lunge should pass the target cell");
        assert_relative_eq!(hero.position().x, TILE, epsilon = 1e-3);
    }

    #[test]
    fn test_no_move_flag_snaps_position() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 100.0), &clock);

        let meta = Meta::transition(
            HeroState::new(0.0, 0.0, 100.0),
            HeroState::new(3.0, 1.0, 100.0),
            vec![Orientation::East],
        );
        hero.update_hero(meta, ms(200), true).unwrap();

        clock.advance(ms(10));
        hero.render();
        assert_eq!(hero.position(), Vec2::new(3.0 * TILE, TILE));
    }

    #[test]
    fn test_killed_hero_slides_and_blinks() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 10.0), &clock);

        let mut meta = Meta::transition(
            HeroState::new(0.0, 0.0, 10.0),
            HeroState::new(0.0, 2.0, 0.0),
            vec![Orientation::South],
        );
        meta.killed = true;
        hero.update_hero(meta, ms(200), true).unwrap();

        clock.advance(ms(100));
        hero.render();
        assert_relative_eq!(hero.position().y, TILE, epsilon = 1e-3);
        assert_eq!(hero.blink_alpha(), 1.0);

        clock.advance(ms(10_000));
        hero.render();
        assert_eq!(hero.blink_alpha(), 1.0);
    }

    #[test]
    fn test_attacked_blink_is_short() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 100.0), &clock);

        let mut meta = standing(0.0, 0.0, 70.0);
        meta.attacked = true;
        hero.update_hero(meta, ms(200), false).unwrap();

        clock.advance(ms(79));
        hero.render();
        assert_eq!(hero.blink_alpha(), 1.0);

        clock.advance(ms(1));
        hero.render();
        assert_eq!(hero.blink_alpha(), 0.0);
    }

    #[test]
    fn test_mine_blinks() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 100.0), &clock);

        let mut meta = standing(0.0, 0.0, 75.0);
        meta.take_mine = true;
        hero.update_hero(meta, ms(200), true).unwrap();
        hero.render();
        assert_eq!(hero.blink_alpha(), 1.0);
    }

    #[test]
    fn test_missing_from_takes_snapshot_path() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 100.0), &clock);

        let mut meta = Meta::new(
            HeroState::new(4.0, 4.0, 40.0),
            vec![Orientation::West, Orientation::South],
        );
        meta.moved = true;
        hero.update_hero(meta, ms(200), true).unwrap();

        clock.advance(ms(1));
        hero.render();
        assert_eq!(hero.position(), Vec2::splat(4.0 * TILE));
        assert_eq!(bar_height(&hero), (TILE * 0.4).round());
        assert_eq!(hero.displayed_orientation(), Some(Orientation::South));
    }

    #[test]
    fn test_non_consecutive_turn_takes_snapshot_path() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 100.0), &clock);

        let mut meta = Meta::transition(
            HeroState::new(0.0, 0.0, 100.0),
            HeroState::new(2.0, 0.0, 50.0),
            vec![Orientation::East, Orientation::West],
        );
        meta.moved = true;
        hero.update_hero(meta.clone(), ms(200), false).unwrap();

        clock.advance(ms(1));
        hero.render();
        assert_eq!(hero.position(), Vec2::new(2.0 * TILE, 0.0));
        assert_eq!(hero.displayed_orientation(), Some(Orientation::West));

        // Zero-length transitions snap as well
        hero.update_hero(meta, Duration::ZERO, true).unwrap();
        hero.render();
        assert_eq!(hero.position(), Vec2::new(2.0 * TILE, 0.0));
    }

    #[test]
    fn test_life_bar_eases() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 100.0), &clock);

        // Losing life drains quickly at first
        let meta = Meta::transition(
            HeroState::new(0.0, 0.0, 100.0),
            HeroState::new(0.0, 0.0, 0.0),
            vec![Orientation::North],
        );
        hero.update_hero(meta, ms(200), true).unwrap();
        clock.advance(ms(100));
        hero.render();
        assert!(bar_height(&hero) < 0.5 * TILE);

        // Gaining life fills slowly at first
        let meta = Meta::transition(
            HeroState::new(0.0, 0.0, 0.0),
            HeroState::new(0.0, 0.0, 100.0),
            vec![Orientation::North],
        );
        hero.update_hero(meta, ms(200), true).unwrap();
        clock.advance(ms(100));
        hero.render();
        assert!(bar_height(&hero) < 0.5 * TILE);

        clock.advance(ms(100));
        hero.render();
        assert_eq!(bar_height(&hero), TILE);
    }

    #[test]
    fn test_texture_swaps_only_on_change() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(0.0, 0.0, 100.0), &clock);
        assert_eq!(hero.texture_swaps(), 1);

        hero.render();
        hero.render();
        assert_eq!(hero.texture_swaps(), 1);

        hero.update_hero(
            Meta::new(HeroState::new(0.0, 0.0, 100.0), vec![Orientation::East]),
            ms(200),
            false,
        )
        .unwrap();
        hero.render();
        hero.render();
        assert_eq!(hero.texture_swaps(), 2);

        // Same facing, different table
        let mut meta = Meta::new(HeroState::new(0.0, 0.0, 100.0), vec![Orientation::East]);
        meta.winning = true;
        hero.update_hero(meta, ms(200), false).unwrap();
        hero.render();
        assert_eq!(hero.texture_swaps(), 3);
        assert_eq!(hero.texture_set(), TextureSet::Crowned);
    }

    #[test]
    fn test_blink_follows_orientation() {
        let clock = ManualClock::new();
        let textures = test_textures();
        let hero = Hero::new(
            1,
            Meta::new(HeroState::new(0.0, 0.0, 100.0), vec![Orientation::West]),
            TILE,
            textures.clone(),
            clock,
        )
        .unwrap();

        assert_eq!(
            hero.blink_sprite().texture(),
            Some(textures.blink(Orientation::West))
        );
        assert_eq!(hero.hero_sprite().position, Vec2::new(-4.0, -8.0));
    }

    #[test]
    fn test_get_texture_faces_south() {
        let clock = ManualClock::new();
        let textures = test_textures();
        let slot = textures.slot(3).unwrap();
        let mut hero = Hero::new(3, standing(0.0, 0.0, 100.0), TILE, textures.clone(), clock)
            .unwrap();

        assert_eq!(
            hero.get_texture(),
            textures.hero(TextureSet::Normal, slot, Orientation::South)
        );

        let mut meta = standing(0.0, 0.0, 100.0);
        meta.winning = true;
        hero.update_hero(meta, ms(200), false).unwrap();
        assert_eq!(
            hero.get_texture(),
            textures.hero(TextureSet::Crowned, slot, Orientation::South)
        );
    }

    #[test]
    fn test_log_meta() {
        let clock = ManualClock::new();
        let hero = spawn(2, standing(0.0, 0.0, 100.0), &clock);

        let mut meta = Meta::transition(
            HeroState::new(0.0, 0.0, 60.0),
            HeroState::new(1.0, 0.0, 50.0),
            vec![Orientation::East],
        );
        meta.life = Some(50.0);
        meta.moved = true;

        let line = hero.log_meta(&meta);
        assert!(line.starts_with("Hero2: "));
        assert!(line.contains("life=50"));
        assert!(line.contains("move "));
        assert!(!line.contains("attack"));
    }

    #[test]
    fn test_invalid_construction() {
        let clock = ManualClock::new();
        let textures = test_textures();

        let err = Hero::new(0, standing(0.0, 0.0, 100.0), TILE, textures.clone(), clock.clone())
            .err()
            .unwrap();
        assert_eq!(err, HeroError::InvalidId { id: 0, max: 4 });

        let err = Hero::new(5, standing(0.0, 0.0, 100.0), TILE, textures.clone(), clock.clone())
            .err()
            .unwrap();
        assert_eq!(err, HeroError::InvalidId { id: 5, max: 4 });

        let err = Hero::new(1, standing(0.0, 0.0, 100.0), 0.0, textures, clock)
            .err()
            .unwrap();
        assert_eq!(err, HeroError::InvalidTileSize(0.0));
    }

    #[test]
    fn test_rejected_update_keeps_snapshot() {
        let clock = ManualClock::new();
        let mut hero = spawn(1, standing(1.0, 1.0, 100.0), &clock);

        let empty = Meta::new(HeroState::new(5.0, 5.0, 10.0), vec![]);
        assert!(hero.update_hero(empty, ms(200), true).is_err());

        hero.render();
        assert_eq!(hero.meta().to.pos, Vec2::new(1.0, 1.0));
        assert_eq!(hero.position(), Vec2::splat(TILE));
    }

    #[test]
    fn test_draw_order() {
        let clock = ManualClock::new();
        let mut meta = standing(1.0, 0.0, 100.0);
        meta.killed = true;
        let hero = spawn(1, meta, &clock);

        let mut out = Vec::new();
        hero.draw(&mut out);

        assert_eq!(out.len(), 3);
        assert!(matches!(out[0], DrawCommand::Fill { .. }));
        assert!(matches!(
            out[1],
            DrawCommand::Sprite { position, alpha, .. } if position == Vec2::new(28.0, -8.0) && alpha == 1.0
        ));
        assert!(matches!(out[2], DrawCommand::Sprite { alpha, .. } if alpha == 1.0));
    }
}
