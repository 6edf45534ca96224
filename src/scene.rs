//! Runtime scene
//!
//! Owns every piece of mutable state. Built once at startup and shared with
//! the frame loop, the spawn timer and input listeners through a single
//! handle; nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioGate, MediaTrack};
use crate::effects::{Burst, BurstEffect};
use crate::input::{self, PointerInput, PopOutcome};
use crate::renderer::DrawSurface;
use crate::settings::Settings;
use crate::sim::{MessageBanner, QuoteDeck, SphereField, SphereId, Viewport};

pub struct Scene<T: MediaTrack, B: BurstEffect> {
    pub field: SphereField,
    pub deck: QuoteDeck,
    pub banner: MessageBanner,
    pub audio: AudioGate<T>,
    burst: B,
    rng: Pcg32,
    viewport: Viewport,
    autoplay_hint: Option<String>,
    hint_duration_ms: f64,
    frame_count: u64,
    pops: u64,
}

impl<T: MediaTrack, B: BurstEffect> Scene<T, B> {
    pub fn new(settings: &Settings, viewport: Viewport, audio: AudioGate<T>, burst: B, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let deck = QuoteDeck::new(settings.quote_list(), &mut rng);
        Self {
            field: SphereField::new(),
            deck,
            banner: MessageBanner::new(settings.message_duration_ms, settings.clear_text_on_hide),
            audio,
            burst,
            rng,
            viewport,
            autoplay_hint: settings.autoplay_hint.clone(),
            hint_duration_ms: settings.hint_duration_ms,
            frame_count: 0,
            pops: 0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn pops(&self) -> u64 {
        self.pops
    }

    /// New drawing area; spheres keep their positions and the next frame redraws
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!("Viewport {}x{}", viewport.width, viewport.height);
            self.viewport = viewport;
        }
    }

    /// One animation frame: fire due banner hides, redraw and advance the field
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) {
        self.banner.poll(now_ms);
        surface.clear();
        let viewport = self.viewport;
        self.field.tick(surface, &viewport, &mut self.rng);
        self.frame_count += 1;
    }

    /// Population timer tick: admit one sphere if below the cap
    pub fn spawn_tick(&mut self) -> Option<SphereId> {
        let viewport = self.viewport;
        self.field.try_spawn(&viewport, &mut self.rng)
    }

    pub fn handle_pointer(&mut self, input: PointerInput, surface_origin: Vec2, now_ms: f64) -> PopOutcome {
        let outcome = input::route_pointer(self, input, surface_origin, now_ms);
        if outcome.popped {
            self.pops += 1;
        }
        outcome
    }

    /// Any pointer-down or touch-start on the page; true on the first one only
    pub fn first_interaction(&mut self) -> bool {
        self.audio.unlock_on_first_interaction()
    }

    pub(crate) fn burst(&self, burst: &Burst) {
        self.burst.burst(burst);
    }

    /// Show the next quote from the deck; an empty deck shows nothing
    pub fn show_next_quote(&mut self, now_ms: f64) {
        if let Some(text) = self.deck.next(&mut self.rng) {
            self.banner.show_next(text, now_ms);
        }
    }

    /// Show the "tap to enable audio" hint when this variant has one
    pub fn show_autoplay_hint(&mut self, now_ms: f64) {
        if let Some(hint) = &self.autoplay_hint {
            self.banner.show_for(hint, now_ms, self.hint_duration_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioError, PlayCallback, SilentTrack};
    use crate::effects::Origin;
    use crate::renderer::FrameBatch;
    use crate::settings::Variant;
    use crate::sim::{BalloonColor, Sphere};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingBurst {
        bursts: Rc<RefCell<Vec<Burst>>>,
    }

    impl BurstEffect for RecordingBurst {
        fn burst(&self, burst: &Burst) {
            self.bursts.borrow_mut().push(*burst);
        }
    }

    #[derive(Clone, Default)]
    struct CountingTrack {
        plays: Rc<Cell<u32>>,
        fail: bool,
    }

    impl MediaTrack for CountingTrack {
        fn set_volume(&self, _volume: f32) {}
        fn set_looping(&self, _looping: bool) {}
        fn rewind(&self) {}
        fn play(&self, done: PlayCallback) {
            self.plays.set(self.plays.get() + 1);
            if self.fail {
                done(Err(AudioError::Rejected("blocked".into())));
            } else {
                done(Ok(()));
            }
        }
    }

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    fn settings_with(quotes: &[&str]) -> Settings {
        let mut s = Settings::default();
        s.quotes = Some(quotes.iter().map(|q| q.to_string()).collect());
        s
    }

    fn scene_with_sphere(
        pop: CountingTrack,
        burst: RecordingBurst,
    ) -> Scene<CountingTrack, RecordingBurst> {
        let settings = settings_with(&["Be strong", "Take heart"]);
        let audio = AudioGate::new(CountingTrack::default(), pop, 0.1, 0.1);
        let mut scene = Scene::new(&settings, VIEWPORT, audio, burst, 7);
        scene
            .field
            .insert(Sphere {
                id: SphereId(0),
                pos: Vec2::new(100.0, 100.0),
                radius: 30.0,
                rise_speed: 1.0,
                color: BalloonColor::Pink,
            })
            .unwrap();
        scene
    }

    #[test]
    fn test_hit_pops_sphere_with_side_effects() {
        let pop = CountingTrack::default();
        let burst = RecordingBurst::default();
        let mut scene = scene_with_sphere(pop.clone(), burst.clone());

        let outcome = scene.handle_pointer(PointerInput::click(110.0, 105.0), Vec2::ZERO, 0.0);
        assert!(outcome.popped);
        assert!(scene.field.is_empty());
        assert_eq!(pop.plays.get(), 1);
        assert_eq!(
            *burst.bursts.borrow(),
            vec![Burst {
                particle_count: 100,
                spread: 70.0,
                origin: Origin {
                    x: 110.0 / 800.0,
                    y: 105.0 / 600.0
                },
            }]
        );
        assert!(scene.banner.is_visible());
        let text = scene.banner.text().unwrap();
        assert!(text == "Be strong" || text == "Take heart");
        assert_eq!(scene.pops(), 1);
    }

    #[test]
    fn test_miss_changes_nothing() {
        let pop = CountingTrack::default();
        let burst = RecordingBurst::default();
        let mut scene = scene_with_sphere(pop.clone(), burst.clone());
        let before = scene.field.spheres().to_vec();

        let outcome = scene.handle_pointer(PointerInput::click(500.0, 500.0), Vec2::ZERO, 0.0);
        assert!(!outcome.popped);
        assert_eq!(scene.field.spheres(), &before[..]);
        assert_eq!(pop.plays.get(), 0);
        assert!(burst.bursts.borrow().is_empty());
        assert!(!scene.banner.is_visible());
    }

    #[test]
    fn test_surface_offset_applied() {
        let mut scene = scene_with_sphere(CountingTrack::default(), RecordingBurst::default());
        // Client point lands on the sphere only after subtracting the offset
        let outcome = scene.handle_pointer(
            PointerInput::click(110.0, 140.0),
            Vec2::new(10.0, 40.0),
            0.0,
        );
        assert!(outcome.popped);
    }

    #[test]
    fn test_touch_pop_suppresses_default() {
        let mut scene = scene_with_sphere(CountingTrack::default(), RecordingBurst::default());
        let miss = scene.handle_pointer(PointerInput::touch(700.0, 10.0), Vec2::ZERO, 0.0);
        assert!(!miss.suppress_default);
        let hit = scene.handle_pointer(PointerInput::touch(100.0, 100.0), Vec2::ZERO, 0.0);
        assert!(hit.popped);
        assert!(hit.suppress_default);
    }

    #[test]
    fn test_one_pop_per_input() {
        let burst = RecordingBurst::default();
        let mut scene = scene_with_sphere(CountingTrack::default(), burst.clone());
        scene
            .field
            .insert(Sphere {
                id: SphereId(0),
                pos: Vec2::new(105.0, 100.0),
                radius: 30.0,
                rise_speed: 1.0,
                color: BalloonColor::Cyan,
            })
            .unwrap();

        scene.handle_pointer(PointerInput::click(102.0, 100.0), Vec2::ZERO, 0.0);
        assert_eq!(scene.field.len(), 1);
        // The older one is left
        assert_eq!(scene.field.spheres()[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(burst.bursts.borrow().len(), 1);
    }

    #[test]
    fn test_failed_pop_sound_does_not_block_effects() {
        let pop = CountingTrack {
            fail: true,
            ..Default::default()
        };
        let burst = RecordingBurst::default();
        let mut scene = scene_with_sphere(pop, burst.clone());
        let outcome = scene.handle_pointer(PointerInput::click(100.0, 100.0), Vec2::ZERO, 0.0);
        assert!(outcome.popped);
        assert_eq!(burst.bursts.borrow().len(), 1);
        assert!(scene.banner.is_visible());
    }

    #[test]
    fn test_quote_hides_after_duration() {
        let mut scene = scene_with_sphere(CountingTrack::default(), RecordingBurst::default());
        scene.handle_pointer(PointerInput::click(100.0, 100.0), Vec2::ZERO, 1_000.0);
        let mut batch = FrameBatch::new();
        scene.frame(&mut batch, 7_999.0);
        assert!(scene.banner.is_visible());
        scene.frame(&mut batch, 8_000.0);
        assert!(!scene.banner.is_visible());
    }

    #[test]
    fn test_earlier_pop_hides_later_quote_early() {
        let mut scene = scene_with_sphere(CountingTrack::default(), RecordingBurst::default());
        scene
            .field
            .insert(Sphere {
                id: SphereId(0),
                pos: Vec2::new(400.0, 300.0),
                radius: 30.0,
                rise_speed: 1.0,
                color: BalloonColor::Yellow,
            })
            .unwrap();
        let mut batch = FrameBatch::new();

        assert!(scene.handle_pointer(PointerInput::click(100.0, 100.0), Vec2::ZERO, 0.0).popped);
        assert!(scene.handle_pointer(PointerInput::click(400.0, 300.0), Vec2::ZERO, 5_000.0).popped);
        scene.frame(&mut batch, 6_999.0);
        assert!(scene.banner.is_visible());
        // First pop's deadline is still pending and hides the second quote
        scene.frame(&mut batch, 7_000.0);
        assert!(!scene.banner.is_visible());
    }

    #[test]
    fn test_pop_after_expired_deadline_keeps_full_duration() {
        let mut scene = scene_with_sphere(CountingTrack::default(), RecordingBurst::default());
        let mut batch = FrameBatch::new();

        assert!(scene.handle_pointer(PointerInput::click(100.0, 100.0), Vec2::ZERO, 0.0).popped);
        scene.frame(&mut batch, 6_999.0);
        scene
            .field
            .insert(Sphere {
                id: SphereId(0),
                pos: Vec2::new(400.0, 300.0),
                radius: 30.0,
                rise_speed: 0.0,
                color: BalloonColor::Blue,
            })
            .unwrap();

        // The first quote's deadline passed with no frame in between
        assert!(scene.handle_pointer(PointerInput::click(400.0, 300.0), Vec2::ZERO, 7_005.0).popped);
        scene.frame(&mut batch, 7_010.0);
        assert!(scene.banner.is_visible());
        scene.frame(&mut batch, 14_004.0);
        assert!(scene.banner.is_visible());
        scene.frame(&mut batch, 14_005.0);
        assert!(!scene.banner.is_visible());
    }

    #[test]
    fn test_spawn_tick_respects_cap() {
        let settings = Settings::default();
        let audio = AudioGate::new(SilentTrack, SilentTrack, 0.1, 0.1);
        let mut scene = Scene::new(&settings, VIEWPORT, audio, RecordingBurst::default(), 1);
        for _ in 0..25 {
            scene.spawn_tick();
        }
        assert_eq!(scene.field.len(), crate::consts::MAX_SPHERES);
    }

    #[test]
    fn test_frame_draws_and_advances() {
        let mut scene = scene_with_sphere(CountingTrack::default(), RecordingBurst::default());
        let mut batch = FrameBatch::new();
        scene.frame(&mut batch, 0.0);
        assert!(!batch.is_empty());
        assert_eq!(scene.field.spheres()[0].pos.y, 99.0);

        // A second frame replaces rather than accumulates
        let first = batch.vertices().len();
        scene.frame(&mut batch, 16.0);
        assert_eq!(batch.vertices().len(), first);
        assert_eq!(scene.frame_count(), 2);
    }

    #[test]
    fn test_first_interaction_latches() {
        let ambient = CountingTrack::default();
        let audio = AudioGate::new(ambient.clone(), CountingTrack::default(), 0.1, 0.1);
        let mut scene = Scene::new(&Settings::default(), VIEWPORT, audio, RecordingBurst::default(), 3);
        assert!(scene.first_interaction());
        assert!(!scene.first_interaction());
        assert_eq!(ambient.plays.get(), 1);
    }

    #[test]
    fn test_autoplay_hint_per_variant() {
        let audio = AudioGate::new(SilentTrack, SilentTrack, 0.1, 0.1);
        let mut en = Scene::new(&Settings::default(), VIEWPORT, audio, RecordingBurst::default(), 3);
        en.show_autoplay_hint(0.0);
        assert!(en.banner.is_visible());
        en.banner.poll(3_000.0);
        assert!(!en.banner.is_visible());

        let audio = AudioGate::new(SilentTrack, SilentTrack, 0.1, 0.1);
        let es_settings = Settings::from_preset(Variant::Spanish);
        let mut es = Scene::new(&es_settings, VIEWPORT, audio, RecordingBurst::default(), 3);
        es.show_autoplay_hint(0.0);
        assert!(!es.banner.is_visible());
    }

    #[test]
    fn test_empty_quote_list_still_pops() {
        let mut settings = Settings::default();
        settings.quotes = None;
        let audio = AudioGate::new(SilentTrack, SilentTrack, 0.1, 0.1);
        let mut scene = Scene::new(&settings, VIEWPORT, audio, RecordingBurst::default(), 3);
        scene.deck = QuoteDeck::with_order(Vec::new(), Vec::new()).unwrap();
        scene.spawn_tick();
        let center = scene.field.spheres()[0].pos;
        let outcome = scene.handle_pointer(PointerInput::click(center.x, center.y), Vec2::ZERO, 0.0);
        assert!(outcome.popped);
        assert!(!scene.banner.is_visible());
    }
}
