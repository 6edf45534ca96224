//! Live collection of spheres

use glam::Vec2;
use rand::Rng;

use super::sphere::{Sphere, SphereId, Viewport};
use crate::consts::MAX_SPHERES;
use crate::renderer::DrawSurface;

/// Spheres in insertion order (oldest first, drawn first)
#[derive(Debug, Clone)]
pub struct SphereField {
    spheres: Vec<Sphere>,
    capacity: usize,
    next_id: u32,
}

impl Default for SphereField {
    fn default() -> Self {
        Self::new()
    }
}

impl SphereField {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SPHERES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            spheres: Vec::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.spheres.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn get(&self, id: SphereId) -> Option<&Sphere> {
        self.spheres.iter().find(|s| s.id == id)
    }

    /// Allocate a new sphere id
    fn next_sphere_id(&mut self) -> SphereId {
        let id = SphereId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Admit one freshly spawned sphere unless the field is full
    pub fn try_spawn<R: Rng + ?Sized>(&mut self, viewport: &Viewport, rng: &mut R) -> Option<SphereId> {
        if self.is_full() {
            return None;
        }
        let id = self.next_sphere_id();
        self.spheres.push(Sphere::spawn(id, viewport, rng));
        Some(id)
    }

    /// Insert an existing sphere (reassigned a fresh id) unless the field is full
    pub fn insert(&mut self, mut sphere: Sphere) -> Option<SphereId> {
        if self.is_full() {
            return None;
        }
        let id = self.next_sphere_id();
        sphere.id = id;
        self.spheres.push(sphere);
        Some(id)
    }

    /// Render each sphere at its current position, then advance it
    pub fn tick<S, R>(&mut self, surface: &mut S, viewport: &Viewport, rng: &mut R)
    where
        S: DrawSurface + ?Sized,
        R: Rng + ?Sized,
    {
        for sphere in &mut self.spheres {
            sphere.render(surface);
            sphere.advance(viewport, rng);
        }
    }

    /// Topmost (most recently added) sphere strictly containing `point`
    pub fn hit_test(&self, point: Vec2) -> Option<SphereId> {
        self.spheres
            .iter()
            .rev()
            .find(|s| s.contains(point))
            .map(|s| s.id)
    }

    /// Remove a sphere; absent ids are ignored
    pub fn remove(&mut self, id: SphereId) -> Option<Sphere> {
        let index = self.spheres.iter().position(|s| s.id == id)?;
        Some(self.spheres.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameBatch;
    use crate::sim::sphere::BalloonColor;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    fn sphere(x: f32, y: f32, radius: f32) -> Sphere {
        Sphere {
            id: SphereId(0),
            pos: Vec2::new(x, y),
            radius,
            rise_speed: 1.0,
            color: BalloonColor::Blue,
        }
    }

    #[test]
    fn test_cap_enforced() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = SphereField::new();
        for _ in 0..MAX_SPHERES {
            assert!(field.try_spawn(&VIEWPORT, &mut rng).is_some());
        }
        assert!(field.is_full());
        assert!(field.try_spawn(&VIEWPORT, &mut rng).is_none());
        assert!(field.insert(sphere(1.0, 1.0, 20.0)).is_none());
        assert_eq!(field.len(), MAX_SPHERES);
    }

    #[test]
    fn test_ids_unique() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = SphereField::new();
        let a = field.try_spawn(&VIEWPORT, &mut rng).unwrap();
        let b = field.try_spawn(&VIEWPORT, &mut rng).unwrap();
        assert_ne!(a, b);
        field.remove(a);
        let c = field.try_spawn(&VIEWPORT, &mut rng).unwrap();
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_hit_test_prefers_newest() {
        let mut field = SphereField::new();
        let older = field.insert(sphere(100.0, 100.0, 40.0)).unwrap();
        let newer = field.insert(sphere(120.0, 100.0, 40.0)).unwrap();

        // Overlap region: newest wins
        assert_eq!(field.hit_test(Vec2::new(110.0, 100.0)), Some(newer));
        // Only the older one covers this point
        assert_eq!(field.hit_test(Vec2::new(65.0, 100.0)), Some(older));
        // Nobody
        assert_eq!(field.hit_test(Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_hit_test_boundary_excluded() {
        let mut field = SphereField::new();
        field.insert(sphere(100.0, 100.0, 30.0)).unwrap();
        assert_eq!(field.hit_test(Vec2::new(130.0, 100.0)), None);
        assert!(field.hit_test(Vec2::new(129.9, 100.0)).is_some());
    }

    #[test]
    fn test_hit_test_does_not_mutate() {
        let mut field = SphereField::new();
        field.insert(sphere(100.0, 100.0, 30.0)).unwrap();
        let before = field.spheres().to_vec();
        let _ = field.hit_test(Vec2::new(100.0, 100.0));
        assert_eq!(field.spheres(), &before[..]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut field = SphereField::new();
        let id = field.insert(sphere(100.0, 100.0, 30.0)).unwrap();
        assert!(field.remove(id).is_some());
        assert!(field.remove(id).is_none());
        assert!(field.is_empty());
    }

    #[test]
    fn test_tick_renders_pre_advance_position() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut field = SphereField::new();
        field.insert(sphere(100.0, 300.0, 20.0)).unwrap();
        let mut batch = FrameBatch::new();
        field.tick(&mut batch, &VIEWPORT, &mut rng);

        // The fan center is drawn where the sphere was before it moved
        assert_eq!(batch.vertices()[0].position, [100.0, 300.0]);
        assert_eq!(field.spheres()[0].pos, Vec2::new(100.0, 299.0));
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_cap(seed in any::<u64>(), ops in prop::collection::vec(0u8..3, 0..200)) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field = SphereField::new();
            let mut batch = FrameBatch::new();
            for op in ops {
                match op {
                    0 => { field.try_spawn(&VIEWPORT, &mut rng); }
                    1 => {
                        if let Some(id) = field.spheres().first().map(|s| s.id) {
                            field.remove(id);
                        }
                    }
                    _ => field.tick(&mut batch, &VIEWPORT, &mut rng),
                }
                prop_assert!(field.len() <= MAX_SPHERES);
            }
        }
    }
}
