//! The reel animator: shuffle, pick a stopping offset, animate, then work out
//! which image settled nearest the middle of the reel.
//!
//! Everything here is independent of the browser. Page access goes through the
//! [`ReelSurface`] trait, implemented for the live DOM in [`crate::dom`].

use crate::config::{ReelConfig, CENTER_LABEL_PREFIX, CENTER_UNDETERMINED};
use crate::error::ReelError;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// What the animator needs from the page.
pub trait ReelSurface {
    /// Number of display elements in the container.
    fn item_count(&self) -> usize;

    /// Rewrite the container's child order. `order[slot]` is the current
    /// index of the element that must end up at `slot`.
    fn reorder(&mut self, order: &[usize]) -> Result<(), ReelError>;

    /// Start the transition that moves the reel to `offset_px`.
    fn translate(&mut self, offset_px: f64, transition: &str) -> Result<(), ReelError>;

    /// Rendered width of the reel, read when the center is resolved.
    fn reel_width(&self) -> f64;

    /// Label of the `index`-th labeled image in the reel, if there is one.
    fn label_at(&self, index: usize) -> Option<String>;
}

/// Offset the reel was sent to. One per spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelState {
    pub offset_px: f64,
}

/// Result of resolving the centered image.
#[derive(Debug, Clone, PartialEq)]
pub enum CenterOutcome {
    Found { index: usize, label: String },
    Undetermined { index: usize },
}

impl CenterOutcome {
    pub fn index(&self) -> usize {
        match self {
            CenterOutcome::Found { index, .. } | CenterOutcome::Undetermined { index } => *index,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            CenterOutcome::Found { label, .. } => Some(label),
            CenterOutcome::Undetermined { .. } => None,
        }
    }
}

impl fmt::Display for CenterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CenterOutcome::Found { label, .. } => write!(f, "{} {}", CENTER_LABEL_PREFIX, label),
            CenterOutcome::Undetermined { .. } => f.write_str(CENTER_UNDETERMINED),
        }
    }
}

/// Random permutation of `0..len` (Fisher-Yates).
pub fn shuffle_order<R: Rng>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

/// Stopping offset in `[base - span, base]`.
pub fn pick_offset<R: Rng>(config: &ReelConfig, rng: &mut R) -> f64 {
    let u: f64 = rng.random();
    config.offset_base_px - u * config.offset_span_px
}

/// Index of the item whose slot is nearest the reel's horizontal middle.
#[inline]
pub fn center_index(offset_px: f64, reel_width: f64, item_step_px: f64) -> usize {
    let center = reel_width / 2.0;
    // `as` saturates, so a NaN width lands on 0 and an infinite one on usize::MAX
    ((offset_px - center).abs() / item_step_px).round() as usize
}

/// Shuffle the container, choose an offset and start the reel moving.
pub fn spin<S, R>(surface: &mut S, config: &ReelConfig, rng: &mut R) -> Result<ReelState, ReelError>
where
    S: ReelSurface + ?Sized,
    R: Rng,
{
    let order = shuffle_order(surface.item_count(), rng);
    debug!("Shuffled {} display elements: {:?}", order.len(), order);
    surface.reorder(&order)?;

    let offset_px = pick_offset(config, rng);
    debug!("Reel target offset: {:.2}px", offset_px);
    surface.translate(offset_px, &config.transition())?;

    Ok(ReelState { offset_px })
}

/// Find the centered image once the reel has settled. Never fails; a missing
/// image yields [`CenterOutcome::Undetermined`].
pub fn resolve_center<S>(surface: &S, state: &ReelState, config: &ReelConfig) -> CenterOutcome
where
    S: ReelSurface + ?Sized,
{
    let width = surface.reel_width();
    let index = center_index(state.offset_px, width, config.item_step_px());
    info!(
        "Resolving center: offset {:.2}px, reel width {}px, index {}",
        state.offset_px, width, index
    );
    match surface.label_at(index) {
        Some(label) => CenterOutcome::Found { index, label },
        None => CenterOutcome::Undetermined { index },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// In-memory reel: container children are plain labels.
    struct FakeReel {
        labels: Vec<String>,
        width: f64,
        transform: Option<(f64, String)>,
    }

    impl FakeReel {
        fn with_items(n: usize, width: f64) -> Self {
            Self {
                labels: (1..=n).map(|i| format!("item-{}", i)).collect(),
                width,
                transform: None,
            }
        }
    }

    impl ReelSurface for FakeReel {
        fn item_count(&self) -> usize {
            self.labels.len()
        }

        fn reorder(&mut self, order: &[usize]) -> Result<(), ReelError> {
            self.labels = order.iter().map(|&i| self.labels[i].clone()).collect();
            Ok(())
        }

        fn translate(&mut self, offset_px: f64, transition: &str) -> Result<(), ReelError> {
            self.transform = Some((offset_px, transition.to_string()));
            Ok(())
        }

        fn reel_width(&self) -> f64 {
            self.width
        }

        fn label_at(&self, index: usize) -> Option<String> {
            self.labels.get(index).cloned()
        }
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn shuffle_is_a_permutation() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut order = shuffle_order(17, &mut rng);
            order.sort_unstable();
            assert_eq!(order, (0..17).collect::<Vec<_>>());
        }
        assert!(shuffle_order(0, &mut StdRng::seed_from_u64(1)).is_empty());
    }

    #[test]
    fn offset_stays_in_range() {
        let config = ReelConfig::default();
        let (low, high) = config.offset_range();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let offset = pick_offset(&config, &mut rng);
            assert!((low..=high).contains(&offset), "offset {} out of range", offset);
        }
    }

    #[test]
    fn center_index_reference_values() {
        assert_eq!(center_index(-8000.0, 1000.0, 176.0), 48);
        assert_eq!(center_index(-8140.0, 1000.0, 176.0), 49);
        assert_eq!(center_index(0.0, 0.0, 176.0), 0);
    }

    #[test]
    fn missing_image_reports_fallback_text() {
        let config = ReelConfig::default();
        let reel = FakeReel::with_items(5, 1000.0);
        let outcome = resolve_center(&reel, &ReelState { offset_px: -8000.0 }, &config);
        assert_eq!(outcome, CenterOutcome::Undetermined { index: 48 });
        assert_eq!(outcome.to_string(), CENTER_UNDETERMINED);
        assert_eq!(outcome.label(), None);
    }

    #[test]
    fn found_image_reports_its_label() {
        let config = ReelConfig::default();
        let reel = FakeReel::with_items(60, 1000.0);
        let outcome = resolve_center(&reel, &ReelState { offset_px: -8000.0 }, &config);
        assert_eq!(outcome.index(), 48);
        assert_eq!(outcome.label(), Some("item-49"));
        assert_eq!(outcome.to_string(), format!("{} item-49", CENTER_LABEL_PREFIX));
    }

    #[test]
    fn spin_keeps_items_and_moves_reel_into_range() {
        let config = ReelConfig::default();
        let (low, high) = config.offset_range();
        let mut reel = FakeReel::with_items(5, 1000.0);
        let before = sorted(reel.labels.clone());
        let mut rng = StdRng::seed_from_u64(42);

        let state = spin(&mut reel, &config, &mut rng).unwrap();

        assert_eq!(reel.labels.len(), 5);
        assert_eq!(sorted(reel.labels.clone()), before);
        let (offset, transition) = reel.transform.clone().unwrap();
        assert_eq!(offset, state.offset_px);
        assert!((low..=high).contains(&offset));
        assert_eq!(transition, "transform 1000ms ease-out");

        // Five items can never reach index 45 or beyond.
        let outcome = resolve_center(&reel, &state, &config);
        assert!(matches!(outcome, CenterOutcome::Undetermined { .. }));
    }

    #[test]
    fn reorder_failure_stops_before_animating() {
        struct Stuck(FakeReel);
        impl ReelSurface for Stuck {
            fn item_count(&self) -> usize {
                self.0.item_count()
            }
            fn reorder(&mut self, _: &[usize]) -> Result<(), ReelError> {
                Err(ReelError::ReorderFailed("detached".into()))
            }
            fn translate(&mut self, offset_px: f64, transition: &str) -> Result<(), ReelError> {
                self.0.translate(offset_px, transition)
            }
            fn reel_width(&self) -> f64 {
                self.0.reel_width()
            }
            fn label_at(&self, index: usize) -> Option<String> {
                self.0.label_at(index)
            }
        }

        let mut reel = Stuck(FakeReel::with_items(3, 1000.0));
        let err = spin(&mut reel, &ReelConfig::default(), &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, ReelError::ReorderFailed(_)));
        assert!(reel.0.transform.is_none());
    }
}
