//! Where the outgoing and incoming slides sit during a transition.

use crate::config::Transition;

/// Placement of a slide relative to its resting position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidePose {
    /// Horizontal shift as a fraction of the canvas width.
    pub offset_x: f32,
    pub scale: f32,
    pub alpha: f32,
}

impl SlidePose {
    pub const REST: SlidePose = SlidePose { offset_x: 0.0, scale: 1.0, alpha: 1.0 };
    pub const HIDDEN: SlidePose = SlidePose { offset_x: 0.0, scale: 1.0, alpha: 0.0 };
}

/// Poses of the (outgoing, incoming) slides at eased progress `t`.
///
/// `direction` is `1.0` when moving forward through the deck and `-1.0` when
/// moving back, so the incoming slide enters from the side it comes from.
pub fn poses(style: Transition, t: f32, direction: f32) -> (SlidePose, SlidePose) {
    let t = t.clamp(0.0, 1.0);
    let leaving = -direction * t;
    let entering = direction * (1.0 - t);

    match style {
        Transition::None => (SlidePose::HIDDEN, SlidePose::REST),
        Transition::Fade => (
            SlidePose { alpha: 1.0 - t, ..SlidePose::REST },
            SlidePose { alpha: t, ..SlidePose::REST },
        ),
        Transition::Slide => (
            SlidePose { offset_x: leaving, ..SlidePose::REST },
            SlidePose { offset_x: entering, ..SlidePose::REST },
        ),
        Transition::Convex => (
            SlidePose { offset_x: leaving, scale: 1.0 - 0.3 * t, alpha: 1.0 },
            SlidePose { offset_x: entering, scale: 1.0 - 0.3 * (1.0 - t), alpha: 1.0 },
        ),
        Transition::Concave => (
            SlidePose { offset_x: leaving, scale: 1.0 + 0.3 * t, alpha: 1.0 },
            SlidePose { offset_x: entering, scale: 1.0 + 0.3 * (1.0 - t), alpha: 1.0 },
        ),
        Transition::Zoom => (
            SlidePose { offset_x: 0.0, scale: 1.0 + t, alpha: 1.0 - t },
            SlidePose { offset_x: 0.0, scale: 1.0 - 0.5 * (1.0 - t), alpha: t },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: [Transition; 6] = [
        Transition::None,
        Transition::Fade,
        Transition::Slide,
        Transition::Convex,
        Transition::Concave,
        Transition::Zoom,
    ];

    #[test]
    fn incoming_slide_rests_when_done() {
        for style in STYLES {
            let (_, incoming) = poses(style, 1.0, 1.0);
            assert_eq!(incoming, SlidePose::REST, "{style}");
        }
    }

    #[test]
    fn outgoing_slide_starts_at_rest() {
        for style in STYLES.into_iter().filter(|s| *s != Transition::None) {
            let (outgoing, _) = poses(style, 0.0, 1.0);
            assert_eq!(outgoing, SlidePose::REST, "{style}");
        }
    }

    #[test]
    fn slide_enters_from_the_travel_side() {
        let (outgoing, incoming) = poses(Transition::Slide, 0.25, 1.0);
        assert_eq!(outgoing.offset_x, -0.25);
        assert_eq!(incoming.offset_x, 0.75);

        let (outgoing, incoming) = poses(Transition::Slide, 0.25, -1.0);
        assert_eq!(outgoing.offset_x, 0.25);
        assert_eq!(incoming.offset_x, -0.75);
    }

    #[test]
    fn zoom_grows_from_half_size() {
        let (outgoing, incoming) = poses(Transition::Zoom, 0.0, 1.0);
        assert_eq!(incoming.scale, 0.5);
        assert_eq!(incoming.alpha, 0.0);
        assert_eq!(outgoing, SlidePose::REST);

        let (_, halfway) = poses(Transition::Zoom, 0.5, 1.0);
        assert_eq!(halfway.scale, 0.75);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(poses(Transition::Fade, 3.0, 1.0), poses(Transition::Fade, 1.0, 1.0));
        assert_eq!(poses(Transition::Fade, -1.0, 1.0), poses(Transition::Fade, 0.0, 1.0));
    }
}
