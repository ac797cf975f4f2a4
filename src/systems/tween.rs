//! Tween animation systems.
//!
//! [`tween_scale_system`] animates [`Scale`](crate::components::scale::Scale)
//! from [`TweenScale`] components; the HUD uses it for the checklist pulse.
//! [`ease`] is shared with the tip fades in
//! [`HintPresenter`](crate::resources::hints::HintPresenter).

use crate::components::scale::Scale;
use crate::components::tween::{Easing, LoopMode, TweenScale};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use glam::Vec3;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadOut => t * (2.0 - t),
    }
}

pub(crate) fn lerp_v3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Advance tween time and handle looping/completion.
pub(crate) fn advance(
    time: &mut f32,
    duration: f32,
    forward: &mut bool,
    playing: &mut bool,
    mode: LoopMode,
    dt: f32,
) {
    let dir = if *forward { 1.0 } else { -1.0 };
    *time += dt * dir;

    let finished_forward = *forward && *time >= duration;
    let finished_backward = !*forward && *time <= 0.0;

    if finished_forward || finished_backward {
        match mode {
            LoopMode::Once => {
                *playing = false;
                *time = time.clamp(0.0, duration);
            }
            LoopMode::Yoyo => {
                if finished_forward {
                    *forward = false;
                    *time = duration;
                } else {
                    *playing = false;
                    *time = 0.0;
                }
            }
        }
    }
}

/// Animate entity scales based on [`TweenScale`] components.
///
/// Finished tweens are removed so a new pulse can be inserted cleanly.
pub fn tween_scale_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Scale, &mut TweenScale)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut s, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration.max(f32::EPSILON);
        let loop_mode = tw.loop_mode;
        let mut t = tw.time;
        let mut forward = tw.forward;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut forward, &mut playing, loop_mode, dt);
        tw.time = t;
        tw.forward = forward;
        tw.playing = playing;
        let k = ease(tw.easing, tw.time / duration);
        s.scale = lerp_v3(tw.from, tw.to, k);
        if !playing {
            commands.entity(entity).remove::<TweenScale>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_ease_all_types_at_endpoints() {
        for e in [Easing::Linear, Easing::QuadOut] {
            assert!(approx_eq(ease(e, 0.0), 0.0), "{e:?} at 0");
            assert!(approx_eq(ease(e, 1.0), 1.0), "{e:?} at 1");
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        assert!(approx_eq(ease(Easing::QuadOut, -0.5), 0.0));
        assert!(approx_eq(ease(Easing::QuadOut, 1.5), 1.0));
    }

    #[test]
    fn test_ease_quad_out() {
        assert!(approx_eq(ease(Easing::QuadOut, 0.5), 0.75));
    }

    #[test]
    fn test_advance_once_stops_at_end() {
        let (mut time, mut forward, mut playing) = (0.0, true, true);
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Once, 1.5);
        assert!(!playing);
        assert!(approx_eq(time, 1.0));
    }

    #[test]
    fn test_advance_yoyo_goes_there_and_back_then_stops() {
        let (mut time, mut forward, mut playing) = (0.0, true, true);
        advance(&mut time, 0.05, &mut forward, &mut playing, LoopMode::Yoyo, 0.06);
        assert!(playing);
        assert!(!forward);
        assert!(approx_eq(time, 0.05));
        advance(&mut time, 0.05, &mut forward, &mut playing, LoopMode::Yoyo, 0.06);
        assert!(!playing);
        assert!(approx_eq(time, 0.0));
    }

    #[test]
    fn test_lerp_v3_midpoint() {
        let v = lerp_v3(Vec3::ONE, Vec3::new(3.0, 3.0, 1.0), 0.5);
        assert_eq!(v, Vec3::new(2.0, 2.0, 1.0));
    }
}
