use glam::DVec2;

/// Pixels added or removed per wheel notch.
const RESIZE_STEP: f64 = 10.0;
/// Window size bounds in pixels.
const MIN_SIZE: f64 = 200.0;
const MAX_SIZE: f64 = 1100.0;

/// Resize the pet window by one wheel notch, clamped to the size bounds.
pub fn wheel_resize(size: DVec2, grow: bool) -> DVec2 {
    let step = if grow { RESIZE_STEP } else { -RESIZE_STEP };
    (size + DVec2::splat(step)).clamp(DVec2::splat(MIN_SIZE), DVec2::splat(MAX_SIZE))
}

/// Teleport the window by a random offset of up to one window size per
/// axis, kept fully on screen. Locked-mode reaction to being clicked.
pub fn random_jump(pos: DVec2, window: DVec2, screen: DVec2, rng: &mut fastrand::Rng) -> DVec2 {
    let offset = DVec2::new(
        (rng.f64() * 2.0 - 1.0) * window.x,
        (rng.f64() * 2.0 - 1.0) * window.y,
    );
    (pos + offset).clamp(DVec2::ZERO, (screen - window).max(DVec2::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_resize_steps_and_clamps() {
        let size = DVec2::new(400.0, 400.0);
        assert_eq!(wheel_resize(size, true), DVec2::new(410.0, 410.0));
        assert_eq!(wheel_resize(size, false), DVec2::new(390.0, 390.0));

        assert_eq!(wheel_resize(DVec2::splat(1095.0), true), DVec2::splat(1100.0));
        assert_eq!(wheel_resize(DVec2::splat(205.0), false), DVec2::splat(200.0));
    }

    #[test]
    fn random_jump_stays_on_screen() {
        let mut rng = fastrand::Rng::with_seed(11);
        let window = DVec2::new(400.0, 400.0);
        let screen = DVec2::new(1920.0, 1080.0);
        let mut pos = DVec2::new(700.0, 300.0);

        for _ in 0..100 {
            pos = random_jump(pos, window, screen, &mut rng);
            assert!(pos.x >= 0.0 && pos.x <= screen.x - window.x);
            assert!(pos.y >= 0.0 && pos.y <= screen.y - window.y);
        }
    }

    #[test]
    fn random_jump_window_larger_than_screen() {
        let mut rng = fastrand::Rng::with_seed(11);
        let pos = random_jump(
            DVec2::new(50.0, 50.0),
            DVec2::new(2000.0, 2000.0),
            DVec2::new(1920.0, 1080.0),
            &mut rng,
        );
        assert_eq!(pos, DVec2::ZERO);
    }
}
