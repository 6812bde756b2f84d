//! End-to-end controller scenarios through the public API.
//!
//! These drive a `GalleryController` with a `RecordingSurface` the way a host
//! would: open, navigate, tick the clock, close. Assertions are on the calls
//! the surface receives.

use lightbox::gallery::{
    Direction, GalleryController, GalleryOptions, LightboxKey, RecordingSurface, SlideFrame,
    SurfaceCall, SwipeDirection, SwipeThreshold, TransitionTiming,
};
use lightbox::model::ImageSequence;
use lightbox::source::{build_sequence, GallerySource};
use std::fs;
use std::time::{Duration, Instant};

fn cafe() -> ImageSequence {
    ImageSequence::from_pairs([
        ("espresso.jpg", "Espresso"),
        ("counter.jpg", "Counter"),
        ("latte.jpg", "Latte"),
        ("terrace.jpg", "Terrace"),
    ])
}

fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(10)
}

#[test]
fn open_renders_then_shows_and_locks() {
    let mut gallery = GalleryController::new(cafe(), RecordingSurface::new());

    gallery.open(1);

    let calls = gallery.surface().calls();
    assert_eq!(
        calls[0],
        SurfaceCall::SetImage {
            source: "counter.jpg".to_string(),
            description: "Counter".to_string(),
        }
    );
    assert_eq!(calls[1], SurfaceCall::SetCaption("Counter".to_string()));
    assert_eq!(calls[2], SurfaceCall::SetAriaLabel("Image 2 of 4: Counter".to_string()));
    assert!(calls.contains(&SurfaceCall::Preload(0)));
    assert!(calls.contains(&SurfaceCall::Preload(2)));

    assert_eq!(
        &calls[calls.len() - 3..],
        &[
            SurfaceCall::Slide(SlideFrame::REST),
            SurfaceCall::Show,
            SurfaceCall::LockScroll,
        ]
    );
}

#[test]
fn full_tour_with_keys_and_clock() {
    let mut gallery = GalleryController::new(cafe(), RecordingSurface::new());
    gallery.open(3);
    gallery.surface_mut().clear();

    // Forward past the end wraps to the first image.
    assert!(gallery.handle_key(&LightboxKey::ArrowRight));
    assert_eq!(gallery.current_index(), 0);
    assert_eq!(gallery.surface().last_aria_label(), Some("Image 1 of 4: Espresso"));
    assert_eq!(gallery.surface().slides(), vec![SlideFrame::slide_out(Direction::Forward)]);

    assert_eq!(gallery.tick(far_future()), 2);
    assert_eq!(
        gallery.surface().slides(),
        vec![
            SlideFrame::slide_out(Direction::Forward),
            SlideFrame::reset(Direction::Forward),
            SlideFrame::settle(),
        ]
    );

    // Escape closes; further ticks do nothing.
    assert!(gallery.handle_key(&LightboxKey::Escape));
    assert!(!gallery.is_open());
    assert_eq!(gallery.tick(far_future()), 0);
    let calls = gallery.surface().calls();
    assert_eq!(&calls[calls.len() - 2..], &[SurfaceCall::Hide, SurfaceCall::UnlockScroll]);
}

#[test]
fn deferred_phases_respect_configured_timing() {
    let options = GalleryOptions {
        timing: TransitionTiming {
            reset_after: Duration::from_millis(100),
            settle_after: Duration::from_millis(20),
            slide_duration: Duration::from_millis(100),
        },
        ..GalleryOptions::default()
    };
    let mut gallery = GalleryController::with_options(cafe(), RecordingSurface::new(), options);
    gallery.open(0);

    let before = Instant::now();
    gallery.previous();
    let deadline = gallery.next_deadline().expect("reset phase queued");

    assert!(deadline >= before + Duration::from_millis(100));
    assert!(deadline <= Instant::now() + Duration::from_millis(100));
    assert_eq!(gallery.tick(before), 0);
    assert_eq!(gallery.tick(deadline), 1);
    assert_eq!(gallery.surface().slides().last(), Some(&SlideFrame::reset(Direction::Backward)));
    assert!(gallery.is_animating());
}

#[test]
fn swipe_uses_configured_threshold() {
    let options = GalleryOptions {
        swipe_threshold: SwipeThreshold::new(120.0),
        ..GalleryOptions::default()
    };
    let mut gallery = GalleryController::with_options(cafe(), RecordingSurface::new(), options);
    gallery.open(0);

    assert_eq!(gallery.handle_swipe(300.0, 200.0), None);
    assert_eq!(gallery.handle_swipe(300.0, 180.0), None);
    assert_eq!(gallery.handle_swipe(300.0, 179.0), Some(SwipeDirection::Left));
    assert_eq!(gallery.current_index(), 1);
    assert_eq!(gallery.handle_swipe(0.0, 121.0), Some(SwipeDirection::Right));
    assert_eq!(gallery.current_index(), 0);
}

#[test]
fn reopen_after_close_keeps_no_stale_animation() {
    let mut gallery = GalleryController::new(cafe(), RecordingSurface::new());
    gallery.open(0);
    gallery.next();
    gallery.close();
    gallery.open(2);
    gallery.surface_mut().clear();

    assert_eq!(gallery.tick(far_future()), 0);
    assert!(gallery.surface().slides().is_empty());
    assert_eq!(gallery.current_index(), 2);
}

#[test]
fn gallery_loaded_from_manifest_drives_controller() {
    let dir = std::env::temp_dir().join(format!("lightbox_scenario_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let manifest = dir.join("gallery.toml");
    fs::write(
        &manifest,
        r#"
[[image]]
src = "https://example.com/a.jpg"
alt = "First"

[[image]]
src = "https://example.com/b.jpg"
alt = "Second"
category = "outdoor"
"#,
    )
    .unwrap();

    let sequence = GallerySource::Manifest(manifest).load().unwrap();
    let mut gallery = GalleryController::new(sequence, RecordingSurface::new());
    gallery.open(1);
    gallery.next();

    assert_eq!(gallery.surface().last_image_source(), Some("https://example.com/a.jpg"));
    assert_eq!(gallery.aria_label().as_deref(), Some("Image 1 of 2: First"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_manifest_builds_unopenable_gallery() {
    let gallery = GalleryController::new(build_sequence(Vec::new()), RecordingSurface::new());

    assert!(!gallery.is_open());
    assert_eq!(gallery.aria_label(), None);
    assert_eq!(gallery.adjacent_indices(), None);
}
