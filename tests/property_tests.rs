//! Property-based tests for gallery navigation invariants.
//!
//! Tests validate:
//! 1. next then previous returns to the same index
//! 2. n presses of next from any index wrap back to it
//! 3. open(i) always shows image i with a matching label
//! 4. swipe classification follows the strict threshold
//! 5. the index stays in range under any key and swipe sequence

use lightbox::gallery::{
    classify_swipe, GalleryController, LightboxKey, RecordingSurface, SwipeDirection,
    SwipeThreshold,
};
use lightbox::model::ImageSequence;
use proptest::prelude::*;

fn controller(len: usize) -> GalleryController<RecordingSurface> {
    let images = ImageSequence::from_pairs((0..len).map(|i| (format!("{i}.jpg"), format!("Image {i}"))));
    GalleryController::new(images, RecordingSurface::new())
}

#[derive(Debug, Clone)]
enum Input {
    Key(LightboxKey),
    Swipe(f64, f64),
    Open(usize),
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Key(LightboxKey::ArrowRight)),
        Just(Input::Key(LightboxKey::ArrowLeft)),
        Just(Input::Key(LightboxKey::Escape)),
        "[a-z]{1,3}".prop_map(|s| Input::Key(LightboxKey::Other(s))),
        (0.0f64..500.0, 0.0f64..500.0).prop_map(|(a, b)| Input::Swipe(a, b)),
        (0usize..64).prop_map(Input::Open),
    ]
}

// ===== Property 1-3: Navigation =====

proptest! {
    #[test]
    fn next_then_previous_is_identity(len in 1usize..40, start in 0usize..40) {
        let start = start % len;
        let mut c = controller(len);
        c.open(start);

        c.next();
        c.previous();

        prop_assert_eq!(c.current_index(), start);
    }

    #[test]
    fn next_len_times_wraps_to_start(len in 1usize..40, start in 0usize..40) {
        let start = start % len;
        let mut c = controller(len);
        c.open(start);

        for _ in 0..len {
            c.next();
        }

        prop_assert_eq!(c.current_index(), start);
    }

    #[test]
    fn open_shows_requested_image(len in 1usize..40, index in 0usize..40) {
        let index = index % len;
        let mut c = controller(len);

        c.open(index);

        prop_assert!(c.is_open());
        prop_assert_eq!(c.current_index(), index);
        let expected = format!("Image {} of {}: Image {}", index + 1, len, index);
        prop_assert_eq!(c.surface().last_aria_label(), Some(expected.as_str()));
        let expected_source = format!("{index}.jpg");
        prop_assert_eq!(c.surface().last_image_source(), Some(expected_source.as_str()));
    }
}

// ===== Property 4: Swipe Classification =====

proptest! {
    #[test]
    fn swipe_classification_respects_threshold(
        start in -1000.0f64..1000.0,
        end in -1000.0f64..1000.0,
        threshold in 0.0f64..200.0,
    ) {
        let result = classify_swipe(start, end, SwipeThreshold::new(threshold));
        let travel = start - end;

        if travel > threshold {
            prop_assert_eq!(result, Some(SwipeDirection::Left));
        } else if -travel > threshold {
            prop_assert_eq!(result, Some(SwipeDirection::Right));
        } else {
            prop_assert_eq!(result, None);
        }
    }
}

// ===== Property 5: Index Stays In Range =====

proptest! {
    #[test]
    fn index_stays_in_range(len in 1usize..20, inputs in prop::collection::vec(input_strategy(), 0..60)) {
        let mut c = controller(len);

        for input in inputs {
            match input {
                Input::Key(key) => {
                    c.handle_key(&key);
                }
                Input::Swipe(start, end) => {
                    c.handle_swipe(start, end);
                }
                Input::Open(index) => c.open(index % len),
            }
            prop_assert!(c.current_index() < len);
        }
    }

    #[test]
    fn closed_lightbox_ignores_keys_and_swipes(
        len in 1usize..20,
        inputs in prop::collection::vec(input_strategy(), 0..30),
    ) {
        let mut c = controller(len);

        for input in inputs {
            match input {
                Input::Key(key) => prop_assert!(!c.handle_key(&key)),
                Input::Swipe(start, end) => prop_assert_eq!(c.handle_swipe(start, end), None),
                Input::Open(_) => {}
            }
        }

        prop_assert!(!c.is_open());
        prop_assert_eq!(c.current_index(), 0);
        prop_assert!(c.surface().calls().is_empty());
    }
}
