//! Property-based invariant tests for the inspector.
//!
//! Verifies:
//! 1. opening_tag is a prefix of the markup ending at the first '>'
//! 2. opening_tag is empty exactly when the markup has no '>'
//! 3. Overlay styles echo the hovered rect for any finite geometry
//! 4. Label sits at pointer + (10, 12) for any finite pointer
//! 5. Any toggle sequence leaves Tracking iff the count is odd
//! 6. Listener count never exceeds one under any enable/disable/toggle mix
//! 7. Idle never writes to the document, whatever the pointer does

use mini_inspect_core::{
    ClientRect, HeadlessDom, InspectFrame, Inspector, InspectorConfig, LabelOffset,
    PointerPosition, StyleProp, TrackingState, opening_tag, px,
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-2000i32..4000).prop_map(f64::from),
        (-2000.0f64..4000.0),
    ]
}

fn arb_rect() -> impl Strategy<Value = ClientRect> {
    (arb_coord(), arb_coord(), 0.0f64..3000.0, 0.0f64..3000.0)
        .prop_map(|(l, t, w, h)| ClientRect::new(l, t, w, h))
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Enable,
    Disable,
    Toggle,
    Move(f64, f64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Enable),
        Just(Op::Disable),
        Just(Op::Toggle),
        (arb_coord(), arb_coord()).prop_map(|(x, y)| Op::Move(x, y)),
    ]
}

fn inspector() -> Inspector<HeadlessDom> {
    let mut dom = HeadlessDom::new();
    dom.append_inspector_nodes("inspect", "inspect-overlay");
    let body = dom.append(None, "<body>", ClientRect::new(0.0, 0.0, 1280.0, 720.0));
    dom.append(
        Some(body),
        "<main id=\"m\"><p>hi</p></main>",
        ClientRect::new(100.0, 100.0, 400.0, 300.0),
    );
    Inspector::new(dom, InspectorConfig::default()).expect("nodes")
}

proptest! {
    #[test]
    fn opening_tag_is_prefix_through_first_gt(s in ".{0,64}") {
        let tag = opening_tag(&s);
        prop_assert!(s.starts_with(tag));
        match s.find('>') {
            Some(i) => {
                prop_assert_eq!(tag.len(), i + 1);
                prop_assert!(tag.ends_with('>'));
                prop_assert!(!tag[..tag.len() - 1].contains('>'));
            }
            None => {
                prop_assert_eq!(tag, "");
            }
        }
    }

    #[test]
    fn overlay_echoes_rect(rect in arb_rect(), x in arb_coord(), y in arb_coord()) {
        let frame = InspectFrame::compute(
            rect,
            PointerPosition::new(x, y),
            "<x>",
            LabelOffset::default(),
        );
        let styles = frame.overlay_styles();
        prop_assert_eq!(&styles[0], &(StyleProp::Width, px(rect.width)));
        prop_assert_eq!(&styles[1], &(StyleProp::Height, px(rect.height)));
        prop_assert_eq!(&styles[2], &(StyleProp::Top, px(rect.top)));
        prop_assert_eq!(&styles[3], &(StyleProp::Left, px(rect.left)));
        prop_assert_eq!(&styles[4], &(StyleProp::Display, "block".to_string()));
    }

    #[test]
    fn label_follows_pointer(x in arb_coord(), y in arb_coord()) {
        let frame = InspectFrame::compute(
            ClientRect::default(),
            PointerPosition::new(x, y),
            "<x>",
            LabelOffset::default(),
        );
        prop_assert_eq!(frame.label_at, PointerPosition::new(x + 10.0, y + 12.0));
    }

    #[test]
    fn toggle_parity(n in 0usize..32) {
        let mut insp = inspector();
        for _ in 0..n {
            insp.toggle().expect("toggle");
        }
        let expected = if n % 2 == 1 { TrackingState::Tracking } else { TrackingState::Idle };
        prop_assert_eq!(insp.state(), expected);
        prop_assert_eq!(insp.host().listener_count(), n % 2);
    }

    #[test]
    fn at_most_one_listener(ops in proptest::collection::vec(arb_op(), 0..48)) {
        let mut insp = inspector();
        for op in ops {
            match op {
                Op::Enable => insp.enable().expect("enable"),
                Op::Disable => insp.disable(),
                Op::Toggle => insp.toggle().expect("toggle"),
                Op::Move(x, y) => {
                    let pos = PointerPosition::new(x, y);
                    insp.host_mut().hover_at(pos);
                    insp.pointer_moved(pos);
                }
            }
            prop_assert!(insp.host().listener_count() <= 1);
            prop_assert_eq!(insp.host().listener_count() == 1, insp.is_tracking());
        }
    }

    #[test]
    fn idle_never_writes(moves in proptest::collection::vec((arb_coord(), arb_coord()), 0..32)) {
        let mut insp = inspector();
        for (x, y) in moves {
            let pos = PointerPosition::new(x, y);
            insp.host_mut().hover_at(pos);
            insp.pointer_moved(pos);
        }
        prop_assert_eq!(insp.host().write_count(), 0);
        prop_assert!(insp.last_frame().is_none());
    }
}
