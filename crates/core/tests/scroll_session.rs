//! Integration test: drive the throttled scroll handler the way the page
//! adapter does, with a hand-cranked frame clock standing in for
//! `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vitrine_core::parallax::Parallax;
use vitrine_core::title_bar::TitleBar;
use vitrine_core::{FrameScheduler, ManualFrames, PageConfig, ResizePass, ScrollFrame, Throttle};
use vitrine_protocol::{Rect, StyleCommand, StyleProperty, StyleTarget, Viewport};

const VIEW_H: f64 = 800.0;
const CARD_H: f64 = 1500.0;

/// Section tops for a page with two stacked 1500px sections at scroll `y`.
fn rects_at(y: f64) -> Vec<Rect> {
    vec![
        Rect::new(0.0, 100.0 - y, 1280.0, CARD_H),
        Rect::new(0.0, 100.0 + CARD_H - y, 1280.0, CARD_H),
    ]
}

#[test]
fn scroll_burst_applies_one_frame_with_latest_position() {
    let config = PageConfig::default();
    let bar = TitleBar::new(100.0, &config.scroll);
    let mut engine = Parallax::new(config.scroll.clone());
    engine.measure(&[Some(CARD_H), Some(CARD_H)], VIEW_H);

    let applied: Rc<RefCell<Vec<Vec<StyleCommand>>>> = Rc::default();
    let sink = Rc::clone(&applied);
    let frames = ManualFrames::new();
    let scheduler: Rc<dyn FrameScheduler> = frames.clone();
    let on_scroll = Throttle::new(scheduler, move |y: f64| {
        let viewport = Viewport::new(VIEW_H, y);
        let frame = ScrollFrame::compute(Some(&bar), &engine, &viewport, &rects_at(y));
        sink.borrow_mut().push(frame.commands());
    });

    for y in [5.0, 60.0, 250.0, 820.0] {
        on_scroll.call(y);
    }
    frames.run_frame();

    let applied = applied.borrow();
    assert_eq!(applied.len(), 1);
    let commands = &applied[0];
    assert_eq!(commands.len(), 5);

    // Bar: min(820 * 0.5, 100 * 0.5) = 50.
    assert_eq!(
        commands[0],
        StyleCommand::SetTransform {
            target: StyleTarget::TitleBar,
            value: "translateY(-50px)".into(),
        }
    );

    // Section 0: top = -720, progress = 730 / 1480, shift_max = 720.
    let StyleCommand::SetProperty {
        property: StyleProperty::Shift,
        value,
        ..
    } = &commands[1]
    else {
        panic!("expected shift for section 0, got {:?}", commands[1]);
    };
    let shift: f64 = value.trim_end_matches("px").parse().unwrap();
    assert!((shift + 730.0 / 1480.0 * 720.0).abs() < 1e-9);

    // Section 1 has not reached the top yet.
    assert_eq!(
        commands[3],
        StyleCommand::SetProperty {
            target: StyleTarget::Section(1),
            property: StyleProperty::Shift,
            value: "0px".into(),
        }
    );
    assert_eq!(
        commands[4],
        StyleCommand::SetProperty {
            target: StyleTarget::Section(1),
            property: StyleProperty::Alpha,
            value: "1".into(),
        }
    );
}

#[test]
fn section_fades_out_at_its_end() {
    let config = PageConfig::default();
    let mut engine = Parallax::new(config.scroll);
    engine.measure(&[Some(CARD_H)], VIEW_H);
    let span = engine.geometry(0).unwrap().scroll_span;

    let viewport = Viewport::new(VIEW_H, 0.0);
    let at = |progress: f64| {
        let top = 10.0 - progress * span;
        engine.update(0, &Rect::new(0.0, top, 1280.0, CARD_H), &viewport)
    };

    assert_eq!(at(0.5).alpha, 1.0);
    assert!((at(0.95).alpha - 0.5).abs() < 1e-9);
    assert_eq!(at(1.0).alpha, 0.0);
    assert_eq!(at(1.0).shift, -engine.geometry(0).unwrap().shift_max);
}

#[test]
fn resize_repaints_and_remeasures_only_when_configured() {
    for recompute in [false, true] {
        let config = vitrine_core::ScrollConfig {
            recompute_on_resize: recompute,
            ..PageConfig::default().scroll
        };
        let engine = Rc::new(RefCell::new(Parallax::new(config.clone())));
        engine.borrow_mut().measure(&[Some(CARD_H)], VIEW_H);

        let painted = Rc::new(Cell::new(0));
        let frames = ManualFrames::new();
        let scheduler: Rc<dyn FrameScheduler> = frames.clone();
        let (fx, count) = (Rc::clone(&engine), Rc::clone(&painted));
        let update = Throttle::new(scheduler, move |view_h: f64| {
            fx.borrow()
                .update_all(&rects_at(0.0)[..1], &Viewport::new(view_h, 0.0));
            count.set(count.get() + 1);
        });

        // The viewport shrinks to 600px.
        if config.resize_pass() == ResizePass::MeasureThenUpdate {
            engine.borrow_mut().measure(&[Some(CARD_H)], 600.0);
        }
        update.call(600.0);
        frames.run_frame();

        assert_eq!(painted.get(), 1, "recompute = {recompute}");
        let shift_max = engine.borrow().geometry(0).unwrap().shift_max;
        assert_eq!(shift_max, if recompute { 920.0 } else { 720.0 });
    }
}
