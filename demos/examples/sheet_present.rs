// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Showing and hiding a sheet from outside.
//!
//! A toy renderer subscribes to the sheet, "animates" every transition it is
//! handed, and reports completion. Hiding keeps the sheet mounted until the
//! exit transition finished, then `on_dismiss` fires once. A host without
//! completion hooks relies on the unmount deadline instead.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_sheet_demos --example sheet_present`

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use kurbo::Size;
use understory_detent::{Detent, DetentSet, Geometry};
use understory_sheet::{Changes, Phase, Sheet, SheetConfig, Transition};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn build(config: SheetConfig) -> Sheet {
    let geometry = Geometry::from_size(Size::new(390.0, 844.0));
    let detents = DetentSet::from([Detent::Fraction(0.25), Detent::Large]);
    Sheet::new(detents, Detent::NotPresented, geometry, config).expect("valid sheet")
}

fn main() {
    let _ = env_logger::try_init();

    // With completion hooks: the renderer queues transitions and reports them.
    let mut sheet = build(SheetConfig::default().with_scrim(true));
    let queued: Rc<RefCell<Vec<Transition>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = queued.clone();
    sheet.subscribe(move |state, change| {
        println!(
            "  {:?} phase={:?} translation={}",
            change.changes,
            state.phase(),
            state.translation()
        );
        if let Some(t) = change.transition {
            sink.borrow_mut().push(t);
        }
    });
    let dismissals = Rc::new(Cell::new(0));
    let counter = dismissals.clone();
    sheet.on_dismiss(move || counter.set(counter.get() + 1));

    println!("== Show ==");
    sheet.set_selected_detent(Detent::Fraction(0.25), ms(0));
    assert_eq!(sheet.state().phase(), Phase::Mounted);
    assert_eq!(sheet.state().translation(), 211.0);
    assert_eq!(sheet.scrim_opacity(), 0.125);
    for t in queued.take() {
        assert!(sheet.transition_finished(t.id));
    }

    println!("== Hide ==");
    sheet.set_selected_detent(Detent::NotPresented, ms(1_000));
    assert_eq!(sheet.state().phase(), Phase::Exiting);
    assert!(sheet.state().is_presented(), "still rendered while exiting");
    for t in queued.take() {
        assert_eq!((t.from, t.to), (211.0, 0.0));
        sheet.transition_finished(t.id);
    }
    assert_eq!(sheet.state().phase(), Phase::NotMounted);
    assert_eq!(dismissals.get(), 1);

    // Without completion hooks: the deadline unmounts, unless superseded.
    println!("== Deadline ==");
    let mut sheet = build(SheetConfig::default().with_completion_hooks(false));
    let dismissed = Rc::new(Cell::new(false));
    let flag = dismissed.clone();
    sheet.subscribe(move |_, change| {
        if change.changes.contains(Changes::DISMISSED) {
            flag.set(true);
        }
    });
    sheet.set_selected_detent(Detent::Large, ms(0));
    sheet.set_selected_detent(Detent::NotPresented, ms(100));
    // Changed our mind before the 500ms deadline.
    sheet.set_selected_detent(Detent::Large, ms(300));
    sheet.tick(ms(700));
    assert!(!dismissed.get());
    assert!(sheet.state().is_presented());

    sheet.set_selected_detent(Detent::NotPresented, ms(1_000));
    sheet.tick(ms(1_499));
    assert!(sheet.state().is_presented());
    sheet.tick(ms(1_500));
    assert!(dismissed.get());
    println!("  unmounted at 1500ms");
}
