// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragging a sheet between detents.
//!
//! Feeds two synthetic drags through a sheet: a slow one that snaps to the
//! nearest detent, and a fast flick that jumps past the midpoint. The second
//! half drags below the smallest detent to show the damped bounce.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_sheet_demos --example sheet_drag`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Insets, Size};
use understory_detent::{Detent, DetentSet, Geometry};
use understory_sheet::{DragSample, Sheet, SheetConfig};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn main() {
    let _ = env_logger::try_init();

    // A 390x800 phone screen with a 34pt home indicator inset.
    let geometry = Geometry::new(Size::new(390.0, 800.0), Insets::new(0.0, 0.0, 0.0, 34.0));
    let detents = DetentSet::from([Detent::Bottom, Detent::Medium, Detent::Large]);
    let mut sheet = Sheet::new(detents, Detent::Medium, geometry, SheetConfig::default())
        .expect("valid sheet");

    let trail = Rc::new(RefCell::new(Vec::new()));
    let sink = trail.clone();
    sheet.on_drag(move |translation, detent| sink.borrow_mut().push((translation, detent)));

    println!("== Resting ==\n  {:?}", sheet.state().layout());
    assert_eq!(sheet.state().translation(), 417.0);

    // Slow drag up by 150pt over half a second: 567 is below the 625.5
    // midpoint between Medium and Large.
    sheet.drag_began(ms(0));
    for i in 1..=5 {
        let _ = sheet.drag_moved(DragSample::new(ms(i * 100), -30.0 * i as f64));
    }
    let settled = sheet.drag_ended(None, ms(500));
    println!("== Slow drag ==\n  trail: {:?}\n  settled: {:?}", trail.borrow(), settled);
    assert_eq!(settled, Some(Detent::Medium));
    assert_eq!(sheet.state().translation(), 417.0);

    // The same distance as a 60ms flick: 2.5pt/ms is above the threshold.
    trail.borrow_mut().clear();
    sheet.drag_began(ms(1_000));
    let _ = sheet.drag_moved(DragSample::new(ms(1_030), -80.0));
    let settled = sheet.drag_ended(Some(DragSample::new(ms(1_060), -150.0)), ms(1_060));
    println!("== Flick ==\n  trail: {:?}\n  settled: {:?}", trail.borrow(), settled);
    assert_eq!(settled, Some(Detent::Large));
    assert_eq!(sheet.state().translation(), 834.0);

    // Down to Bottom (54pt), then keep pulling: the sheet resists.
    sheet.set_selected_detent(Detent::Bottom, ms(2_000));
    sheet.drag_began(ms(2_000));
    let update = sheet
        .drag_moved(DragSample::new(ms(2_200), 100.0))
        .expect("sheet owns the drag");
    println!("== Bounce ==\n  {:?}", update);
    assert!(update.bouncing);
    assert_eq!(update.displayed, 14.0);
    let settled = sheet.drag_ended(None, ms(2_200));
    assert_eq!(settled, Some(Detent::Bottom));
    assert_eq!(sheet.state().translation(), 54.0);
}
