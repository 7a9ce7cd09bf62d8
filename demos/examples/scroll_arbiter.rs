// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sharing one pan between the sheet and its scrolling content.
//!
//! An upward pan on a partially open sheet first expands the sheet. Once the
//! sheet is fully expanded the same pan scrolls the content. Pulling down on
//! content already at its top collapses the sheet again. A [`Scroller`] then
//! reveals a marked row.
//!
//! Run:
//! - `cargo run -p understory_sheet_demos --example scroll_arbiter`

use std::time::Duration;

use kurbo::{Rect, Size};
use understory_detent::{Detent, DetentSet, Geometry};
use understory_sheet::scroller::{ScrollTarget, Scroller};
use understory_sheet::{DragSample, GestureOwner, ScrollProbe, Sheet, SheetConfig};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[derive(Default)]
struct ContentView {
    offset_y: f64,
    viewport: f64,
}

impl ScrollTarget for ContentView {
    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool) {
        if rect.y1 > self.offset_y + self.viewport {
            self.offset_y = rect.y1 - self.viewport;
        } else if rect.y0 < self.offset_y {
            self.offset_y = rect.y0;
        }
        println!("  scrolled to {} (animated: {animated})", self.offset_y);
    }
}

fn main() {
    let _ = env_logger::try_init();

    let geometry = Geometry::from_size(Size::new(390.0, 800.0));
    let detents = DetentSet::from([Detent::Medium, Detent::Large]);
    let mut sheet = Sheet::new(detents, Detent::Medium, geometry, SheetConfig::default())
        .expect("valid sheet");

    // Pan up on the content of a half-open sheet: the sheet takes it.
    println!("== Expand ==");
    let probe = ScrollProbe::new(0.0, -900.0);
    assert!(!sheet.scroll_began(probe));
    assert_eq!(sheet.gesture_owner(), Some(GestureOwner::SheetDrag));
    let _ = sheet.drag_moved(DragSample::new(ms(0), 0.0));
    let _ = sheet.drag_moved(DragSample::new(ms(150), -320.0));
    let settled = sheet.drag_ended(None, ms(150));
    println!("  settled: {settled:?}");
    assert_eq!(settled, Some(Detent::Large));

    // Fully expanded: the content scrolls and the sheet stays put.
    println!("== Scroll content ==");
    assert!(sheet.scroll_began(ScrollProbe::new(0.0, -900.0)));
    assert_eq!(sheet.drag_moved(DragSample::new(ms(200), -50.0)), None);
    sheet.scroll_ended();
    assert_eq!(sheet.state().translation(), 800.0);

    // Content back at the top, pulling down: the sheet collapses.
    println!("== Collapse ==");
    assert!(!sheet.scroll_began(ScrollProbe::new(0.0, 400.0)));
    let _ = sheet.drag_moved(DragSample::new(ms(300), 0.0));
    let _ = sheet.drag_moved(DragSample::new(ms(600), 300.0));
    let settled = sheet.drag_ended(None, ms(600));
    println!("  settled: {settled:?}");
    assert_eq!(settled, Some(Detent::Medium));

    // Reveal a row by key.
    println!("== Scroll to row ==");
    let mut scroller: Scroller<&str> = Scroller::new();
    for (i, key) in ["inbox", "drafts", "sent", "archive"].into_iter().enumerate() {
        let y = i as f64 * 120.0;
        scroller.mark(key, Rect::new(0.0, y, 390.0, y + 120.0));
    }
    let mut view = ContentView {
        viewport: 400.0,
        ..ContentView::default()
    };
    assert!(scroller.scroll_to_in(&mut view, &"archive", true));
    assert_eq!(view.offset_y, 80.0);
    assert!(!scroller.scroll_to_in(&mut view, &"spam", true));
}
