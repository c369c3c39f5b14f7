use super::*;

use crate::core::error::EngineError;

#[test]
fn new_grid_is_all_dead() {
    let life = LifeCore::new(8, 8).unwrap();
    let buf = life.get_cells().unwrap();
    for px in buf.as_bytes().chunks_exact(4) {
        assert_eq!(px, [0, 0, 0, 255]);
    }
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        LifeCore::new(0, 10),
        Err(EngineError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        LifeCore::new(10, 0),
        Err(EngineError::InvalidDimensions { .. })
    ));
}

#[test]
fn lone_cell_dies_of_underpopulation() {
    let mut life = LifeCore::new(16, 16).unwrap();
    life.toggle_cell(8, 8);
    assert!(life.is_alive(8, 8));

    life.step();
    assert!(!life.is_alive(8, 8));
}

#[test]
fn block_is_a_still_life() {
    let mut life = LifeCore::new(16, 16).unwrap();
    for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
        life.toggle_cell(x, y);
    }

    for _ in 0..10 {
        life.step();
    }

    let buf = life.get_cells().unwrap();
    let alive = buf
        .as_bytes()
        .chunks_exact(4)
        .filter(|px| px[0] == 255)
        .count();
    assert_eq!(alive, 4);
    for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
        assert!(life.is_alive(x, y));
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut life = LifeCore::new(16, 16).unwrap();
    for x in [7, 8, 9] {
        life.toggle_cell(x, 8);
    }

    life.step();
    // Horizontal bar becomes vertical
    assert!(!life.is_alive(7, 8));
    assert!(!life.is_alive(9, 8));
    assert!(life.is_alive(8, 7));
    assert!(life.is_alive(8, 8));
    assert!(life.is_alive(8, 9));

    life.step();
    for x in [7, 8, 9] {
        assert!(life.is_alive(x, 8));
    }
}

#[test]
fn neighborhood_wraps_across_the_seam() {
    // Blinker straddling the x seam: cells at x = W-1, 0, 1.
    let mut life = LifeCore::new(12, 12).unwrap();
    for x in [11, 0, 1] {
        life.toggle_cell(x, 5);
    }

    life.step();
    assert!(life.is_alive(0, 4));
    assert!(life.is_alive(0, 5));
    assert!(life.is_alive(0, 6));
    assert!(!life.is_alive(11, 5));
    assert!(!life.is_alive(1, 5));
}

#[test]
fn toggle_is_its_own_inverse_including_out_of_range() {
    let mut life = LifeCore::new(10, 7).unwrap();

    for (x, y) in [(0, 0), (9, 6), (10, 7), (123, 456), (u32::MAX, u32::MAX)] {
        let before = life.is_alive(x, y);
        life.toggle_cell(x, y);
        assert_ne!(life.is_alive(x, y), before);
        life.toggle_cell(x, y);
        assert_eq!(life.is_alive(x, y), before);
    }
}

#[test]
fn out_of_range_toggle_lands_on_the_wrapped_cell() {
    let mut life = LifeCore::new(10, 7).unwrap();
    life.toggle_cell(10 + 3, 7 + 2);
    assert!(life.is_alive(3, 2));
}

#[test]
fn randomize_then_clear_is_all_dead() {
    let mut life = LifeCore::new(20, 20).unwrap();
    life.randomize();
    life.clear();

    let buf = life.get_cells().unwrap();
    assert_eq!(buf.len(), 20 * 20 * 4);
    for px in buf.as_bytes().chunks_exact(4) {
        assert_eq!(px, [0, 0, 0, 255]);
    }
}

#[test]
fn randomize_populates_roughly_half_the_grid() {
    let mut life = LifeCore::new(64, 64).unwrap();
    life.randomize();

    let buf = life.get_cells().unwrap();
    let alive = buf
        .as_bytes()
        .chunks_exact(4)
        .filter(|px| px[0] == 255)
        .count();
    // Loose band around p = 0.5 over 4096 cells
    assert!(alive > 1500 && alive < 2600, "alive = {alive}");
}

#[test]
fn disposed_handle_reports_use_after_dispose() {
    use crate::core::handle::Disposable;

    let mut handle = Disposable::new(LifeCore::new(8, 8).unwrap());
    handle.get_mut().unwrap().step();
    handle.dispose().unwrap();

    assert!(matches!(
        handle.get_mut(),
        Err(EngineError::UseAfterDispose)
    ));
    assert!(matches!(
        handle.dispose(),
        Err(EngineError::UseAfterDispose)
    ));
}
