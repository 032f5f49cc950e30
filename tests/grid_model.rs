use eframe_pixel_art::{Color, GridError, PixelGrid};

const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);

// Grid with a few painted cells so the bulk operations have something to overwrite
fn create_painted_grid() -> PixelGrid {
    let mut grid = PixelGrid::new(8);
    grid.set(0, 0, RED).unwrap();
    grid.set(3, 5, BLUE).unwrap();
    grid.set(7, 7, Color::BLACK).unwrap();
    grid
}

#[test]
fn test_set_then_get_then_clear_every_cell() {
    let mut grid = PixelGrid::new(6);
    for row in 0..6 {
        for col in 0..6 {
            grid.set(row, col, RED).unwrap();
            assert_eq!(grid.get(row, col).unwrap(), Some(RED));

            grid.clear(row, col).unwrap();
            assert_eq!(grid.get(row, col).unwrap(), None);
        }
    }
}

#[test]
fn test_clear_all_unsets_everything() {
    let mut grid = create_painted_grid();
    grid.clear_all();
    assert!(grid.cells().all(|(_, cell)| cell.is_none()));
    assert_eq!(grid.painted_count(), 0);
}

#[test]
fn test_fill_all_paints_everything_and_is_idempotent() {
    let mut grid = create_painted_grid();
    grid.fill_all(BLUE);
    assert!(grid.cells().all(|(_, cell)| cell == Some(BLUE)));

    let once = grid.clone();
    grid.fill_all(BLUE);
    assert_eq!(grid, once);
}

#[test]
fn test_scenario_small_grid_set_and_get() {
    let mut grid = PixelGrid::new(4);
    grid.set(0, 0, Color::from_hex("#FF0000").unwrap()).unwrap();

    assert_eq!(grid.get(0, 0).unwrap(), Some(RED));
    assert_eq!(grid.get(0, 0).unwrap().map(|c| c.to_hex()), Some("#FF0000".to_owned()));
    assert_eq!(grid.get(1, 1).unwrap(), None);
}

#[test]
fn test_out_of_range_is_reported() {
    let mut grid = PixelGrid::new(4);
    let expected = GridError::OutOfRange { row: 0, col: 4, dimension: 4 };
    assert_eq!(grid.get(0, 4), Err(expected.clone()));
    assert_eq!(grid.set(0, 4, RED), Err(expected.clone()));
    assert_eq!(grid.clear(0, 4), Err(expected));
}
