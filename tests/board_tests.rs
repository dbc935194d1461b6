use approx::assert_abs_diff_eq;
use snakegen::{BoardConfig, float_types::Real};

const TOL: Real = 1e-9;

#[test]
fn board_slabs_nest_correctly() {
    let config = BoardConfig::default();
    let layout = config.build();

    // Cardboard extends past the playing area by the border on both sides.
    assert_abs_diff_eq!(
        layout.cardboard.size.x,
        config.board_width() + 2.0 * config.border_width,
        epsilon = TOL
    );
    assert_abs_diff_eq!(
        layout.cardboard.size.z,
        config.board_depth() + 2.0 * config.border_width,
        epsilon = TOL
    );

    // Paper sits flush on top of the cardboard.
    let cardboard_top = layout.cardboard.center.y + layout.cardboard.size.y / 2.0;
    let paper_bottom = layout.paper.center.y - layout.paper.size.y / 2.0;
    assert_abs_diff_eq!(cardboard_top, paper_bottom, epsilon = TOL);
}

#[test]
fn one_grid_line_per_space_boundary() {
    let config = BoardConfig {
        spaces_x: 4,
        spaces_y: 7,
        ..BoardConfig::default()
    };
    let layout = config.build();
    assert_eq!(layout.grid_lines.len(), (4 + 1) + (7 + 1));
}

#[test]
fn labels_cover_every_space_once() {
    let config = BoardConfig {
        spaces_x: 5,
        spaces_y: 3,
        ..BoardConfig::default()
    };
    let layout = config.build();

    let mut numbers: Vec<u32> = layout.labels.iter().map(|l| l.number).collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=15).collect::<Vec<u32>>());

    // All labels float the same distance above the paper.
    let expected_y =
        config.board_thickness / 2.0 + config.paper_thickness + 0.005;
    for label in &layout.labels {
        assert_abs_diff_eq!(label.position.y, expected_y, epsilon = TOL);
    }
}
