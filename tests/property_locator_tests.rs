use linechart_core::core::{
    BaselinePolicy, CanvasSize, ChartDataset, Color, GradientAnchor, GradientStop, Series,
    StyleVariant, build_legends, compute_value_range, nearest_index, nearest_points,
    pixel_locations,
};
use proptest::prelude::*;

fn style_for(kind: u8) -> Option<StyleVariant> {
    let color = Color::rgb(0.25, 0.5, 0.75);
    match kind % 4 {
        0 => Some(StyleVariant::solid(color)),
        1 => Some(StyleVariant::linear_gradient(
            vec![color, color],
            GradientAnchor::Bottom,
            GradientAnchor::Top,
        )),
        2 => Some(StyleVariant::gradient_stops(
            vec![GradientStop::new(color, 0.5)],
            GradientAnchor::Top,
            GradientAnchor::Bottom,
        )),
        _ => None,
    }
}

proptest! {
    #[test]
    fn nearest_index_stays_in_bounds(
        pointer_x in -500.0f64..1_500.0,
        width in 1.0f64..1_000.0,
        count in 0usize..64
    ) {
        if let Some(index) = nearest_index(pointer_x, width, count) {
            prop_assert!(index < count);
        }
    }

    #[test]
    fn pointer_on_point_resolves_to_that_point(
        width in 10.0f64..2_000.0,
        count in 2usize..50,
        pick in 0usize..50
    ) {
        let index = pick % count;
        let x_section = width / (count - 1) as f64;
        let pointer_x = index as f64 * x_section;
        prop_assert_eq!(nearest_index(pointer_x, width, count), Some(index));
    }

    #[test]
    fn nearest_points_never_exceed_series_count(
        values in prop::collection::vec(prop::collection::vec(-1_000.0f64..1_000.0, 0..12), 0..6),
        pointer_x in -50.0f64..450.0
    ) {
        let dataset: ChartDataset = values
            .iter()
            .enumerate()
            .map(|(i, series)| Series::from_values(format!("s{i}"), series))
            .collect();
        let points = nearest_points(pointer_x, 400.0, &dataset);
        prop_assert!(points.len() <= dataset.len());
    }

    #[test]
    fn pixel_locations_are_idempotent_and_inside_canvas(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 2..40),
        pointer_x in 0.0f64..640.0
    ) {
        let dataset = ChartDataset::new(vec![Series::from_values("s", &values)]);
        let canvas = CanvasSize::new(640.0, 480.0);
        let value_range = compute_value_range(&dataset, BaselinePolicy::MinimumValue)
            .expect("range");
        prop_assume!(value_range.range > 0.0);

        let first = pixel_locations(pointer_x, canvas, &dataset, BaselinePolicy::MinimumValue)
            .expect("first");
        let second = pixel_locations(pointer_x, canvas, &dataset, BaselinePolicy::MinimumValue)
            .expect("second");
        prop_assert_eq!(&first, &second);

        for location in first {
            prop_assert!(location.x >= 0.0 && location.x <= canvas.width + 1e-9);
            prop_assert!(location.y >= -1e-9 && location.y <= canvas.height + 1e-9);
        }
    }

    #[test]
    fn range_is_non_negative_for_minimum_baselines(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..40),
        ceiling in -2_000.0f64..2_000.0
    ) {
        let dataset = ChartDataset::new(vec![Series::from_values("s", &values)]);
        for policy in [
            BaselinePolicy::MinimumValue,
            BaselinePolicy::MinimumWithCeiling(ceiling),
        ] {
            let value_range = compute_value_range(&dataset, policy).expect("range");
            prop_assert!(value_range.range >= 0.0);
            prop_assert!(value_range.min_value <= value_range.max_value());
        }
    }

    #[test]
    fn legends_follow_series_order_and_skip_unstyled(
        kinds in prop::collection::vec(any::<u8>(), 0..16)
    ) {
        let dataset: ChartDataset = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let series = Series::from_values(format!("s{i}"), &[1.0, 2.0]);
                match style_for(*kind) {
                    Some(style) => series.with_style(style),
                    None => series,
                }
            })
            .collect();

        let expected: Vec<String> = kinds
            .iter()
            .enumerate()
            .filter(|(_, kind)| style_for(**kind).is_some())
            .map(|(i, _)| format!("s{i}"))
            .collect();
        let actual: Vec<String> = build_legends(&dataset)
            .iter()
            .map(|legend| legend.series_id.to_string())
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
