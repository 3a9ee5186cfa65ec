use collagekit_core::{Item, Rect};
use collagekit_designer::{group_by_row, row_ids};
use proptest::prelude::*;

fn item(id: &str, x: f64, y: f64, w: f64, h: f64) -> Item {
    Item::new(id, "asset", Rect::new(x, y, w, h))
}

fn items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(
        (0.0..1000.0f64, 0.0..2000.0f64, 10.0..300.0f64, 10.0..300.0f64),
        0..24,
    )
    .prop_map(|boxes| {
        boxes
            .into_iter()
            .enumerate()
            .map(|(n, (x, y, w, h))| item(&format!("i{n}"), x, y, w, h))
            .collect()
    })
}

proptest! {
    #[test]
    fn grouping_ignores_input_order(items in items()) {
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(group_by_row(&items), group_by_row(&reversed));
    }

    #[test]
    fn rows_are_separated_and_sorted(items in items()) {
        let rows = group_by_row(&items);
        prop_assert_eq!(rows.iter().map(Vec::len).sum::<usize>(), items.len());

        for (r, row) in rows.iter().enumerate() {
            prop_assert!(row.windows(2).all(|pair| pair[0].x <= pair[1].x));
            for other in rows.iter().skip(r + 1) {
                for a in row {
                    for b in other {
                        prop_assert!(!a.rect().overlaps_vertically(&b.rect()));
                    }
                }
            }
        }

        let tops: Vec<f64> = rows
            .iter()
            .map(|row| row.iter().map(|i| i.y).fold(f64::INFINITY, f64::min))
            .collect();
        prop_assert!(tops.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[test]
fn test_chain_overlap_forms_one_row() {
    // a overlaps b, b overlaps c, a and c are disjoint.
    let a = item("a", 0.0, 0.0, 100.0, 100.0);
    let b = item("b", 200.0, 80.0, 100.0, 100.0);
    let c = item("c", 400.0, 160.0, 100.0, 100.0);
    assert!(!a.rect().overlaps_vertically(&c.rect()));

    for order in [
        vec![a.clone(), b.clone(), c.clone()],
        vec![c.clone(), a.clone(), b.clone()],
        vec![b.clone(), c.clone(), a.clone()],
    ] {
        assert_eq!(row_ids(&group_by_row(&order)), vec![vec!["a", "b", "c"]]);
    }
}

#[test]
fn test_empty_and_single_item() {
    assert!(group_by_row(&[]).is_empty());
    let only = item("only", 5.0, 5.0, 10.0, 10.0);
    assert_eq!(group_by_row(std::slice::from_ref(&only)), vec![vec![only]]);
}

#[test]
fn test_rows_ordered_top_to_bottom() {
    let items = vec![
        item("low", 0.0, 600.0, 100.0, 100.0),
        item("right", 500.0, 0.0, 100.0, 100.0),
        item("left", 0.0, 20.0, 100.0, 100.0),
    ];
    assert_eq!(
        row_ids(&group_by_row(&items)),
        vec![vec!["left", "right"], vec!["low"]]
    );
}
