use collagekit_core::{Breakpoint, Item, Layout, Rect, Template};
use collagekit_designer::{get_layout, group_by_row, plan_rows, row_ids};

fn item(id: &str, x: f64, y: f64, w: f64, h: f64) -> Item {
    Item::new(id, "asset", Rect::new(x, y, w, h))
}

fn template(desktop: Vec<Item>, tablet: Vec<Item>, mobile: Vec<Item>) -> Template {
    Template::new(
        Layout::new(1280.0, desktop),
        Layout::new(768.0, tablet),
        Layout::new(390.0, mobile),
    )
}

/// Rows `[a, b]`, `[c]`, `[d, e]` on desktop.
fn desktop() -> Vec<Item> {
    vec![
        item("a", 0.0, 0.0, 400.0, 300.0),
        item("b", 500.0, 0.0, 400.0, 300.0),
        item("c", 0.0, 400.0, 400.0, 300.0),
        item("d", 0.0, 800.0, 400.0, 300.0),
        item("e", 500.0, 800.0, 400.0, 300.0),
    ]
}

fn scaled(items: &[Item], width: f64) -> Vec<Item> {
    Layout::new(1280.0, items.to_vec())
        .scaled_to_width(width)
        .unwrap()
        .items
}

#[test]
fn test_identical_breakpoints_reproduce_desktop_rows() {
    let t = template(desktop(), scaled(&desktop(), 768.0), scaled(&desktop(), 390.0));
    let rows = get_layout(&t);
    assert_eq!(rows, group_by_row(&desktop()));
    assert_eq!(
        rows.iter().map(Vec::len).collect::<Vec<_>>(),
        vec![2, 1, 2]
    );
}

#[test]
fn test_subset_breakpoints_keep_desktop_rows() {
    let full = get_layout(&template(desktop(), vec![], vec![]));

    let subset: Vec<Item> = scaled(&desktop(), 768.0)
        .into_iter()
        .filter(|i| ["a", "c", "d"].contains(&i.id.as_str()))
        .collect();
    let mobile: Vec<Item> = scaled(&desktop(), 390.0)
        .into_iter()
        .filter(|i| i.id == "e")
        .collect();
    let rows = get_layout(&template(desktop(), subset, mobile));

    assert_eq!(row_ids(&rows), row_ids(&full));
}

#[test]
fn test_subset_with_stacked_mobile_keeps_shared_row() {
    let desktop = vec![
        item("a", 0.0, 0.0, 384.0, 384.0),
        item("b", 428.0, 0.0, 384.0, 384.0),
        item("c", 856.0, 0.0, 384.0, 384.0),
    ];
    let tablet_row = |ids: &[&str]| -> Vec<Item> {
        ids.iter()
            .enumerate()
            .map(|(k, id)| item(id, k as f64 * 256.0, 0.0, 240.0, 240.0))
            .collect()
    };
    let stacked = vec![
        item("a", 0.0, 0.0, 390.0, 390.0),
        item("b", 0.0, 400.0, 390.0, 390.0),
        item("c", 0.0, 800.0, 390.0, 390.0),
    ];

    let full = get_layout(&template(desktop.clone(), tablet_row(&["a", "b", "c"]), stacked.clone()));
    assert_eq!(row_ids(&full), vec![vec!["a", "b", "c"]]);

    for shown in [&["b", "c"][..], &["a", "c"][..], &["c"][..], &[][..]] {
        let rows = get_layout(&template(desktop.clone(), tablet_row(shown), stacked.clone()));
        assert_eq!(row_ids(&rows), row_ids(&full), "tablet shows {shown:?}");
    }
}

#[test]
fn test_adjacent_joins_merge_into_one_row() {
    let desktop = vec![
        item("a", 0.0, 0.0, 400.0, 300.0),
        item("b", 0.0, 400.0, 400.0, 300.0),
        item("c", 0.0, 800.0, 400.0, 300.0),
        item("e", 0.0, 1200.0, 400.0, 300.0),
    ];
    let tablet = vec![
        item("a", 0.0, 0.0, 300.0, 300.0),
        item("b", 350.0, 0.0, 300.0, 300.0),
        item("c", 0.0, 400.0, 300.0, 300.0),
        item("e", 350.0, 400.0, 300.0, 300.0),
    ];
    let rows = get_layout(&template(desktop, tablet, vec![]));
    assert_eq!(row_ids(&rows), vec![vec!["a", "b", "c", "e"]]);
}

#[test]
fn test_disjoint_tablet_rows_are_appended() {
    for extra in 0..4 {
        let mut tablet = scaled(&desktop(), 768.0);
        for n in 0..extra {
            let y = 1000.0 + n as f64 * 300.0;
            tablet.push(item(&format!("t{n}"), 0.0, y, 200.0, 200.0));
        }
        let rows = get_layout(&template(desktop(), tablet, vec![]));
        assert_eq!(rows.len(), 3 + extra);
        for n in 0..extra {
            assert_eq!(row_ids(&rows)[3 + n], vec![format!("t{n}")]);
        }
    }
}

#[test]
fn test_tablet_split_of_single_desktop_row() {
    let desktop = vec![
        item("a", 0.0, 0.0, 384.0, 384.0),
        item("b", 428.0, 0.0, 384.0, 384.0),
        item("c", 856.0, 0.0, 384.0, 384.0),
    ];
    let tablet = vec![
        item("a", 0.0, 0.0, 372.0, 372.0),
        item("b", 396.0, 0.0, 372.0, 372.0),
        item("c", 0.0, 396.0, 372.0, 372.0),
    ];
    let stacked = vec![
        item("a", 0.0, 0.0, 390.0, 390.0),
        item("b", 0.0, 400.0, 390.0, 390.0),
        item("c", 0.0, 800.0, 390.0, 390.0),
    ];

    for mobile in [vec![], stacked] {
        let rows = get_layout(&template(desktop.clone(), tablet.clone(), mobile));
        assert_eq!(row_ids(&rows), vec![vec!["a", "b"], vec!["c"]]);
        // Desktop records are the ones kept.
        assert_eq!(rows[0][1].x, 428.0);
        assert_eq!(rows[1][0].x, 856.0);
    }
}

#[test]
fn test_foreign_item_between_rows_gets_own_row() {
    let desktop = vec![
        item("a", 0.0, 0.0, 400.0, 300.0),
        item("b", 0.0, 500.0, 400.0, 300.0),
    ];
    let mobile = vec![
        item("a", 0.0, 0.0, 100.0, 100.0),
        item("m", 0.0, 200.0, 100.0, 100.0),
        item("b", 0.0, 400.0, 100.0, 100.0),
    ];
    let rows = get_layout(&template(desktop, vec![], mobile));
    assert_eq!(row_ids(&rows), vec![vec!["a"], vec!["m"], vec!["b"]]);
}

#[test]
fn test_isolated_foreign_row_goes_first() {
    let desktop = vec![item("a", 0.0, 0.0, 400.0, 300.0)];
    let tablet = vec![item("t", 0.0, 900.0, 200.0, 200.0)];
    let rows = get_layout(&template(desktop, tablet, vec![]));
    assert_eq!(row_ids(&rows), vec![vec!["t"], vec!["a"]]);
}

#[test]
fn test_result_ignores_input_order() {
    let mut reversed = desktop();
    reversed.reverse();
    let mut tablet = scaled(&desktop(), 768.0);
    tablet.push(item("t", 0.0, 2000.0, 100.0, 100.0));
    let mut tablet_reversed = tablet.clone();
    tablet_reversed.reverse();

    assert_eq!(
        get_layout(&template(desktop(), tablet, vec![])),
        get_layout(&template(reversed, tablet_reversed, vec![]))
    );
}

#[test]
fn test_plan_from_json_template() {
    let json = r#"{
        "desktop": {"width": 1280, "items": [
            {"id": "a", "src": "p1", "x": 0, "y": 0, "w": 600, "h": 400},
            {"id": "b", "src": "p2", "x": 640, "y": 0, "w": 600, "h": 400}
        ]},
        "tablet": {"width": 768, "items": [
            {"id": "a", "src": "p1", "x": 0, "y": 0, "w": 768, "h": 512},
            {"id": "b", "src": "p2", "x": 0, "y": 540, "w": 768, "h": 512}
        ]},
        "mobile": {"width": 390, "items": [
            {"id": "a", "src": "p1", "x": 0, "y": 0, "w": 390, "h": 260}
        ]}
    }"#;
    let template = Template::from_json(json).unwrap();
    let plan = plan_rows(&template);

    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0][0].item.id, "a");
    assert_eq!(plan[0][0].visible_on, Breakpoint::ALL.to_vec());
    assert_eq!(plan[1][0].item.id, "b");
    assert_eq!(
        plan[1][0].visible_on,
        vec![Breakpoint::Desktop, Breakpoint::Tablet]
    );

    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value[1][0]["item"]["id"], "b");
}
