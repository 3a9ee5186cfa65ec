use collagekit_core::{Breakpoint, Extent, Item, Layout, Point, Rect, Template};
use collagekit_designer::{
    Corner, DesignerError, DragEvent, DragOutcome, DropTarget, Edge, EditorState, Handle,
    Interaction, InteractionConfig, LayoutSink, SelectionManager,
};

fn config() -> InteractionConfig {
    InteractionConfig::new(
        6.0,
        0.5,
        Extent::from_pairs([40.0, 1200.0], [40.0, f64::INFINITY]),
    )
}

fn desktop() -> Layout {
    Layout::new(
        1200.0,
        vec![
            Item::new("a", "p1", Rect::new(0.0, 0.0, 300.0, 300.0)),
            Item::new("b", "p2", Rect::new(600.0, 0.0, 300.0, 300.0)),
        ],
    )
}

fn editor() -> EditorState {
    let desktop = desktop();
    let tablet = desktop.scaled_to_width(600.0).unwrap();
    let mobile = desktop.scaled_to_width(300.0).unwrap();
    EditorState::new(Template::new(desktop, tablet, mobile))
}

fn rect_of(editor: &EditorState, breakpoint: Breakpoint, id: &str) -> Rect {
    editor.template().layout(breakpoint).item(id).unwrap().rect()
}

/// Sink that counts commits and applies them to its own layout.
struct Recorder {
    layout: Layout,
    commits: usize,
}

impl LayoutSink for Recorder {
    fn set_layout(&mut self, update: &dyn Fn(&Layout) -> Layout) {
        self.layout = update(&self.layout);
        self.commits += 1;
    }
}

#[test]
fn test_move_snaps_and_syncs_breakpoints() {
    let mut editor = editor();
    let mut surface = Interaction::new(config());

    surface.on_move_start(editor.layout(), "a").unwrap();
    surface.on_move(DragEvent::new(150.0, 40.0)).unwrap();
    // Deltas are relative to the drag start, not to the last event.
    let preview = surface.on_move(DragEvent::new(297.0, 3.0)).unwrap();
    assert_eq!(preview[0].rect(), Rect::new(300.0, 0.0, 300.0, 300.0));

    let outcome = surface
        .on_move_end(DropTarget::Inside, &mut editor)
        .unwrap();
    assert_eq!(outcome, DragOutcome::Committed);
    assert!(surface.is_idle());

    assert_eq!(
        rect_of(&editor, Breakpoint::Desktop, "a"),
        Rect::new(300.0, 0.0, 300.0, 300.0)
    );
    assert_eq!(
        rect_of(&editor, Breakpoint::Tablet, "a"),
        Rect::new(150.0, 0.0, 150.0, 150.0)
    );
    assert_eq!(editor.history().len(), 1);

    assert!(editor.undo());
    assert_eq!(
        rect_of(&editor, Breakpoint::Tablet, "a"),
        Rect::new(0.0, 0.0, 150.0, 150.0)
    );
}

#[test]
fn test_zero_drag_is_a_click() {
    let mut editor = editor();
    let mut surface = Interaction::new(config());
    surface.on_move_start(editor.layout(), "a").unwrap();
    surface.on_move(DragEvent::new(0.0, 0.0)).unwrap();
    let outcome = surface
        .on_move_end(DropTarget::Inside, &mut editor)
        .unwrap();
    assert_eq!(outcome, DragOutcome::Click);
    assert!(!editor.can_undo());
    assert!(!editor.is_modified);
}

#[test]
fn test_release_outside_cancels() {
    let mut recorder = Recorder {
        layout: desktop(),
        commits: 0,
    };
    let mut surface = Interaction::new(config());
    surface.on_move_start(&recorder.layout, "a").unwrap();
    surface.on_move(DragEvent::new(100.0, 100.0)).unwrap();
    let outcome = surface
        .on_move_end(DropTarget::Outside, &mut recorder)
        .unwrap();
    assert_eq!(outcome, DragOutcome::Cancelled);
    assert_eq!(recorder.commits, 0);
    assert_eq!(recorder.layout, desktop());
    assert!(surface.is_idle());
}

#[test]
fn test_commit_applies_to_current_layout() {
    let mut recorder = Recorder {
        layout: desktop(),
        commits: 0,
    };
    let mut surface = Interaction::new(config());
    surface.on_move_start(&recorder.layout, "a").unwrap();
    surface.on_move(DragEvent::new(50.0, 100.0)).unwrap();

    // Another edit lands while the drag is in progress.
    let late = Item::new("late", "p3", Rect::new(0.0, 900.0, 100.0, 100.0));
    recorder.layout = recorder.layout.with_added(late);

    surface
        .on_move_end(DropTarget::Inside, &mut recorder)
        .unwrap();
    assert_eq!(recorder.commits, 1);
    assert!(recorder.layout.contains("late"));
    assert_eq!(
        recorder.layout.item("a").unwrap().rect(),
        Rect::new(50.0, 100.0, 300.0, 300.0)
    );
}

#[test]
fn test_resize_from_corner_keeps_opposite_corner() {
    let mut editor = editor();
    let mut surface = Interaction::new(config());
    let handle = Handle::Corner(Corner::BottomRight);
    surface.on_resize_start(editor.layout(), "a", handle).unwrap();
    let preview = surface.on_resize(DragEvent::new(60.0, 60.0)).unwrap();
    assert_eq!(preview[0].rect(), Rect::new(0.0, 0.0, 360.0, 360.0));

    surface
        .on_resize_end(DropTarget::Inside, &mut editor)
        .unwrap();
    assert_eq!(
        rect_of(&editor, Breakpoint::Mobile, "a"),
        Rect::new(0.0, 0.0, 90.0, 90.0)
    );
}

#[test]
fn test_crop_from_edge_narrows_window() {
    let mut editor = editor();
    let mut surface = Interaction::new(config());
    let handle = Handle::Edge(Edge::Right);
    surface.on_crop_start(editor.layout(), "a", handle).unwrap();
    let preview = surface.on_crop(DragEvent::new(-100.0, 0.0)).unwrap();
    let cropped = &preview[0];
    assert!((cropped.w - 200.0).abs() < 1e-9);
    assert_eq!(cropped.h, 300.0);
    assert_eq!(cropped.x, 0.0);
    assert!((cropped.sw - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(cropped.sh, 1.0);

    assert_eq!(
        surface
            .on_crop_end(DropTarget::Inside, &mut editor)
            .unwrap(),
        DragOutcome::Committed
    );
    assert!((editor.layout().item("a").unwrap().sw - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rubber_band_group_move() {
    let mut editor = editor();
    let mut selection = SelectionManager::new();
    selection.select_in_rect(
        editor.layout(),
        Point::new(-10.0, -10.0),
        Point::new(1000.0, 50.0),
        false,
    );
    assert_eq!(selection.selected_count(), 2);

    let mut surface = Interaction::new(config());
    surface
        .on_group_move_start(editor.layout(), selection.selected_ids())
        .unwrap();
    surface.on_group_move(DragEvent::new(10.0, 50.0)).unwrap();
    surface
        .on_group_move_end(DropTarget::Inside, &mut editor)
        .unwrap();

    assert_eq!(
        rect_of(&editor, Breakpoint::Desktop, "a"),
        Rect::new(10.0, 50.0, 300.0, 300.0)
    );
    assert_eq!(
        rect_of(&editor, Breakpoint::Desktop, "b"),
        Rect::new(610.0, 50.0, 300.0, 300.0)
    );
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_lifecycle_errors() {
    let layout = desktop();
    let mut surface = Interaction::new(config());
    let mut recorder = Recorder {
        layout: layout.clone(),
        commits: 0,
    };

    assert!(matches!(
        surface.on_move(DragEvent::new(1.0, 1.0)),
        Err(DesignerError::NotDragging)
    ));
    assert!(surface.on_move_start(&layout, "missing").is_err());
    assert!(surface.is_idle());

    surface.on_move_start(&layout, "a").unwrap();
    assert!(matches!(
        surface.on_resize_start(&layout, "b", Handle::Corner(Corner::TopLeft)),
        Err(DesignerError::AlreadyDragging { .. })
    ));
    assert!(matches!(
        surface.on_crop_end(DropTarget::Inside, &mut recorder),
        Err(DesignerError::WrongDrag { .. })
    ));
    // The move drag survives the mismatched end.
    assert!(surface.on_move(DragEvent::new(5.0, 5.0)).is_ok());
    assert!(surface.on_move(DragEvent::new(f64::NAN, 0.0)).is_err());

    surface.cancel();
    assert!(surface.is_idle());
    assert!(matches!(
        surface.on_group_move_start(&layout, &[]),
        Err(DesignerError::EmptySelection)
    ));
}

#[test]
fn test_editing_tablet_customises_it() {
    let mut editor = editor();
    editor.set_active(Breakpoint::Tablet);
    let mut surface = Interaction::new(config());
    surface.on_move_start(editor.layout(), "b").unwrap();
    surface.on_move(DragEvent::new(0.0, 200.0)).unwrap();
    surface
        .on_move_end(DropTarget::Inside, &mut editor)
        .unwrap();
    assert!(editor.is_customised(Breakpoint::Tablet));

    editor.set_active(Breakpoint::Desktop);
    let mut surface = Interaction::new(config());
    surface.on_move_start(editor.layout(), "a").unwrap();
    surface.on_move(DragEvent::new(0.0, 400.0)).unwrap();
    surface
        .on_move_end(DropTarget::Inside, &mut editor)
        .unwrap();

    // Tablet keeps its own arrangement; mobile follows desktop.
    assert_eq!(
        rect_of(&editor, Breakpoint::Tablet, "a"),
        Rect::new(0.0, 0.0, 150.0, 150.0)
    );
    // The surface ends one item height below the lowest item.
    assert_eq!(rect_of(&editor, Breakpoint::Desktop, "a").y, 300.0);
    assert_eq!(rect_of(&editor, Breakpoint::Mobile, "a").y, 75.0);

    let rows = collagekit_designer::row_ids(&editor.unified_rows());
    assert_eq!(rows, vec![vec!["b"], vec!["a"]]);
}
