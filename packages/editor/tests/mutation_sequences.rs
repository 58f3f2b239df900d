//! Sequence tests: realistic editing flows driven through the `Mutation`
//! surface, the way an input adapter would submit them.

use pagecraft_editor::{
    ComponentKind, DeviceView, MoveDirection, Mutation, PageDocument, UndoStack,
};

#[test]
fn test_heading_paragraph_scenario() {
    let mut doc = PageDocument::new("home");

    // Start empty; add a heading.
    assert!(doc.is_empty());
    let heading = doc.add_component(ComponentKind::Heading);
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get(&heading).unwrap().kind, ComponentKind::Heading);
    assert_eq!(doc.get(&heading).unwrap().order, 0);
    assert_eq!(doc.selected_id(), Some(heading.as_str()));

    // Add a paragraph; it appends and takes the selection.
    let paragraph = doc.add_component(ComponentKind::Paragraph);
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get(&paragraph).unwrap().order, 1);
    assert_eq!(doc.selected_id(), Some(paragraph.as_str()));

    // Move the paragraph up; positions swap.
    assert!(doc.move_component(&paragraph, MoveDirection::Up));
    assert_eq!(doc.get(&paragraph).unwrap().order, 0);
    assert_eq!(doc.get(&heading).unwrap().order, 1);

    // Remove the heading; the paragraph remains, selection unchanged.
    assert!(doc.remove_component(&heading));
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get(&paragraph).unwrap().order, 0);
    assert_eq!(doc.selected_id(), Some(paragraph.as_str()));
}

#[test]
fn test_adapter_driven_session() {
    let mut doc = PageDocument::new("landing");
    let mut history = UndoStack::new();

    // A palette drop and two panel edits arrive as wire mutations.
    let mutations: Vec<Mutation> = [
        r#"{"type":"add-component","kind":"hero"}"#,
        r#"{"type":"set-device-view","view":"mobile"}"#,
    ]
    .iter()
    .map(|json| serde_json::from_str(json).unwrap())
    .collect();

    for mutation in mutations {
        history.apply(&mut doc, mutation);
    }

    assert_eq!(doc.len(), 1);
    assert_eq!(doc.device_view(), DeviceView::Mobile);

    let hero = doc.selected_id().unwrap().to_string();

    let patch: Mutation = serde_json::from_str(&format!(
        r#"{{"type":"update-component","id":"{}","properties":{{"title":"Launch day"}}}}"#,
        hero
    ))
    .unwrap();
    history.apply(&mut doc, patch);

    assert_eq!(
        doc.get(&hero).unwrap().property("title").and_then(|v| v.as_text()),
        Some("Launch day")
    );

    // Undo the title edit only.
    history.undo(&mut doc);
    assert_eq!(
        doc.get(&hero).unwrap().property("title").and_then(|v| v.as_text()),
        Some("Welcome to your site")
    );
}

#[test]
fn test_reorder_then_duplicate_sequence() {
    let mut doc = PageDocument::new("about");

    let hero = doc.add_component(ComponentKind::Hero);
    let gallery = doc.add_component(ComponentKind::Gallery);
    let testimonial = doc.add_component(ComponentKind::Testimonial);

    // Bring the testimonial to the top in two steps.
    assert!(doc.move_component(&testimonial, MoveDirection::Up));
    assert!(doc.move_component(&testimonial, MoveDirection::Up));

    let ids: Vec<&str> = doc
        .components_ordered()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec![testimonial.as_str(), hero.as_str(), gallery.as_str()]);

    // Duplicate appends at the end regardless of the source's position.
    let copy = doc.duplicate_component(&testimonial).unwrap();
    assert_eq!(doc.get(&copy).unwrap().order, 3);
    assert_eq!(doc.selected_id(), Some(copy.as_str()));

    // A further clamped move of the top component changes nothing.
    let version = doc.version();
    assert!(!doc.move_component(&testimonial, MoveDirection::Up));
    assert_eq!(doc.version(), version);
}

#[test]
fn test_history_spans_structural_edits() {
    let mut doc = PageDocument::new("pricing");
    let mut history = UndoStack::new();

    history.apply(
        &mut doc,
        Mutation::AddComponent {
            kind: ComponentKind::Heading,
        },
    );
    history.apply(
        &mut doc,
        Mutation::AddComponent {
            kind: ComponentKind::Button,
        },
    );
    let button = doc.selected_id().unwrap().to_string();

    history.apply(
        &mut doc,
        Mutation::MoveComponent {
            id: button.clone(),
            direction: MoveDirection::Up,
        },
    );
    history.apply(&mut doc, Mutation::RemoveComponent { id: button });

    assert_eq!(doc.len(), 1);

    // Walk all the way back to the empty page.
    assert!(history.undo(&mut doc)); // un-remove
    assert_eq!(doc.len(), 2);
    assert!(history.undo(&mut doc)); // un-move
    assert!(history.undo(&mut doc)); // un-add button
    assert!(history.undo(&mut doc)); // un-add heading
    assert!(doc.is_empty());
    assert!(!history.undo(&mut doc));

    // And forward again.
    assert!(history.redo(&mut doc));
    assert!(history.redo(&mut doc));
    assert_eq!(doc.len(), 2);
}
