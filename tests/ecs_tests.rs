//! Entity registry, component store and coordinator tests

use tui_puyo::ecs::{Component, Coordinator, EcsError, Entity, MAX_ENTITIES};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, PartialEq)]
struct Name(String);

impl Component for Position {
    const ID: u8 = 0;
}

impl Component for Name {
    const ID: u8 = 1;
}

fn coordinator() -> Coordinator {
    let mut ecs = Coordinator::new();
    ecs.register_component::<Position>().unwrap();
    ecs.register_component::<Name>().unwrap();
    ecs
}

#[test]
fn pool_exhaustion_is_an_error() {
    let mut ecs = coordinator();
    let mut handles = Vec::new();
    for _ in 0..MAX_ENTITIES - 1 {
        handles.push(ecs.create_entity().unwrap());
    }
    assert!(handles.iter().all(|e| !e.is_null()));
    assert_eq!(
        ecs.create_entity(),
        Err(EcsError::Capacity {
            capacity: MAX_ENTITIES - 1
        })
    );

    ecs.destroy_entity(handles[10]).unwrap();
    let recycled = ecs.create_entity().unwrap();
    assert_eq!(recycled.index(), handles[10].index());
}

#[test]
fn stale_handle_cannot_reach_the_recycled_entity() {
    let mut ecs = Coordinator::with_slots(2);
    ecs.register_component::<Position>().unwrap();

    let old = ecs.create_entity().unwrap();
    ecs.add_component(old, Position { x: 1, y: 1 }).unwrap();
    ecs.destroy_entity(old).unwrap();

    let new = ecs.create_entity().unwrap();
    ecs.add_component(new, Position { x: 9, y: 9 }).unwrap();

    assert_eq!(old.index(), new.index());
    assert_ne!(old, new);
    assert_eq!(ecs.get::<Position>(old), Err(EcsError::StaleEntity(old)));
    assert_eq!(ecs.destroy_entity(old), Err(EcsError::StaleEntity(old)));
    assert_eq!(ecs.get::<Position>(new).unwrap().x, 9);
}

#[test]
fn signatures_follow_component_membership() {
    let mut ecs = coordinator();
    let e = ecs.create_entity().unwrap();
    assert!(ecs.signature(e).unwrap().is_empty());

    ecs.add_component(e, Position { x: 0, y: 0 }).unwrap();
    ecs.add_component(e, Name("blob".into())).unwrap();
    let sig = ecs.signature(e).unwrap();
    assert!(sig.contains(Position::ID) && sig.contains(Name::ID));

    ecs.remove_component::<Name>(e).unwrap();
    let sig = ecs.signature(e).unwrap();
    assert!(sig.contains(Position::ID));
    assert!(!sig.contains(Name::ID));
    assert!(!ecs.has::<Name>(e));
}

#[test]
fn missing_and_duplicate_components_are_rejected() {
    let mut ecs = coordinator();
    let e = ecs.create_entity().unwrap();

    assert!(matches!(
        ecs.get::<Position>(e),
        Err(EcsError::MissingComponent { .. })
    ));
    ecs.add_component(e, Position { x: 1, y: 2 }).unwrap();
    assert!(matches!(
        ecs.add_component(e, Position { x: 3, y: 4 }),
        Err(EcsError::DuplicateComponent { .. })
    ));
    assert_eq!(*ecs.get::<Position>(e).unwrap(), Position { x: 1, y: 2 });
}

#[test]
fn removal_keeps_other_entities_addressable() {
    let mut ecs = coordinator();
    let entities: Vec<Entity> = (0..6).map(|_| ecs.create_entity().unwrap()).collect();
    for (i, &e) in entities.iter().enumerate() {
        ecs.add_component(e, Name(format!("e{}", i))).unwrap();
    }

    // Destroy from the front so every removal swaps the last slot in.
    for &e in &entities[..3] {
        ecs.destroy_entity(e).unwrap();
    }
    for (i, &e) in entities.iter().enumerate().skip(3) {
        assert_eq!(ecs.get::<Name>(e).unwrap().0, format!("e{}", i));
    }
}

#[test]
fn double_registration_is_rejected() {
    let mut ecs = coordinator();
    assert!(matches!(
        ecs.register_component::<Position>(),
        Err(EcsError::AlreadyRegistered { id: 0, .. })
    ));
}

#[test]
fn errors_render_readable_messages() {
    let err = EcsError::Capacity { capacity: 511 };
    assert_eq!(err.to_string(), "entity limit reached (capacity 511)");
    assert_eq!(EcsError::NullEntity.to_string(), "null entity handle");
}
