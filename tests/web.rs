#![cfg(target_arch = "wasm32")]

use particula_polybody::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_builds_and_steps_a_body() {
    let mut world = World::new(200, 200);
    let body = world.place_body_center(100, 100).unwrap();
    world.place_body_vertex(120, 100).unwrap();
    world.place_body_vertex(90, 83).unwrap();
    world.place_body_vertex(90, 117).unwrap();

    world.step();
    world.render();

    assert_eq!(world.body_vertices(body).unwrap().len(), 6);
    assert_eq!(world.body_count(), 1);
    assert_eq!(world.remove_body(body).unwrap(), 3);
}

#[wasm_bindgen_test]
fn facade_reports_errors_as_strings() {
    let mut world = World::new(64, 64);
    let err = world.place_body_vertex(10, 10).unwrap_err();
    assert!(err.as_string().unwrap().contains("no body center"));
    assert!(world.load_settings("{\"damping\":2}".to_string()).is_err());
}
