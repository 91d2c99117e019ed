use cull::{CullTest, ExecPolicy, Instance, Scene};
use geometry::{AffineTransform, BBox, FlyCamera};
use math::hcm::{point3, vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn unit_box() -> BBox {
    BBox::new(point3(-0.5, -0.5, -0.5), point3(0.5, 0.5, 0.5))
}

fn camera() -> FlyCamera {
    FlyCamera::new(1.0, math::new_deg(90.0)).with_clip_planes(0.1, 100.0)
}

#[test]
fn serial_and_parallel_agree() {
    let scene = Scene::grid(unit_box(), 20, 3.0);
    let mut cam = camera();
    for step in 0..16 {
        cam.turn(math::new_deg(22.5));
        cam.move_forward(0.5 * step as f32);
        let f = cam.frustum();
        for &test in &[CullTest::Bounds, CullTest::Exact] {
            let serial = scene.visible(&f, test, ExecPolicy::Serial);
            let parallel = scene.visible(&f, test, ExecPolicy::Parallel);
            assert_eq!(serial, parallel);
            assert!(serial.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn only_instances_in_front_are_visible() {
    // Camera at the origin looking down -z: the half of the grid with z > 0 is behind it.
    let scene = Scene::grid(unit_box(), 11, 2.0);
    let f = camera().frustum();
    let visible = scene.visible(&f, CullTest::Bounds, ExecPolicy::Serial);
    assert!(!visible.is_empty());
    for &i in visible.iter() {
        let b = scene.instances()[i].world_bounds();
        assert!(b.min().z <= 0.0, "{} should be culled", b);
    }
    // The row straight ahead is visible.
    let ahead = scene
        .instances()
        .iter()
        .position(|inst| inst.world_bounds().midpoint() == point3(0.0, 0.0, -10.0));
    assert!(ahead.map_or(false, |i| visible.contains(&i)));
}

#[test]
fn everything_visible_from_far_away() {
    let scene = Scene::grid(unit_box(), 5, 2.0);
    let f = camera().at(point3(0.0, 0.0, 40.0)).frustum();
    let stats = scene.cull(&f, CullTest::Bounds, ExecPolicy::Parallel);
    assert_eq!(stats.total, 25);
    assert_eq!(stats.visible, 25);
    assert_eq!(stats.culled(), 0);
}

#[test]
fn nothing_visible_when_looking_away() {
    let scene = Scene::grid(unit_box(), 5, 2.0);
    let mut cam = camera().at(point3(0.0, 0.0, 40.0));
    cam.turn(math::new_deg(180.0));
    let stats = scene.cull(&cam.frustum(), CullTest::Bounds, ExecPolicy::Serial);
    assert_eq!(stats.visible, 0);
}

#[test]
fn exact_test_keeps_a_subset_of_bounds_test() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut scene = Scene::default();
    for _ in 0..400 {
        let axis = vec3(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.1..1.0),
        );
        let t = AffineTransform::translater(vec3(
            rng.gen_range(-30.0..30.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-30.0..30.0),
        )) * AffineTransform::rotater(axis, math::new_rad(rng.gen_range(0.0..6.28)));
        let slab = BBox::new(point3(-4.0, -0.1, -0.1), point3(4.0, 0.1, 0.1));
        scene.push(Instance::new(slab).with_transform(t));
    }
    let f = camera().frustum();
    let coarse = scene.visible(&f, CullTest::Bounds, ExecPolicy::Parallel);
    let exact = scene.visible(&f, CullTest::Exact, ExecPolicy::Parallel);
    assert!(exact.iter().all(|i| coarse.contains(i)));
    assert!(!exact.is_empty());
}
