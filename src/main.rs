mod cli_options;

use std::time::Instant;

use cli_options::CliOptions;
use cull::{CullStats, CullTest, ExecPolicy, Scene};
use geometry::{BBox, FlyCamera};
use log::{debug, error, info};
use math::hcm::point3;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match cli_options::parse_args(std::env::args().collect()) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            eprintln!("usage: {}", CliOptions::message());
            std::process::exit(1);
        }
    };
    if options.show_help {
        println!("usage: {}", CliOptions::message());
        return;
    }
    if let Some(num_threads) = options.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            error!("Can't set up thread pool: {}", e);
            std::process::exit(1);
        }
    }

    let policy = if options.use_multi_thread {
        ExecPolicy::Parallel
    } else {
        ExecPolicy::Serial
    };
    let test = if options.exact {
        CullTest::Exact
    } else {
        CullTest::Bounds
    };

    // Each instance stands on the ground plane.
    let object = BBox::new(point3(-0.5, 0.0, -0.5), point3(0.5, 1.0, 0.5));
    let scene = Scene::grid(object, options.grid, options.spacing);
    info!(
        "Scene has {} instances, bounds = {}",
        scene.len(),
        scene.bbox()
    );

    let start = Instant::now();
    let totals = fly_through(&scene, &options, test, policy);
    info!(
        "Culled {} frames ({:?}, {:?}) in {:.2?}: {}",
        options.frames,
        test,
        policy,
        start.elapsed(),
        totals
    );
}

/// Turns the camera a full revolution over the frames while drifting forward, culling the scene
/// at each frame.
fn fly_through(
    scene: &Scene,
    options: &CliOptions,
    test: CullTest,
    policy: ExecPolicy,
) -> CullStats {
    let mut camera = FlyCamera::new(16.0 / 9.0, math::new_deg(60.0))
        .with_clip_planes(0.1, 100.0)
        .at(point3(0.0, 1.7, 0.0));
    let turn = math::new_deg(360.0 / options.frames as f32);
    let speed = options.spacing * 0.1;

    let mut totals = CullStats::default();
    for frame in 0..options.frames {
        let stats = scene.cull(&camera.frustum(), test, policy);
        debug!(
            "frame {:4}: position = {}, yaw = {}, {}",
            frame, camera.position, camera.yaw, stats
        );
        totals += stats;
        camera.turn(turn);
        camera.move_forward(speed);
    }
    totals
}
