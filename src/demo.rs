use crate::cmdline::WorldArgs;
use crate::world::{Body, BodyKind, World, WorldConfig, AU, WORLD_EXTENT};

use bits::Prng;
use spatial::{BBox, Config, Point, Tree, TreeOpt};

use log::{debug, error, info, warn};
use separator::Separatable;

use std::time::Instant;

/// Generates a star system, loads it into a tree and runs the tree's queries around a search origin body.
pub fn world(args: &WorldArgs) {
    let now = Instant::now();
    let world = World::generate(&WorldConfig {
        seed: args.seed,
        max_planets: args.planets,
        max_moons: args.moons,
        max_asteroids: args.asteroids,
    });
    info!(
        "generated {} planets, {} moons, {} stations and {} asteroids in {}ms",
        world.count(BodyKind::Planet),
        world.count(BodyKind::Moon),
        world.count(BodyKind::Station),
        world.count(BodyKind::Asteroid).separated_string(),
        now.elapsed().as_millis()
    );

    let mut config = Config::default();
    config.set_option(TreeOpt::BinSize(args.bin_size));
    let mut tree = Tree::with_config(WORLD_EXTENT, config);

    let now = Instant::now();
    for body in &world.bodies {
        if let Err(e) = tree.insert(body.clone(), body.position) {
            warn!("skipping body {}: {}", body.id, e);
        }
    }
    let elapsed = now.elapsed();
    info!("built {} in {}ms", tree, elapsed.as_millis());
    debug!("root field: {}", tree.root().field());
    if elapsed.as_secs_f64() > 0.0 {
        let per_sec = (tree.len() as f64 / elapsed.as_secs_f64()) as u64;
        info!("{} inserts per second", per_sec.separated_string());
    }

    let mut prng = Prng::init(args.seed);
    let origin = match world.pick_origin(&mut prng) {
        Some(b) => b.clone(),
        None => {
            error!("the generated world is empty");
            return;
        }
    };
    info!("searching around {:?} {} at {}", origin.kind, origin.id, origin.position);

    let region = BBox::new(origin.position, args.radius * AU);
    let now = Instant::now();
    let found = tree.lookup(&region);
    info!(
        "{} bodies within {} AU of the origin ({}μs)",
        found.len().separated_string(),
        args.radius,
        now.elapsed().as_micros()
    );

    let now = Instant::now();
    let nearest = tree.k_nearest(args.k, origin.position);
    info!("{} nearest bodies ({}μs):", nearest.len(), now.elapsed().as_micros());
    for body in &nearest {
        println!("{}", describe(body, origin.position));
    }

    // Pull the furthest of them onto the origin and check it is now the closest after the origin.
    let furthest = nearest.last().map(|b| (*b).clone());
    if let Some(moved) = furthest {
        let to = origin.position + AU * 1e-6;
        match tree.relocate(&moved, moved.position, to) {
            Ok(()) => {
                let closest = tree.k_nearest(2, origin.position);
                info!(
                    "relocated body {}; the two closest bodies are now {:?}",
                    moved.id,
                    closest.iter().map(|b| b.id).collect::<Vec<_>>()
                );
            }
            Err(e) => warn!("could not relocate body {}: {}", moved.id, e),
        }
    }
}

fn describe(body: &Body, from: Point) -> String {
    let distance = body.position.squared_dist(from).sqrt() / AU;
    let kind = format!("{:?}", body.kind);
    format!("{:>9} {:<8} {:.6} AU", body.id, kind, distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_world_runs() {
        world(&WorldArgs {
            seed: 5,
            planets: 10,
            moons: 20,
            asteroids: 2000,
            bin_size: 16,
            k: 5,
            radius: 2.0,
        });
    }

    #[test]
    fn describe_in_au() {
        let body = Body {
            id: 4,
            kind: BodyKind::Asteroid,
            position: Point::new(2.0 * AU, 0.0, 0.0),
        };
        assert!(describe(&body, Point::ORIGIN).ends_with("2.000000 AU"));
    }
}
