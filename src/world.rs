//! Procedural generation of a star system to populate the spatial tree with.

use bits::Prng;
use spatial::Point;

use log::debug;

pub const KM: f64 = 1e3;
pub const AU: f64 = 1.496e11;

/// Planets orbit within this distance of the star.
const PLANET_SCALE: f64 = 20.0 * AU;
/// Moons orbit within this distance of their planet.
const MOON_SCALE: f64 = 1e8 * KM;
/// Stations orbit within this distance of their planet or moon.
const STATION_SCALE: f64 = 1e6 * KM;
/// Asteroids are scattered out to this distance from the star.
const ASTEROID_SCALE: f64 = 100.0 * AU;

/// No body of a generated system lies further than this from the star on any axis.
pub const WORLD_EXTENT: f64 = ASTEROID_SCALE;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BodyKind {
    Planet,
    Moon,
    Station,
    Asteroid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: usize,
    pub kind: BodyKind,
    pub position: Point,
}

#[derive(Clone, Debug)]
pub struct WorldConfig {
    pub seed: u64,
    pub max_planets: u64,
    /// Upper bound on the moons of each planet.
    pub max_moons: u64,
    pub max_asteroids: u64,
}

#[derive(Debug)]
pub struct World {
    pub bodies: Vec<Body>,
}

impl World {
    /// Generates a star system. The same config always yields the same system.
    pub fn generate(config: &WorldConfig) -> Self {
        let mut prng = Prng::init(config.seed);
        let num_planets = qty_gen(&mut prng, config.max_planets, 1);
        let num_asteroids = qty_gen(&mut prng, config.max_asteroids, 1);
        debug!(
            "seed {} gives {} planets and {} asteroids",
            config.seed, num_planets, num_asteroids
        );

        let mut bodies = Vec::with_capacity((num_planets + num_asteroids) as usize);
        for _ in 0..num_planets {
            let planet = coord_gen(&mut prng, PLANET_SCALE);
            push(&mut bodies, BodyKind::Planet, planet);
            if prng.below(10) == 0 {
                let station = planet + coord_gen(&mut prng, STATION_SCALE);
                push(&mut bodies, BodyKind::Station, station);
            }

            for _ in 0..moon_qty_gen(&mut prng, config.max_moons, 0) {
                let moon = planet + coord_gen(&mut prng, MOON_SCALE);
                push(&mut bodies, BodyKind::Moon, moon);
                if prng.below(100) == 0 {
                    let station = moon + coord_gen(&mut prng, STATION_SCALE);
                    push(&mut bodies, BodyKind::Station, station);
                }
            }
        }
        for _ in 0..num_asteroids {
            let asteroid = coord_gen(&mut prng, ASTEROID_SCALE);
            push(&mut bodies, BodyKind::Asteroid, asteroid);
        }

        World { bodies }
    }

    pub fn count(&self, kind: BodyKind) -> usize {
        self.bodies.iter().filter(|b| b.kind == kind).count()
    }

    fn of_kind(&self, kind: BodyKind) -> Vec<&Body> {
        self.bodies.iter().filter(|b| b.kind == kind).collect()
    }

    /// Picks a random station to search around, or a random planet when there are no stations.
    /// Falls back to any body, and returns `None` only for an empty world.
    pub fn pick_origin(&self, prng: &mut Prng) -> Option<&Body> {
        let mut candidates = self.of_kind(BodyKind::Station);
        if candidates.is_empty() {
            candidates = self.of_kind(BodyKind::Planet);
        }
        if candidates.is_empty() {
            candidates = self.bodies.iter().collect();
        }
        let idx = prng.below(candidates.len() as u64) as usize;
        candidates.get(idx).copied()
    }
}

fn push(bodies: &mut Vec<Body>, kind: BodyKind, position: Point) {
    let id = bodies.len();
    bodies.push(Body { id, kind, position });
}

/// Draws a quantity in `[min, max)` skewed towards small values.
pub fn qty_gen(prng: &mut Prng, max: u64, min: u64) -> u64 {
    if max == 0 {
        return min;
    }
    let a = prng.below(max) as u128;
    let b = prng.below(max) as u128;
    ((a * b / max as u128) as u64).max(min)
}

/// Draws a quantity in `[min, max)` skewed even harder towards small values than [`qty_gen`].
pub fn moon_qty_gen(prng: &mut Prng, max: u64, min: u64) -> u64 {
    if max == 0 {
        return min;
    }
    let m = max as u128;
    let a = prng.below(max) as u128;
    let b = prng.below(max) as u128;
    let c = prng.below(max) as u128;
    let d = prng.below(max) as u128;
    (((a * b / m) * (d * c / m) / m) as u64).max(min)
}

/// Draws a random position within `rho_scaling` of the origin, denser towards the centre and
/// towards the plane `z = 0`.
pub fn coord_gen(prng: &mut Prng, rho_scaling: f64) -> Point {
    let rho = prng.next_f64() * prng.next_f64();
    let theta = prng.next_f64() * 360.0;
    let phi = (prng.next_f64() - 0.5) * 2.0 * prng.next_f64() * 360.0;
    spherical(rho * rho_scaling, theta, phi)
}

/// Converts a radius, azimuth and elevation (both in degrees) to cartesian coordinates.
pub fn spherical(rho: f64, theta: f64, phi: f64) -> Point {
    let (theta, phi) = (theta.to_radians(), phi.to_radians());
    Point::new(
        rho * phi.cos() * theta.cos(),
        rho * phi.cos() * theta.sin(),
        rho * phi.sin(),
    )
}
