//! A bee steering toward a flower and away from a ghost.
//!
//! Walks through the point/vector/angle algebra end to end:
//! `cargo run -p planar --example bee`.

use anyhow::{ensure, Result};
use planar::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn bee_brain(bee: Point2<f64>, flower: Point2<f64>, ghost: Point2<f64>) -> Vector2<f64> {
    let offset_to_flower = flower - bee;
    tracing::info!(distance = offset_to_flower.length(), "flower is {offset_to_flower} away");

    let toward_flower = (flower - bee).normalized();
    let away_from_ghost = -(ghost - bee).normalized();

    // Weighted average of the bee's goals.
    let mut direction = (toward_flower + 2.0 * away_from_ghost) / 3.0;

    let angle_toward_flower = direction.angle_to(toward_flower);
    let nudge = if angle_toward_flower.degrees() < 0.0 { -5.0 } else { 5.0 };
    direction.rotate(Angle::from(nudge));

    direction += Vector2::up() * 0.1;

    tracing::info!(
        toward_flower = dot(direction, toward_flower),
        away_from_ghost = dot(direction, away_from_ghost),
        %angle_toward_flower,
        "steer"
    );
    direction
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();

    let mut bee = Point2::new(2.0, 1.0);
    let flower = Point2::new(5.0, 5.0);
    let ghost = Point2::new(3.0, 0.0);

    let before = bee.distance_to(flower);
    bee += bee_brain(bee, flower, ghost);
    let after = bee.distance_to(flower);
    tracing::info!(%bee, before, after, "moved");
    ensure!(after.is_finite(), "bee left the plane: {bee}");

    let mut angle = Angle::from_degrees(15.0);
    angle += Angle::from(90.0);
    angle += Angle::from_radians(std::f64::consts::PI);
    angle = -angle * 1.5;
    tracing::info!(%angle, radians = angle.radians(), cos = cos(angle), sin = sin(angle), "angle");
    Ok(())
}
