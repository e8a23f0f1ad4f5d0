//! Picking what the player's swing will hit.

use bevy::prelude::*;

/// Point `reach` units in front of `transform`.
pub fn attack_center(transform: &Transform, reach: f32) -> Vec3 {
    transform.translation + transform.forward().as_vec3() * reach
}

/// The candidate closest to `center`, if any lies within `radius`.
pub fn closest_in_range(
    center: Vec3,
    radius: f32,
    candidates: impl IntoIterator<Item = (Entity, Vec3)>,
) -> Option<Entity> {
    let radius_sq = radius * radius;

    candidates
        .into_iter()
        .map(|(entity, position)| (entity, position.distance_squared(center)))
        .filter(|(_, distance_sq)| *distance_sq <= radius_sq)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_in_front() {
        // Bevy's forward is -Z
        let center = attack_center(&Transform::from_xyz(1.0, 0.0, 1.0), 1.0);
        assert!((center - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn picks_closest_in_range() {
        let near = Entity::from_raw(1);
        let far = Entity::from_raw(2);
        let out_of_range = Entity::from_raw(3);

        let picked = closest_in_range(
            Vec3::ZERO,
            2.0,
            [
                (far, Vec3::new(1.5, 0.0, 0.0)),
                (out_of_range, Vec3::new(5.0, 0.0, 0.0)),
                (near, Vec3::new(0.0, 0.0, -0.5)),
            ],
        );

        assert_eq!(picked, Some(near));
    }

    #[test]
    fn nothing_in_range() {
        let picked = closest_in_range(
            Vec3::ZERO,
            1.0,
            [(Entity::from_raw(1), Vec3::new(0.0, 3.0, 0.0))],
        );
        assert_eq!(picked, None);
    }

    #[test]
    fn edge_of_radius_counts() {
        let edge = Entity::from_raw(4);
        let picked = closest_in_range(Vec3::ZERO, 2.0, [(edge, Vec3::new(2.0, 0.0, 0.0))]);
        assert_eq!(picked, Some(edge));
    }
}
