use gridfeat_core::Keypoint;

/// Greedy minimum-distance suppression.
///
/// Candidates are ranked by descending response; a candidate survives only
/// if no stronger survivor lies within `min_distance` pixels. The returned
/// list is ordered strongest first.
pub fn suppress_nearby(candidates: &[Keypoint], min_distance: f32) -> Vec<Keypoint> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| {
        b.response
            .partial_cmp(&a.response)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let min_distance_sq = min_distance * min_distance;
    let mut kept: Vec<Keypoint> = Vec::new();

    for candidate in ranked {
        let crowded = kept.iter().any(|accepted| {
            let dx = candidate.x - accepted.x;
            let dy = candidate.y - accepted.y;
            dx * dx + dy * dy < min_distance_sq
        });

        if !crowded {
            kept.push(candidate);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kp(x: f32, y: f32, response: f32) -> Keypoint {
        Keypoint { x, y, response }
    }

    #[test]
    fn test_strongest_of_a_cluster_survives() {
        let candidates = vec![kp(10.0, 10.0, 5.0), kp(11.0, 10.0, 9.0), kp(10.0, 11.0, 2.0)];
        let kept = suppress_nearby(&candidates, 3.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].response, 9.0);
    }

    #[test]
    fn test_distant_keypoints_all_survive() {
        let candidates = vec![kp(0.0, 0.0, 1.0), kp(20.0, 0.0, 2.0), kp(0.0, 20.0, 3.0)];
        let kept = suppress_nearby(&candidates, 3.0);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_minimum_spacing_holds() {
        let candidates: Vec<Keypoint> = (0..30)
            .map(|i| kp(i as f32, 0.0, (30 - i) as f32))
            .collect();
        let kept = suppress_nearby(&candidates, 5.0);

        for i in 0..kept.len() {
            for j in (i + 1)..kept.len() {
                let dx = kept[i].x - kept[j].x;
                let dy = kept[i].y - kept[j].y;
                let distance = (dx * dx + dy * dy).sqrt();
                assert!(distance >= 5.0, "Keypoints too close after NMS: {}", distance);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(suppress_nearby(&[], 3.0).is_empty());
    }
}
